//! Property tests for classpath composition.

use std::collections::HashSet;
use std::path::PathBuf;

use proptest::prelude::*;

use cljc::domain::ports::{ArtifactResolver, DependencyResolutionError};
use cljc::domain::services::compose;
use cljc::fs::absolute;
use cljc::DependencyRef;

struct PathsOnly;

impl ArtifactResolver for PathsOnly {
    fn resolve(&self, dependency: &DependencyRef) -> Result<PathBuf, DependencyResolutionError> {
        match dependency {
            DependencyRef::Path(path) => Ok(absolute(path).unwrap()),
            DependencyRef::Artifact(c) => Err(DependencyResolutionError::NoRepository {
                coordinate: c.to_string(),
            }),
        }
    }
}

/// Small alphabet so duplicates are common
fn entry() -> impl Strategy<Value = PathBuf> {
    prop_oneof![
        Just(PathBuf::from("/opt/lang/runtime.jar")),
        "[a-d]{1,2}".prop_map(|s| PathBuf::from(format!("/libs/{s}.jar"))),
        "[a-d]{1,2}".prop_map(|s| PathBuf::from(format!("/src/{s}"))),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The classpath never repeats an entry and the runtime archive
    /// is always the last one.
    #[test]
    fn property_no_duplicates_and_runtime_last(
        deps in proptest::collection::vec(entry(), 0..8),
        roots in proptest::collection::vec(entry(), 0..5),
    ) {
        let runtime = PathBuf::from("/opt/lang/runtime.jar");
        let dependencies: Vec<DependencyRef> = deps.iter().cloned().map(DependencyRef::from).collect();

        let classpath = compose(&dependencies, &roots, &runtime, &PathsOnly).unwrap();
        let entries = classpath.entries();

        let distinct: HashSet<&PathBuf> = entries.iter().collect();
        prop_assert_eq!(distinct.len(), entries.len());
        prop_assert_eq!(entries.last(), Some(&absolute(&runtime).unwrap()));
    }

    /// PROPERTY: Dependencies come before source roots (first occurrence wins).
    #[test]
    fn property_dependencies_precede_roots(
        deps in proptest::collection::vec("[a-d]".prop_map(|s| PathBuf::from(format!("/libs/{s}.jar"))), 1..5),
        roots in proptest::collection::vec("[a-d]".prop_map(|s| PathBuf::from(format!("/src/{s}"))), 1..5),
    ) {
        let dependencies: Vec<DependencyRef> = deps.iter().cloned().map(DependencyRef::from).collect();
        let classpath = compose(&dependencies, &roots, &PathBuf::from("/rt.jar"), &PathsOnly).unwrap();

        let first_root = classpath
            .entries()
            .iter()
            .position(|e| e.starts_with(absolute(std::path::Path::new("/src")).unwrap()))
            .unwrap();
        let last_dep = classpath
            .entries()
            .iter()
            .rposition(|e| e.starts_with(absolute(std::path::Path::new("/libs")).unwrap()))
            .unwrap();
        prop_assert!(last_dep < first_root);
    }
}
