//! Property tests for namespace inference.

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::PathBuf;

use proptest::prelude::*;

use cljc::domain::services::detect_namespaces;
use cljc::Namespace;

fn relative_source_paths() -> impl Strategy<Value = BTreeSet<Vec<String>>> {
    // lowercase only: case-insensitive file systems would merge `A` and `a`
    let segment = proptest::string::string_regex("[a-z][a-z0-9_]{0,7}").unwrap();
    proptest::collection::btree_set(proptest::collection::vec(segment, 1..=4), 1..=12)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: N `.clj` files give N distinct namespaces, each mapping back
    /// to the file it came from.
    #[test]
    fn property_one_namespace_per_source_file(paths in relative_source_paths()) {
        let dir = tempfile::tempdir().unwrap();
        let mut expected = BTreeSet::new();
        for segments in &paths {
            let relative: PathBuf = segments.iter().collect::<PathBuf>().with_extension("clj");
            let file = dir.path().join(&relative);
            fs::create_dir_all(file.parent().unwrap()).unwrap();
            fs::write(&file, "").unwrap();
            expected.insert(relative);
        }
        fs::write(dir.path().join("resource.txt"), "").unwrap();

        let namespaces = detect_namespaces(dir.path()).unwrap();

        prop_assert_eq!(namespaces.len(), paths.len());
        let distinct: HashSet<&Namespace> = namespaces.iter().collect();
        prop_assert_eq!(distinct.len(), namespaces.len());

        let reversed: BTreeSet<PathBuf> = namespaces.iter().map(Namespace::source_path).collect();
        prop_assert_eq!(reversed, expected);
    }

    /// PROPERTY: A dot inside a directory name or stem never yields a
    /// namespace, so no two files can claim the same name.
    #[test]
    fn property_dotted_paths_never_alias(
        head in "[a-z]{1,4}",
        tail in "[a-z]{1,4}",
        dotted_dir in any::<bool>(),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join(&head).join(format!("{tail}.clj"));
        let dotted = if dotted_dir {
            dir.path().join(format!("{head}.{tail}")).join("x.clj")
        } else {
            dir.path().join(format!("{head}.{tail}.clj"))
        };
        for file in [&plain, &dotted] {
            fs::create_dir_all(file.parent().unwrap()).unwrap();
            fs::write(file, "").unwrap();
        }

        let namespaces = detect_namespaces(dir.path()).unwrap();

        prop_assert_eq!(namespaces.len(), 1);
        prop_assert_eq!(namespaces[0].as_str(), format!("{head}.{tail}"));
    }

    /// PROPERTY: Parsing arbitrary text never panics, and anything accepted
    /// maps to an artifact under the same directory as its source.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,64}") {
        if let Ok(ns) = Namespace::parse(&s) {
            prop_assert_eq!(ns.as_str(), s.as_str());
            let source_path = ns.source_path();
            let artifact_path = ns.artifact_path();
            prop_assert_eq!(source_path.parent(), artifact_path.parent());
        }
    }
}
