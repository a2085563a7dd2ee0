//! Scenario: building twice
//!
//! Success Criteria:
//! - Second run with no changes skips the batched compile
//! - Output bytes are identical after both runs
//! - Touching one source recompiles the whole batch

use std::fs;
use std::time::{Duration, SystemTime};

use cljc::config::CompileConfig;
use cljc::{CompileOptions, CompileUseCase, ExternalCompilers, LocalRepositoryResolver};

use crate::common::*;

#[test]
fn scenario_second_run_is_a_no_op() {
    let project = TestProject::new();
    let src = project.root("src");
    project.write("src/foo/bar.clj", "(ns foo.bar)");
    project.write("src/foo/baz.clj", "(ns foo.baz)");
    project.write("src/logback.xml", "<configuration/>");

    let runner = RecordingRunner::new();
    let use_case = CompileUseCase::new(
        &toolchain(),
        &runner,
        LocalRepositoryResolver::new(None, project.dir.path()),
        ExternalCompilers::new(&runner, CompileConfig::default()),
    )
    .unwrap();

    let first = use_case
        .compile(&[src.clone()], &project.target(), &[], &CompileOptions::new())
        .unwrap();
    let after_first = snapshot(&project.target());

    let second = use_case
        .compile(&[src], &project.target(), &[], &CompileOptions::new())
        .unwrap();
    let after_second = snapshot(&project.target());

    assert!(first.compiled);
    assert_eq!(first.copied.len(), 1);
    assert!(!second.compiled);
    assert!(second.copied.is_empty());
    assert_eq!(second.unchanged.len(), 1);
    assert_eq!(runner.calls_to("java").len(), 1);
    assert_eq!(after_first, after_second);
}

#[test]
fn scenario_stale_source_recompiles_whole_batch() {
    let project = TestProject::new();
    let src = project.root("src");
    project.write("src/a.clj", "(ns a)");
    let b = project.write("src/b.clj", "(ns b)");

    let runner = RecordingRunner::new();
    let use_case = CompileUseCase::new(
        &toolchain(),
        &runner,
        LocalRepositoryResolver::new(None, project.dir.path()),
        ExternalCompilers::new(&runner, CompileConfig::default()),
    )
    .unwrap();

    use_case
        .compile(&[src.clone()], &project.target(), &[], &CompileOptions::new())
        .unwrap();

    let later = SystemTime::now() + Duration::from_secs(60);
    fs::File::options()
        .write(true)
        .open(&b)
        .unwrap()
        .set_modified(later)
        .unwrap();

    let report = use_case
        .compile(&[src], &project.target(), &[], &CompileOptions::new())
        .unwrap();

    assert!(report.compiled);
    let java = runner.calls_to("java");
    assert_eq!(java.len(), 2);
    let last = java[1]
        .args
        .iter()
        .rev()
        .take(2)
        .map(|a| a.to_string_lossy().into_owned())
        .collect::<Vec<_>>();
    assert_eq!(last, vec!["b", "a"]);
}

#[test]
fn scenario_missing_artifact_triggers_compile() {
    let project = TestProject::new();
    let src = project.root("src");
    project.write("src/a.clj", "(ns a)");

    let runner = RecordingRunner::new();
    let use_case = CompileUseCase::new(
        &toolchain(),
        &runner,
        LocalRepositoryResolver::new(None, project.dir.path()),
        ExternalCompilers::new(&runner, CompileConfig::default()),
    )
    .unwrap();

    use_case
        .compile(&[src.clone()], &project.target(), &[], &CompileOptions::new())
        .unwrap();
    fs::remove_file(project.target().join("a__init.class")).unwrap();
    let report = use_case
        .compile(&[src], &project.target(), &[], &CompileOptions::new())
        .unwrap();

    assert!(report.compiled);
    assert!(project.target().join("a__init.class").is_file());
}
