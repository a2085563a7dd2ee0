//! Scenario: the same namespace in two source roots
//!
//! Success Criteria:
//! - Build fails naming the namespace and both files
//! - No compiler is ever invoked
//! - Nothing is written to the output directory

use cljc::config::CompileConfig;
use cljc::{CljcError, CompileOptions, CompileUseCase, ExternalCompilers, LocalRepositoryResolver};

use crate::common::*;

#[test]
fn scenario_duplicate_namespace_fails_before_compiling() {
    let project = TestProject::new();
    let one = project.root("one");
    let two = project.root("two");
    project.write("one/a/b/c.clj", "(ns a.b.c)");
    project.write("two/a/b/c.clj", "(ns a.b.c)");
    project.write("two/Helper.java", "class Helper {}");

    let runner = RecordingRunner::new();
    let use_case = CompileUseCase::new(
        &toolchain(),
        &runner,
        LocalRepositoryResolver::new(None, project.dir.path()),
        ExternalCompilers::new(&runner, CompileConfig::default()),
    )
    .unwrap();

    let err = use_case
        .compile(&[one, two], &project.target(), &[], &CompileOptions::new())
        .unwrap_err();

    let message = err.to_string();
    assert!(matches!(err, CljcError::DuplicateNamespace { .. }));
    assert!(message.contains("a.b.c"), "message: {message}");
    assert!(message.contains("one"), "message: {message}");
    assert!(message.contains("two"), "message: {message}");

    assert!(runner.calls().is_empty());
    assert!(!project.target().exists());
}

#[test]
fn scenario_duplicate_in_libs_override_is_also_rejected() {
    let project = TestProject::new();
    let one = project.root("one");
    let two = project.root("two");
    project.write("one/x.clj", "(ns x)");
    project.write("two/x.clj", "(ns x)");

    let runner = RecordingRunner::new();
    let use_case = CompileUseCase::new(
        &toolchain(),
        &runner,
        LocalRepositoryResolver::new(None, project.dir.path()),
        ExternalCompilers::new(&runner, CompileConfig::default()),
    )
    .unwrap();

    let options = CompileOptions::new().with_libs(Some(vec!["x".to_string()]));
    let result = use_case.compile(&[one, two], &project.target(), &[], &options);

    assert!(matches!(result, Err(CljcError::DuplicateNamespace { .. })));
    assert!(runner.calls().is_empty());
}
