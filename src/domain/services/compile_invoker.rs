//! Compile Invoker
//!
//! One batched `clojure.lang.Compile` run covers every namespace. Artifact
//! freshness only decides whether that batch runs at all; once it runs, it
//! compiles everything.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info, trace};

use crate::domain::ports::{CommandRunner, CommandSpec};
use crate::domain::services::LocatedNamespace;
use crate::domain::value_objects::{Classpath, Namespace};
use crate::error::{CljcError, CljcResult};
use crate::fs::is_up_to_date;

/// Main class of the Clojure ahead-of-time compiler
pub const COMPILE_MAIN: &str = "clojure.lang.Compile";

/// System property naming the compiler's output directory
pub const COMPILE_PATH_PROPERTY: &str = "clojure.compile.path";

/// Namespaces whose `__init.class` is missing or older than the source
pub fn stale_namespaces<'a>(
    located: &'a [LocatedNamespace],
    target: &Path,
) -> io::Result<Vec<&'a Namespace>> {
    let mut stale = Vec::new();
    for entry in located {
        let artifact = target.join(entry.namespace.artifact_path());
        if !is_up_to_date(&artifact, &entry.source)? {
            trace!(namespace = %entry.namespace, artifact = %artifact.display(), "stale");
            stale.push(&entry.namespace);
        }
    }
    Ok(stale)
}

/// Build the single batched compile command.
///
/// The output directory is appended to the classpath so namespaces compiled
/// earlier in the batch can be loaded by later ones.
pub fn build_command(
    java: &Path,
    namespaces: &[Namespace],
    classpath: &Classpath,
    target: &Path,
) -> CommandSpec {
    let mut compile_path = OsString::from(format!("-D{}=", COMPILE_PATH_PROPERTY));
    compile_path.push(target.as_os_str());

    CommandSpec::new(java)
        .flag_value("-classpath", classpath.with_entry(target).to_os_string())
        .arg(compile_path)
        .arg(COMPILE_MAIN)
        .args(namespaces.iter().map(Namespace::as_str))
}

/// Run the batched compile. A non-zero exit fails the whole step with the
/// compiler's output attached.
pub fn invoke<R: CommandRunner>(
    runner: &R,
    java: &Path,
    namespaces: &[Namespace],
    classpath: &Classpath,
    target: &Path,
) -> CljcResult<()> {
    if namespaces.is_empty() {
        debug!("no namespaces to compile");
        return Ok(());
    }

    fs::create_dir_all(target)?;

    let command = build_command(java, namespaces, classpath, target);
    info!(namespaces = namespaces.len(), target = %target.display(), "compiling clojure namespaces");
    trace!(command = %command, "invoking compiler");

    let output = runner.run(&command).map_err(|e| CljcError::Configuration {
        message: format!("could not launch '{}': {}", java.display(), e),
        setting: "toolchain.java",
        env_var: "CLJC_JAVA",
    })?;

    if !output.is_success() {
        return Err(CljcError::compile_failed(&output));
    }

    for line in output.stdout.lines() {
        debug!("{}", line);
    }
    Ok(())
}
