//! Project fixtures and a recording command runner.

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use cljc::domain::ports::{CommandOutput, CommandRunner, CommandSpec};
use cljc::ToolchainConfig;

/// Runtime archive used by every scenario
pub const RUNTIME_JAR: &str = "/opt/lang/runtime.jar";

/// Toolchain pointing at [`RUNTIME_JAR`]
pub fn toolchain() -> ToolchainConfig {
    ToolchainConfig {
        runtime_jar: Some(PathBuf::from(RUNTIME_JAR)),
        ..ToolchainConfig::default()
    }
}

/// Isolated project directory
pub struct TestProject {
    pub dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp project"),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Create (if needed) and return a source root
    pub fn root(&self, relative: &str) -> PathBuf {
        let root = self.path(relative);
        fs::create_dir_all(&root).expect("create source root");
        root
    }

    /// Write a file, creating parent directories
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        fs::create_dir_all(path.parent().expect("parent")).expect("create parent");
        fs::write(&path, content).expect("write file");
        path
    }

    pub fn target(&self) -> PathBuf {
        self.path("target/classes")
    }
}

/// Every file under `dir` with its bytes, sorted by path
pub fn snapshot(dir: &Path) -> Vec<(PathBuf, Vec<u8>)> {
    let mut files = Vec::new();
    collect(dir, dir, &mut files);
    files.sort();
    files
}

fn collect(base: &Path, dir: &Path, out: &mut Vec<(PathBuf, Vec<u8>)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(base, &path, out);
        } else {
            let relative = path.strip_prefix(base).expect("under base").to_path_buf();
            out.push((relative, fs::read(&path).expect("read file")));
        }
    }
}

/// Fake JVM toolchain. Writes a class file per compiled unit, the way the
/// real compilers would, and records every command.
#[derive(Default)]
pub struct RecordingRunner {
    calls: RefCell<Vec<CommandSpec>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.borrow().clone()
    }

    /// Commands whose program is `program`
    pub fn calls_to(&self, program: &str) -> Vec<CommandSpec> {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.program == program)
            .cloned()
            .collect()
    }
}

fn strings(command: &CommandSpec) -> Vec<String> {
    command
        .args
        .iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect()
}

fn write_class(dir: &Path, relative: String, content: &str) -> io::Result<()> {
    let path = dir.join(relative);
    fs::create_dir_all(path.parent().expect("class parent"))?;
    fs::write(path, content)
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &CommandSpec) -> io::Result<CommandOutput> {
        self.calls.borrow_mut().push(command.clone());
        let args = strings(command);

        if command.program == "javac" || command.program == "groovyc" || command.program == "scalac" {
            let d = args.iter().position(|a| a == "-d").expect("-d flag");
            let out = PathBuf::from(&args[d + 1]);
            for file in &args[d + 2..] {
                let path = Path::new(file);
                let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
                    continue;
                };
                if ["java", "groovy", "scala"].contains(&ext) {
                    let stem = path.file_stem().expect("stem").to_string_lossy();
                    write_class(&out, format!("{stem}.class"), ext)?;
                }
            }
            return Ok(CommandOutput::success());
        }

        let out = args
            .iter()
            .find_map(|a| a.strip_prefix("-Dclojure.compile.path="))
            .map(PathBuf::from)
            .expect("compile path property");
        let main = args
            .iter()
            .position(|a| a == "clojure.lang.Compile")
            .expect("compile main class");
        for ns in &args[main + 1..] {
            write_class(&out, format!("{}__init.class", ns.replace('.', "/")), ns)?;
        }
        Ok(CommandOutput {
            code: Some(0),
            stdout: args[main + 1..]
                .iter()
                .map(|ns| format!("Compiling {ns}\n"))
                .collect(),
            stderr: String::new(),
        })
    }
}
