//! Test environment for running the `cljc` binary.
//!
//! `CliEnv` owns a temp project and a `bin/` directory that can hold fake
//! compiler scripts. Scripts are put first on PATH and every invocation is
//! appended to `calls.log` in the project.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running a cljc CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

pub struct CliEnv {
    pub project_root: TempDir,
    bin_dir: PathBuf,
    env: Vec<(String, String)>,
}

impl CliEnv {
    pub fn new() -> Self {
        let project_root = tempfile::tempdir().expect("create temp project");
        let bin_dir = project_root.path().join("bin");
        std::fs::create_dir_all(&bin_dir).expect("create bin dir");
        Self {
            project_root,
            bin_dir,
            env: Vec::new(),
        }
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.project_path(relative);
        std::fs::create_dir_all(path.parent().expect("parent")).expect("create parent");
        std::fs::write(&path, content).expect("write file");
        path
    }

    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    /// Lines written to `calls.log` by fake compilers
    pub fn logged_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.project_path("calls.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Install a shell script as `bin/<name>`
    #[cfg(unix)]
    pub fn install_script(&self, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin_dir.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}")).expect("write script");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("chmod script");
        path
    }

    /// Fake `java` and `javac` that behave like the real compilers for
    /// the purpose of producing class files
    #[cfg(unix)]
    pub fn install_fake_jvm(&self) {
        self.install_script(
            "java",
            r#"out=""
compiling=0
for arg in "$@"; do
  if [ "$compiling" = 1 ]; then
    f="$out/$(echo "$arg" | tr . /)__init.class"
    mkdir -p "$(dirname "$f")"
    printf '%s' "$arg" > "$f"
    continue
  fi
  case "$arg" in
    -Dclojure.compile.path=*) out="${arg#-Dclojure.compile.path=}" ;;
    clojure.lang.Compile) compiling=1 ;;
  esac
done
echo "java $*" >> "$CLJC_TEST_LOG"
"#,
        );
        self.install_script(
            "javac",
            r#"out=""
prev=""
for arg in "$@"; do
  if [ "$prev" = "-d" ]; then out="$arg"; fi
  case "$arg" in
    *.java) printf 'class' > "$out/$(basename "$arg" .java).class" ;;
  esac
  prev="$arg"
done
echo "javac $*" >> "$CLJC_TEST_LOG"
"#,
        );
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.project_root.path(), args)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let path = match std::env::var_os("PATH") {
            Some(existing) => {
                let mut paths = vec![self.bin_dir.clone()];
                paths.extend(std::env::split_paths(&existing));
                std::env::join_paths(paths).expect("join PATH")
            }
            None => self.bin_dir.clone().into_os_string(),
        };

        let mut cmd = Command::new(env!("CARGO_BIN_EXE_cljc"));
        cmd.current_dir(cwd)
            .args(args)
            .env("PATH", path)
            .env("CLJC_TEST_LOG", self.project_path("calls.log"))
            .env("HOME", self.project_root.path())
            .env("XDG_CONFIG_HOME", self.project_path(".config"))
            .env_remove("CLOJURE_HOME")
            .env_remove("CLJC_JAVA")
            .env_remove("CLJC_REPOSITORY")
            .env_remove("CLJC_SECONDARY_POLICY")
            .env_remove("RUST_LOG");
        for (key, value) in &self.env {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("run cljc binary");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
