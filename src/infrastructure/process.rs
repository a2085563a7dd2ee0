//! System Command Runner
//!
//! Runs compilers as blocking child processes with captured output.

use std::io;
use std::process::{Command, Stdio};

use tracing::trace;

use crate::domain::ports::{CommandOutput, CommandRunner, CommandSpec};

/// `CommandRunner` backed by `std::process::Command`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, command: &CommandSpec) -> io::Result<CommandOutput> {
        trace!(command = %command, "spawning");

        let output = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .output()?;

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
