use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::InstallError;

/// A program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl Display for CommandLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Captured output of a successful command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    pub stdout: String,
    pub stderr: String,
}

impl Output {
    /// Stdout lines followed by stderr lines.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.stdout.lines().chain(self.stderr.lines())
    }
}

/// Runs external programs for the installer.
pub trait CommandRunner {
    /// Runs `cmd` inside `cwd` and waits for it to finish.
    ///
    /// # Errors
    ///
    /// Fails if the program can not be spawned or exits unsuccessfully.
    fn run(&mut self, cmd: &CommandLine, cwd: &Path) -> Result<Output, InstallError>;

    /// Runs `cmd` inside `cwd` with its output discarded and reports whether
    /// it succeeded.
    fn probe(&mut self, cmd: &CommandLine, cwd: &Path) -> bool;
}

/// Runs commands as child processes.
///
/// Programs are looked up on `PATH` first, so `npm.cmd` style shims are found
/// on Windows.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

fn resolve(program: &str, cwd: &Path) -> std::io::Result<PathBuf> {
    which::which_in(program, std::env::var_os("PATH"), cwd)
        .map_err(|e| std::io::Error::new(ErrorKind::NotFound, format!("{program}: {e}")))
}

impl CommandRunner for SystemRunner {
    fn run(&mut self, cmd: &CommandLine, cwd: &Path) -> Result<Output, InstallError> {
        let spawn_error = |source: std::io::Error| InstallError::Spawn {
            command: cmd.to_string(),
            source,
        };

        let output = Command::new(resolve(&cmd.program, cwd).map_err(spawn_error)?)
            .args(&cmd.args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .output()
            .map_err(spawn_error)?;

        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if output.status.success() {
            Ok(Output {
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr,
            })
        } else {
            Err(InstallError::Command {
                command: cmd.to_string(),
                status: output.status,
                stderr,
            })
        }
    }

    fn probe(&mut self, cmd: &CommandLine, cwd: &Path) -> bool {
        let Ok(program) = resolve(&cmd.program, cwd) else {
            return false;
        };

        Command::new(program)
            .args(&cmd.args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok_and(|s| s.success())
    }
}
