use std::path::PathBuf;
use std::process::ExitStatus;

use crate::installer::Step;
use crate::template::Template;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Broad class of an [`Error`], used to decide how the process ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed command line.
    Parse,
    /// A prompt could not be answered.
    Validation,
    /// The project directory could not be claimed.
    Precondition,
    /// A setup step failed after the directory was created.
    Installation,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] clap::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] inquire::InquireError),

    #[error("Directory already exists. Please choose another name for the project.")]
    DirectoryExists(PathBuf),

    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} template is not available yet")]
    TemplateUnavailable(Template),

    #[error("{step} failed: {source}")]
    Install {
        step: Step,
        #[source]
        source: InstallError,
    },
}

/// Why a single installation step failed.
#[derive(Debug, thiserror::Error)]
pub enum InstallError {
    #[error("could not run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}{}", stderr_suffix(.stderr))]
    Command {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Fs(#[from] fs_extra::error::Error),
}

fn stderr_suffix(stderr: &str) -> String {
    let stderr = stderr.trim_end();
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

impl Error {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Parse(_) => ErrorKind::Parse,
            Error::Prompt(_) => ErrorKind::Validation,
            Error::DirectoryExists(_) | Error::CreateDir { .. } => {
                ErrorKind::Precondition
            }
            Error::TemplateUnavailable(_) | Error::Install { .. } => ErrorKind::Installation,
        }
    }

    /// Whether the process should exit with a failure status.
    ///
    /// Installation failures are reported but leave the exit status at zero.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        self.kind() != ErrorKind::Installation
    }

    /// The step that failed, for installation errors.
    #[must_use]
    pub fn step(&self) -> Option<Step> {
        match self {
            Error::Install { step, .. } => Some(*step),
            Error::TemplateUnavailable(_) => Some(Step::CheckTemplate),
            _ => None,
        }
    }
}

impl InstallError {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        InstallError::Io {
            context: context.into(),
            source,
        }
    }

    #[must_use]
    pub fn at(self, step: Step) -> Error {
        Error::Install { step, source: self }
    }
}
