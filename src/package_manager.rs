use std::fmt::{Display, Formatter};
use std::path::Path;

use crate::runner::{CommandLine, CommandRunner};

/// Result of probing for an optional tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Yarn,
    Npm,
}

/// Checks whether Yarn can be run inside `cwd` by asking it for its version.
///
/// A project's `.yarnrc.yml` or `packageManager` field can change the answer,
/// so `cwd` should be the project directory.
pub fn detect_yarn(runner: &mut impl CommandRunner, cwd: &Path) -> Availability {
    if runner.probe(&CommandLine::new("yarnpkg", ["--version"]), cwd) {
        Availability::Available
    } else {
        Availability::Unavailable
    }
}

impl PackageManager {
    /// Yarn when it is available, npm otherwise.
    #[must_use]
    pub fn select(yarn: Availability) -> Self {
        match yarn {
            Availability::Available => PackageManager::Yarn,
            Availability::Unavailable => PackageManager::Npm,
        }
    }

    #[must_use]
    pub fn program(self) -> &'static str {
        match self {
            PackageManager::Yarn => "yarn",
            PackageManager::Npm => "npm",
        }
    }

    #[must_use]
    pub fn install(self) -> CommandLine {
        CommandLine::new(self.program(), ["install"])
    }

    #[must_use]
    pub fn uninstall(self, package: &str) -> CommandLine {
        let verb = match self {
            PackageManager::Yarn => "remove",
            PackageManager::Npm => "uninstall",
        };

        CommandLine::new(self.program(), [verb, package])
    }

    #[must_use]
    pub fn lockfile(self) -> &'static str {
        match self {
            PackageManager::Yarn => "yarn.lock",
            PackageManager::Npm => "package-lock.json",
        }
    }

    /// The package manager that was not picked.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            PackageManager::Yarn => PackageManager::Npm,
            PackageManager::Npm => PackageManager::Yarn,
        }
    }

    /// Command that starts the generated project's dev server.
    #[must_use]
    pub fn dev_command(self) -> &'static str {
        match self {
            PackageManager::Yarn => "yarn dev",
            PackageManager::Npm => "npm run dev",
        }
    }
}

impl Display for PackageManager {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program())
    }
}
