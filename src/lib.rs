pub mod args;
pub mod banner;
pub mod config;
pub mod error;
pub mod guard;
pub mod installer;
pub mod log;
pub mod package_manager;
pub mod runner;
pub mod spinner;
pub mod template;
pub mod validate;

use std::path::Path;

pub use error::{Error, ErrorKind, Result};

use args::Options;
use config::Settings;
use guard::TargetPath;
use installer::{InstallReport, Installer};
use runner::CommandRunner;
use validate::Prompter;

/// Generates a project under `root` from parsed command-line options.
///
/// Missing options are asked for through `prompter`, then the project
/// directory is created and handed to the installer.
///
/// # Errors
///
/// Returns the first error met. Nothing is cleaned up on failure.
pub fn generate(
    options: Options,
    root: &Path,
    prompter: &mut impl Prompter,
    runner: impl CommandRunner,
    settings: Settings,
) -> Result<InstallReport> {
    let options = validate::complete_options(options, prompter)?;
    let target = TargetPath::new(root, &options.project_name);

    trace!("Creating {}", target.path().display());
    guard::create_project_dir(&target)?;

    Installer::new(runner, settings).install(&options, &target)
}
