use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::path::Path;

use crate::config::Settings;
use crate::error::InstallError;
use crate::guard::TargetPath;
use crate::package_manager::{detect_yarn, PackageManager};
use crate::runner::{CommandLine, CommandRunner};
use crate::spinner::spinner;
use crate::validate::ProjectOptions;
use crate::{info, trace, Error, Result};

/// One stage of the installation, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    CheckTemplate,
    Clone,
    ChangeDir,
    Detect,
    Install,
    CopyEnv,
    RemoveVcs,
    RemoveLockfile,
    Uninstall,
    Complete,
}

impl Display for Step {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Step::CheckTemplate => "checking template",
            Step::Clone => "cloning template",
            Step::ChangeDir => "changing directory",
            Step::Detect => "detecting package manager",
            Step::Install => "installing dependencies",
            Step::CopyEnv => "copying environment files",
            Step::RemoveVcs => "removing version control metadata",
            Step::RemoveLockfile => "removing unused lockfile",
            Step::Uninstall => "removing unused packages",
            Step::Complete => "finishing",
        };
        write!(f, "{s}")
    }
}

/// What a finished installation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub steps: Vec<Step>,
    pub package_manager: PackageManager,
}

/// Turns an empty project directory into a ready-to-run project.
pub struct Installer<R> {
    runner: R,
    settings: Settings,
}

impl<R: CommandRunner> Installer<R> {
    pub fn new(runner: R, settings: Settings) -> Self {
        Self { runner, settings }
    }

    #[must_use]
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Runs every step in order, stopping at the first failure. Nothing is
    /// rolled back.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateUnavailable`] before touching anything if the
    /// template has no repository, or [`Error::Install`] naming the step that
    /// failed.
    pub fn install(
        &mut self,
        options: &ProjectOptions,
        target: &TargetPath,
    ) -> Result<InstallReport> {
        let repository = options
            .template
            .repository()
            .ok_or(Error::TemplateUnavailable(options.template))?;
        let mut steps = vec![Step::CheckTemplate];

        self.clone_template(repository, target)
            .map_err(|e| e.at(Step::Clone))?;
        steps.push(Step::Clone);

        let cwd = target.path();
        trace!("Working directory: {}", cwd.display());
        steps.push(Step::ChangeDir);

        let pm = PackageManager::select(detect_yarn(&mut self.runner, cwd));
        trace!("Using {pm}");
        steps.push(Step::Detect);

        self.install_dependencies(pm, cwd)
            .map_err(|e| e.at(Step::Install))?;
        info!("Dependencies installed.");
        steps.push(Step::Install);

        self.copy_env(cwd).map_err(|e| e.at(Step::CopyEnv))?;
        info!("Environment files copied.");
        steps.push(Step::CopyEnv);

        fs_extra::dir::remove(cwd.join(&self.settings.vcs_dir))
            .map_err(|e| InstallError::from(e).at(Step::RemoveVcs))?;
        steps.push(Step::RemoveVcs);

        remove_if_exists(&cwd.join(pm.other().lockfile()))
            .map_err(|e| e.at(Step::RemoveLockfile))?;
        steps.push(Step::RemoveLockfile);

        info!("Removing unused packages...");
        self.uninstall_scaffold_packages(pm, cwd)
            .map_err(|e| e.at(Step::Uninstall))?;
        info!("Packages removed.");
        steps.push(Step::Uninstall);

        print_next_steps(target.folder_name(), pm);
        steps.push(Step::Complete);

        Ok(InstallReport {
            steps,
            package_manager: pm,
        })
    }

    /// Runs `cmd` behind a spinner showing `status`. The command's output is
    /// traced once the spinner is gone.
    fn run_command(
        &mut self,
        cmd: &CommandLine,
        cwd: &Path,
        status: Option<String>,
    ) -> Result<(), InstallError> {
        trace!("Running `{cmd}` in {}", cwd.display());

        let pb = status.map(|msg| spinner(msg, self.settings.progress));
        let res = self.runner.run(cmd, cwd);
        if let Some(pb) = pb {
            pb.finish_and_clear();
        }

        let output = res?;
        for line in output.lines() {
            trace!("{line}");
        }

        Ok(())
    }

    fn clone_template(&mut self, repository: &str, target: &TargetPath) -> Result<(), InstallError> {
        let depth = self.settings.clone_depth.to_string();
        let clone = CommandLine::new(
            self.settings.git.as_str(),
            ["clone", "--depth", depth.as_str(), repository, target.folder_name()],
        );

        self.run_command(
            &clone,
            target.root(),
            Some(format!("Downloading project files from {repository}")),
        )
    }

    fn install_dependencies(&mut self, pm: PackageManager, cwd: &Path) -> Result<(), InstallError> {
        self.run_command(
            &pm.install(),
            cwd,
            Some("Installing dependencies...".to_string()),
        )
    }

    fn copy_env(&self, cwd: &Path) -> Result<(), InstallError> {
        let example = cwd.join(&self.settings.env_example);
        let env = cwd.join(&self.settings.env_file);

        std::fs::copy(&example, &env).map_err(|e| {
            InstallError::io(
                format!("Failed to copy {} to {}", example.display(), env.display()),
                e,
            )
        })?;
        std::fs::remove_file(&example)
            .map_err(|e| InstallError::io(format!("Failed to remove {}", example.display()), e))
    }

    fn uninstall_scaffold_packages(
        &mut self,
        pm: PackageManager,
        cwd: &Path,
    ) -> Result<(), InstallError> {
        for package in self.settings.scaffold_packages.clone() {
            self.run_command(&pm.uninstall(&package), cwd, None)?;
        }

        Ok(())
    }
}

fn remove_if_exists(path: &Path) -> Result<(), InstallError> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            trace!("{} not present", path.display());
            Ok(())
        }
        Err(e) => Err(InstallError::io(
            format!("Failed to remove {}", path.display()),
            e,
        )),
    }
}

fn print_next_steps(folder_name: &str, pm: PackageManager) {
    info!("Installation completed!");
    println!();
    println!("Start by typing:");
    println!("    cd {folder_name}");
    println!("    {}", pm.dev_command());
    println!();
    println!("Happy coding!!!");
}
