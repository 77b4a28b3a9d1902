use derive_builder::Builder;

/// Knobs for the installer.
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
#[builder(setter(into), default)]
pub struct Settings {
    /// Program used to clone templates.
    pub git: String,
    pub clone_depth: u32,
    /// Env file shipped by the template.
    pub env_example: String,
    /// Env file the generated project reads.
    pub env_file: String,
    /// Version-control metadata removed after cloning.
    pub vcs_dir: String,
    /// Packages the template only needs for generation.
    pub scaffold_packages: Vec<String>,
    /// Show spinners while commands run.
    pub progress: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            git: "git".into(),
            clone_depth: 1,
            env_example: ".env.example".into(),
            env_file: ".env".into(),
            vcs_dir: ".git".into(),
            scaffold_packages: vec!["inquirer".into(), "arg".into(), "esm".into()],
            progress: true,
        }
    }
}

impl Settings {
    /// Create a new [`Settings`] builder
    #[must_use]
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::default()
    }

    /// Defaults with overrides from the environment:
    ///
    /// - `NODEGEN_GIT`: program used instead of `git`
    /// - `NODEGEN_NO_PROGRESS`: disables spinners when set
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();

        if let Some(git) = var("NODEGEN_GIT").filter(|g| !g.is_empty()) {
            settings.git = git;
        }
        if var("NODEGEN_NO_PROGRESS").is_some() {
            settings.progress = false;
        }

        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_defaults_for_unset_fields() {
        let settings = Settings::builder()
            .progress(false)
            .git("/usr/bin/git")
            .build()
            .unwrap();

        assert!(!settings.progress);
        assert_eq!(settings.git, "/usr/bin/git");
        assert_eq!(settings.clone_depth, 1);
        assert_eq!(settings.scaffold_packages, ["inquirer", "arg", "esm"]);
    }

    #[test]
    fn environment_overrides() {
        let settings = Settings::from_vars(|key| match key {
            "NODEGEN_GIT" => Some("hub".into()),
            "NODEGEN_NO_PROGRESS" => Some(String::new()),
            _ => None,
        });
        assert_eq!(settings.git, "hub");
        assert!(!settings.progress);

        assert_eq!(Settings::from_vars(|_| None), Settings::default());
        assert_eq!(
            Settings::from_vars(|k| (k == "NODEGEN_GIT").then(String::new)).git,
            "git"
        );
    }
}
