use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Where the project is generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetPath {
    root: PathBuf,
    folder_name: String,
    path: PathBuf,
}

impl TargetPath {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, folder_name: &str) -> Self {
        let root = root.into();
        let path = root.join(folder_name);

        Self {
            root,
            folder_name: folder_name.to_string(),
            path,
        }
    }

    /// Directory the project folder is created in.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    #[must_use]
    pub fn folder_name(&self) -> &str {
        &self.folder_name
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }
}

/// Claims the project directory by creating it.
///
/// # Errors
///
/// Returns [`Error::DirectoryExists`] if anything already lives at the target
/// path, or [`Error::CreateDir`] for any other IO error.
pub fn create_project_dir(target: &TargetPath) -> Result<()> {
    match std::fs::create_dir(target.path()) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            Err(Error::DirectoryExists(target.path().to_path_buf()))
        }
        Err(source) => Err(Error::CreateDir {
            path: target.path().to_path_buf(),
            source,
        }),
    }
}
