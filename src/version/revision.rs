//! Access to the files of one revision (the branch under test or master)

use std::path::{Path, PathBuf};

#[cfg(test)]
use mockall::automock;

use crate::config::FilesConfig;
use crate::version::error::CheckError;

/// Trait for reading the raw text a revision declares its version in
#[cfg_attr(test, automock)]
pub trait RevisionSource {
    /// Content of the build-properties file
    fn properties(&self) -> Result<String, CheckError>;

    /// Content of the README
    fn readme(&self) -> Result<String, CheckError>;
}

/// A revision checked out on disk
#[derive(Debug, Clone)]
pub struct FsRevision {
    properties_path: PathBuf,
    readme_path: PathBuf,
}

impl FsRevision {
    /// Resolve the configured file names against a checkout root
    pub fn new(root: &Path, files: &FilesConfig) -> Self {
        Self {
            properties_path: root.join(&files.properties),
            readme_path: root.join(&files.readme),
        }
    }

    pub fn properties_path(&self) -> &Path {
        &self.properties_path
    }

    pub fn readme_path(&self) -> &Path {
        &self.readme_path
    }
}

impl RevisionSource for FsRevision {
    fn properties(&self) -> Result<String, CheckError> {
        read(&self.properties_path)
    }

    fn readme(&self) -> Result<String, CheckError> {
        read(&self.readme_path)
    }
}

fn read(path: &Path) -> Result<String, CheckError> {
    std::fs::read_to_string(path).map_err(|source| CheckError::Io {
        path: path.to_path_buf(),
        source,
    })
}
