use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::version::semver::ComponentParsing;

// =============================================================================
// Defaults
// =============================================================================

/// Build-properties file declaring the release version
pub const DEFAULT_PROPERTIES_FILE: &str = "gradle.properties";

/// README carrying the Maven and Gradle dependency snippets
pub const DEFAULT_README_FILE: &str = "README.md";

/// Key of the version entry in the properties file
pub const DEFAULT_VERSION_KEY: &str = "version";

/// Group id used in the Gradle coordinate snippet
pub const DEFAULT_COORDINATE_GROUP: &str = "com.spotty-server";

/// Artifact id used in the Gradle coordinate snippet
pub const DEFAULT_COORDINATE_ARTIFACT: &str = "core";

/// Where CI checks out the master branch, relative to the working directory
pub const DEFAULT_MASTER_DIR: &str = "master-branch";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Checker configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckConfig {
    pub files: FilesConfig,
    pub version_key: String,
    pub coordinate: CoordinateConfig,
    /// Reject version components that are not purely numeric
    pub strict_components: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            files: FilesConfig::default(),
            version_key: DEFAULT_VERSION_KEY.to_string(),
            coordinate: CoordinateConfig::default(),
            strict_components: false,
        }
    }
}

impl CheckConfig {
    /// Load configuration from a JSON file; missing fields fall back to defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn component_parsing(&self) -> ComponentParsing {
        if self.strict_components {
            ComponentParsing::Strict
        } else {
            ComponentParsing::Permissive
        }
    }
}

/// File names looked up inside each checkout
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct FilesConfig {
    pub properties: PathBuf,
    pub readme: PathBuf,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            properties: PathBuf::from(DEFAULT_PROPERTIES_FILE),
            readme: PathBuf::from(DEFAULT_README_FILE),
        }
    }
}

/// Dependency coordinate shown in the Gradle snippet (`"group:artifact:version"`)
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct CoordinateConfig {
    pub group: String,
    pub artifact: String,
}

impl Default for CoordinateConfig {
    fn default() -> Self {
        Self {
            group: DEFAULT_COORDINATE_GROUP.to_string(),
            artifact: DEFAULT_COORDINATE_ARTIFACT.to_string(),
        }
    }
}
