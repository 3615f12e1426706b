use std::path::PathBuf;

use thiserror::Error;

use crate::parser::readme::DeclarationStyle;
use crate::version::semver::VersionValue;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("invalid version string {input:?}: {reason}")]
    MalformedVersion { input: String, reason: String },

    #[error("not found {style} version in readme file")]
    VersionNotFound { style: DeclarationStyle },

    #[error("current {subject} version {current} must be greater than master {master}")]
    VersionNotIncremented {
        subject: &'static str,
        current: VersionValue,
        master: VersionValue,
    },

    #[error("readme declares maven version {maven} but gradle version {gradle}")]
    InconsistentDeclaration {
        maven: VersionValue,
        gradle: VersionValue,
    },

    #[error("properties file declares version {properties} but readme declares {readme}")]
    CrossFileMismatch {
        properties: VersionValue,
        readme: VersionValue,
    },

    #[error("property {key:?} not found in properties file")]
    MissingProperty { key: String },

    #[error("Invalid properties file: {0}")]
    InvalidProperties(#[from] java_properties::PropertiesError),

    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid coordinate pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
