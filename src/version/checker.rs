//! Release version consistency check between the current revision and master

use std::fmt;

use tracing::{debug, info};

use crate::config::CheckConfig;
use crate::parser::properties::Properties;
use crate::parser::readme::ReadmeExtractor;
use crate::version::error::CheckError;
use crate::version::revision::RevisionSource;
use crate::version::semver::{ComponentParsing, VersionValue};

/// Outcome of a successful check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckReport {
    /// Version declared by the current properties file (and README)
    pub current: VersionValue,
    /// Version declared by the master properties file
    pub master: VersionValue,
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "current version {} is greater than master {}, all is good",
            self.current, self.master
        )
    }
}

/// Versions declared by one README
#[derive(Debug, Clone, Copy)]
struct ReadmeDeclaration {
    maven: VersionValue,
    gradle: VersionValue,
}

pub struct ConsistencyChecker {
    extractor: ReadmeExtractor,
    version_key: String,
    parsing: ComponentParsing,
}

impl ConsistencyChecker {
    pub fn new(config: &CheckConfig) -> Result<Self, CheckError> {
        Ok(Self {
            extractor: ReadmeExtractor::new(&config.coordinate)?,
            version_key: config.version_key.clone(),
            parsing: config.component_parsing(),
        })
    }

    /// Run every check in order and stop at the first failure
    pub fn check<S: RevisionSource>(
        &self,
        current: &S,
        master: &S,
    ) -> Result<CheckReport, CheckError> {
        let current_version = self.properties_version(current)?;
        let master_version = self.properties_version(master)?;
        debug!(
            "properties versions: current={} master={}",
            current_version, master_version
        );
        ensure_incremented("properties file", current_version, master_version)?;

        let current_readme = self.readme_declaration(current)?;
        let master_readme = self.readme_declaration(master)?;
        debug!(
            "readme versions: current={:?} master={:?}",
            current_readme, master_readme
        );

        if current_readme.maven != current_readme.gradle {
            return Err(CheckError::InconsistentDeclaration {
                maven: current_readme.maven,
                gradle: current_readme.gradle,
            });
        }

        if current_version != current_readme.maven {
            return Err(CheckError::CrossFileMismatch {
                properties: current_version,
                readme: current_readme.maven,
            });
        }

        ensure_incremented("readme maven", current_readme.maven, master_readme.maven)?;
        ensure_incremented("readme gradle", current_readme.gradle, master_readme.gradle)?;

        info!(
            "version {} is incremented over {} and declared consistently",
            current_version, master_version
        );

        Ok(CheckReport {
            current: current_version,
            master: master_version,
        })
    }

    fn properties_version<S: RevisionSource>(
        &self,
        source: &S,
    ) -> Result<VersionValue, CheckError> {
        let properties = Properties::parse(&source.properties()?)?;
        let raw = properties.require(&self.version_key)?;
        VersionValue::parse_with(raw, self.parsing)
    }

    fn readme_declaration<S: RevisionSource>(
        &self,
        source: &S,
    ) -> Result<ReadmeDeclaration, CheckError> {
        let versions = self.extractor.extract(&source.readme()?)?;
        Ok(ReadmeDeclaration {
            maven: VersionValue::parse_with(&versions.maven, self.parsing)?,
            gradle: VersionValue::parse_with(&versions.gradle, self.parsing)?,
        })
    }
}

fn ensure_incremented(
    subject: &'static str,
    current: VersionValue,
    master: VersionValue,
) -> Result<(), CheckError> {
    if current > master {
        Ok(())
    } else {
        Err(CheckError::VersionNotIncremented {
            subject,
            current,
            master,
        })
    }
}
