//! README version extractor
//!
//! The README carries two copy-pasteable dependency snippets that both embed
//! the release version:
//! - Maven: `<version>1.2.3</version>`
//! - Gradle: `implementation "com.spotty-server:core:1.2.3"`
//!
//! Only the first occurrence of each snippet is considered.

use std::fmt;

use regex::Regex;

use crate::config::CoordinateConfig;
use crate::version::error::CheckError;

/// Which dependency snippet a version was taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationStyle {
    Maven,
    Gradle,
}

impl DeclarationStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationStyle::Maven => "maven",
            DeclarationStyle::Gradle => "gradle",
        }
    }
}

impl fmt::Display for DeclarationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw version strings found in one README
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadmeVersions {
    pub maven: String,
    pub gradle: String,
}

/// Extractor for the Maven and Gradle snippets of a README
pub struct ReadmeExtractor {
    /// Regex for `<version>X</version>`
    maven_re: Regex,
    /// Regex for `"group:artifact:X"`
    gradle_re: Regex,
}

impl ReadmeExtractor {
    pub fn new(coordinate: &CoordinateConfig) -> Result<Self, CheckError> {
        let gradle_pattern = format!(
            r#""{}:{}:(.*?)""#,
            regex::escape(&coordinate.group),
            regex::escape(&coordinate.artifact)
        );

        Ok(Self {
            maven_re: Regex::new(r"<version>(.*?)</version>")?,
            gradle_re: Regex::new(&gradle_pattern)?,
        })
    }

    pub fn extract(&self, content: &str) -> Result<ReadmeVersions, CheckError> {
        Ok(ReadmeVersions {
            maven: first_capture(&self.maven_re, content, DeclarationStyle::Maven)?,
            gradle: first_capture(&self.gradle_re, content, DeclarationStyle::Gradle)?,
        })
    }
}

fn first_capture(
    re: &Regex,
    content: &str,
    style: DeclarationStyle,
) -> Result<String, CheckError> {
    re.captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|version| !version.is_empty())
        .map(str::to_string)
        .ok_or(CheckError::VersionNotFound { style })
}
