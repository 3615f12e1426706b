//! Build-properties parser
//!
//! Reads Java-style `.properties` text such as `gradle.properties` through
//! the `java-properties` crate, so separators, continuations and `\uXXXX`
//! escapes follow the Java rules.

use std::collections::HashMap;

use crate::version::error::CheckError;

/// Key/value entries of one properties file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: HashMap<String, String>,
}

impl Properties {
    pub fn parse(content: &str) -> Result<Self, CheckError> {
        let entries = java_properties::read(content.as_bytes())?;
        Ok(Self { entries })
    }

    /// Value of `key` with trailing whitespace removed
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|value| value.trim_end())
    }

    /// Like [`Properties::get`], but a missing key is an error
    pub fn require(&self, key: &str) -> Result<&str, CheckError> {
        self.get(key).ok_or_else(|| CheckError::MissingProperty {
            key: key.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
