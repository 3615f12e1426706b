use std::fmt;
use std::str::FromStr;

use crate::version::error::CheckError;

/// How each dot-separated component is turned into a number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComponentParsing {
    /// Take the leading run of digits after an optional `+` and ignore the rest ("2rc1" -> 2)
    #[default]
    Permissive,
    /// Every component must be made of ASCII digits only
    Strict,
}

/// A `major.minor.patch` release version.
///
/// Ordering is lexicographic on `(major, minor, patch)`, which the derived
/// `Ord` provides through field declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionValue {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl VersionValue {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version string with permissive component parsing.
    ///
    /// Examples:
    /// - "1.2.3" -> VersionValue(1, 2, 3)
    /// - "2.0.0rc1" -> VersionValue(2, 0, 0)
    /// - "1.2" -> MalformedVersion
    pub fn parse(text: &str) -> Result<Self, CheckError> {
        Self::parse_with(text, ComponentParsing::Permissive)
    }

    pub fn parse_with(text: &str, mode: ComponentParsing) -> Result<Self, CheckError> {
        let parts: Vec<&str> = text.split('.').collect();
        let [major, minor, patch] = parts.as_slice() else {
            return Err(malformed(
                text,
                format!("expected 3 components, found {}", parts.len()),
            ));
        };

        Ok(Self {
            major: parse_component(text, major, mode)?,
            minor: parse_component(text, minor, mode)?,
            patch: parse_component(text, patch, mode)?,
        })
    }
}

fn parse_component(text: &str, part: &str, mode: ComponentParsing) -> Result<u64, CheckError> {
    let digits = match mode {
        ComponentParsing::Strict => {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed(
                    text,
                    format!("component {part:?} is not a number"),
                ));
            }
            part
        }
        ComponentParsing::Permissive => {
            let trimmed = part.trim_start();
            let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
            let end = trimmed
                .bytes()
                .position(|b| !b.is_ascii_digit())
                .unwrap_or(trimmed.len());
            if end == 0 {
                return Err(malformed(
                    text,
                    format!("component {part:?} does not start with a digit"),
                ));
            }
            &trimmed[..end]
        }
    };

    digits
        .parse::<u64>()
        .map_err(|e| malformed(text, format!("component {part:?}: {e}")))
}

fn malformed(text: &str, reason: String) -> CheckError {
    CheckError::MalformedVersion {
        input: text.to_string(),
        reason,
    }
}

impl fmt::Display for VersionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for VersionValue {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
