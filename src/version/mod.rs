//! Version layer for the release bump check
//!
//! This module parses release versions and checks that the branch under test
//! declares a version greater than master, consistently across the
//! build-properties file and the README.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Revision   │────▶│   Parser    │────▶│   Checker   │
//! │ (read text) │     │  (extract)  │     │  (compare)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                                ▼
//!                                         ┌─────────────┐
//!                                         │   Semver    │
//!                                         │(parse, cmp) │
//!                                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`checker`]: Ordered consistency checks between current and master
//! - [`error`]: Error type shared by parsing and checking
//! - [`revision`]: Source trait for one revision's files, plus the on-disk implementation
//! - [`semver`]: `major.minor.patch` value type

pub mod checker;
pub mod error;
pub mod revision;
pub mod semver;
