//! Parser layer
//! - properties.rs: `key=value` build-properties parser
//! - readme.rs: Maven/Gradle snippet extractor for README files

pub mod properties;
pub mod readme;

pub use properties::Properties;
pub use readme::{DeclarationStyle, ReadmeExtractor, ReadmeVersions};
