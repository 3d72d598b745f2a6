//! Error types for profile loading.
//!
//! Only structural problems with the profile document are errors. Malformed
//! individual values never surface here; accessors degrade to their fallback.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// The profile exists but is not valid structured data.
    #[error("failed to parse profile at '{}': {message}. Please fix the profile syntax.", path.display())]
    Parse { path: PathBuf, message: String },

    /// A named section is present but is not an object.
    #[error("section '{section}' in the active profile must be an object")]
    Shape { section: String },

    /// The profile exists but could not be read.
    #[error("failed to read profile at '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ProfileError>;

impl ProfileError {
    pub fn parse(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Parse { path: path.into(), message: message.to_string() }
    }

    pub fn shape(section: impl Into<String>) -> Self {
        Self::Shape { section: section.into() }
    }
}
