//! Unified error types for the slidedeck library.
use thiserror::Error;

/// Main error type for slidedeck operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML (de)serialization error
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Media entry rejected by the library form rules
    #[error("Invalid media: {0}")]
    InvalidMedia(String),

    /// An external collaborator (upload, generation, network) failed
    #[error("Collaborator '{name}' failed: {message}")]
    Collaborator { name: String, message: String },

    /// No persisted snapshot exists for the requested presentation
    #[error("Snapshot not found: {0}")]
    SnapshotNotFound(String),

    /// Configuration could not be interpreted
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Build a collaborator failure from any displayable cause.
    pub fn collaborator(name: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Error::Collaborator {
            name: name.into(),
            message: cause.to_string(),
        }
    }
}

/// Result type for slidedeck operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn category(err: &Error) -> &'static str {
        match err {
            Error::Io(_) => "IO",
            Error::Json(_) => "JSON",
            Error::Yaml(_) => "YAML",
            Error::InvalidMedia(_) => "Invalid media",
            Error::Collaborator { .. } => "Collaborator",
            Error::SnapshotNotFound(_) => "Snapshot not found",
            Error::InvalidConfig(_) => "Invalid configuration",
        }
    }

    #[test]
    fn test_every_variant_names_its_category() {
        let errors = [
            Error::Io(std::io::Error::other("disk")),
            Error::Json("eof".to_string()),
            Error::Yaml("tab".to_string()),
            Error::InvalidMedia("empty url".to_string()),
            Error::collaborator("uploader", "reset"),
            Error::SnapshotNotFound("p1".to_string()),
            Error::InvalidConfig("bad".to_string()),
        ];
        for err in &errors {
            assert!(err.to_string().starts_with(category(err)), "{err}");
        }
    }
}
