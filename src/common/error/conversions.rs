//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from the
//! serialization crates' error types to the unified Error type. YAML errors
//! are mapped at their call sites since the YAML crate's error types differ
//! between reading and writing.

use super::types::Error;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::Io(err.into())
        } else {
            Error::Json(err.to_string())
        }
    }
}
