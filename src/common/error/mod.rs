//! Unified error types for the slidedeck library.
//!
//! The document store itself never fails; these errors cover serialization,
//! configuration and the external collaborators the store is driven by.

// Submodule declarations
pub mod types;
pub mod conversions;

// Re-exports
pub use types::{Error, Result};
