//! Common types, traits, and utilities shared across the editor core.
//!
//! This module provides the unified error type, identifier generation and
//! colour handling used by the document store, the layout catalog and the
//! collaborator layer.

// Submodule declarations
pub mod error;
pub mod id;
pub mod style;

// Re-exports for convenience
pub use error::{Error, Result};
pub use id::{ContentId, IdGenerator, IdStrategy, MediaId, PresentationId, SlideId};
pub use style::RGBColor;
