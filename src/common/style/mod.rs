//! Colour handling shared by themes and render plans.

// Submodule declarations
pub mod color;

// Re-exports
pub use color::RGBColor;
