//! Slide layouts and the render plans projected from them.
//!
//! The catalog declares, for each layout, where the title goes and which
//! content slots it reads. [`RenderPlan::build`] turns a slide's
//! `(layout, title, content)` into an ordered list of placed regions, each
//! carrying a [`ContentView`] that says how the item displays. Everything here
//! is a pure function of its inputs.

mod catalog;
mod content;
mod plan;
mod summary;

pub use catalog::{Area, Arrangement, Fallback, LayoutSpec, Slot, TitlePlacement, catalog, spec_for};
pub use content::{ContentView, GraphView, TableView, embed_url, placeholder_prompt};
pub use plan::{Region, RegionSource, RenderPlan};
pub use summary::{SlideSummary, slide_summaries};
