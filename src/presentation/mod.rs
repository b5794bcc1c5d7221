//! Presentation document model and the store that edits it.
//!
//! # Architecture
//!
//! - [`Presentation`], [`Slide`], [`ContentItem`]: immutable-by-convention
//!   snapshot values, serializable as JSON-shaped data
//! - [`DocumentStore`]: owns every presentation and is the only mutator; each
//!   operation produces a new snapshot and reports an [`Outcome`]
//! - seed rules: the content a new slide starts with, per layout
//!
//! # Example
//!
//! ```rust
//! use slidedeck::presentation::{ContentUpdate, DocumentStore, Position, SlideLayout};
//!
//! let mut store = DocumentStore::new();
//! store.create_presentation("Demo");
//! let slide_id = store.add_slide(SlideLayout::TitleTwoColumns).applied().unwrap();
//!
//! let before = store.current().unwrap().clone();
//! let left = before.slide(&slide_id).unwrap().content_at(Position::Left).unwrap().id.clone();
//! store.update_content(&slide_id, &left, ContentUpdate::value("Hi"));
//!
//! // the old snapshot is untouched
//! assert_eq!(before.slide(&slide_id).unwrap().content[0].value, "Left column content");
//! assert_eq!(store.current().unwrap().slide(&slide_id).unwrap().content[0].value, "Hi");
//! ```

// Submodule declarations
mod history;
mod outcome;
mod patch;
mod prs;
mod seed;
mod slide;
mod store;
mod types;


// Re-exports
pub use history::History;
pub use outcome::{Outcome, Target};
pub use patch::{ContentUpdate, NewContent, SlideUpdate, ThemeUpdate};
pub use prs::{Presentation, Theme};
pub use seed::{DEFAULT_SEED, SeedItem, seed_for};
pub use slide::{ContentItem, Slide};
pub use store::{DocumentStore, SharedStore};
pub use types::{ContentStyle, ContentType, Position, SlideLayout, TextAlign};
