//! Slidedeck - the document core of a presentation editor
//!
//! This library holds presentations in memory, edits them through a single
//! store that produces immutable snapshots, and projects slides into render
//! plans for display and playback.
//!
//! # Features
//!
//! - **Document store**: every edit builds a new snapshot; unknown ids are
//!   no-ops instead of errors
//! - **Layout catalog**: ten named slide layouts with position-based slots and
//!   a stacked fallback for anything else
//! - **Render plans**: a pure projection of `(layout, title, content)` into
//!   placed regions with per-type display rules
//! - **Media library**: per-presentation reusable assets copied into slides
//! - **Playback**: keyboard navigation with a debounced transition
//! - **Collaborators**: async traits for snapshot storage, media acquisition
//!   and text generation
//!
//! # Example - Editing a presentation
//!
//! ```rust
//! use slidedeck::presentation::{ContentUpdate, DocumentStore, Position, SlideLayout};
//!
//! let mut store = DocumentStore::new();
//! store.create_presentation("Demo");
//! let slide = store.add_slide(SlideLayout::TitleTwoColumns).applied().unwrap();
//!
//! let left = store.current().unwrap().slide(&slide).unwrap()
//!     .content_at(Position::Left).unwrap().id.clone();
//! store.update_content(&slide, &left, ContentUpdate::value("Hi"));
//!
//! let pres = store.current().unwrap();
//! assert_eq!(pres.slides[1].content[0].value, "Hi");
//! assert_eq!(pres.slides[1].content[1].value, "Right column content");
//! ```
//!
//! # Example - Rendering the active slide
//!
//! ```rust
//! use slidedeck::layout::{Area, RegionSource, RenderPlan};
//! use slidedeck::presentation::DocumentStore;
//!
//! let mut store = DocumentStore::new();
//! store.create_presentation("Demo");
//!
//! let pres = store.current().unwrap();
//! let plan = RenderPlan::for_slide(pres, store.current_slide().unwrap());
//! assert_eq!(plan.region(Area::Hero).unwrap().source, RegionSource::Title("Demo"));
//! ```
//!
//! # Example - Saving snapshots
//!
//! ```rust
//! use slidedeck::collab::{MemorySnapshotStore, SnapshotStore, save_current};
//! use slidedeck::presentation::DocumentStore;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> slidedeck::Result<()> {
//! let store = DocumentStore::new().into_shared();
//! let id = store.write().create_presentation("Demo");
//!
//! let snapshots = MemorySnapshotStore::new();
//! save_current(&store, &snapshots).await?;
//! assert_eq!(snapshots.load(&id).await?.title, "Demo");
//! # Ok(())
//! # }
//! ```

/// Errors, identifiers and colours shared by every module
pub mod common;

/// Store and playback options, loadable from YAML or JSON
pub mod config;

/// Presentation data model and the document store
///
/// The store is the only mutator. Each operation swaps in a new snapshot and
/// reports an [`Outcome`](presentation::Outcome).
pub mod presentation;

/// Per-presentation media library
pub mod media;

/// Layout catalog, content display rules and render plans
pub mod layout;

/// Keyboard-driven slide show playback
pub mod playback;

/// Serialization of presentation snapshots
pub mod persist;

/// Capability traits for persistence, media acquisition and text generation
pub mod collab;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use config::{EditorConfig, PlaybackOptions, StoreOptions};
pub use layout::RenderPlan;
pub use playback::Playback;
pub use presentation::{DocumentStore, Outcome, Presentation, SharedStore};
