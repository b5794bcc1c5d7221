//! Capability interfaces for the services around the editor core.
//!
//! Persistence, media acquisition and text generation live outside the core.
//! Each is a trait the host implements; the helpers here run a capability
//! without holding the store lock and then commit its result through the
//! ordinary store operations. A failing capability returns an error and never
//! produces a snapshot.

mod media_source;
mod snapshot;
mod text_assist;

pub use media_source::{LinkSource, MediaRequest, MediaSource, import_media};
pub use snapshot::{JsonFileStore, MemorySnapshotStore, SnapshotStore, restore, save_current};
pub use text_assist::{AssistAction, TextAssist, apply_text_assist};
