//! Reusable media catalog of a presentation.
//!
//! The library lives on the [`Presentation`](crate::presentation::Presentation)
//! snapshot and is mutated only through the document store. Using an entry in a
//! slide copies its URL into a new content item; the two never reference each
//! other afterwards.

mod item;
mod query;

pub use item::{MediaItem, MediaType, NewMedia};
pub use query::MediaQuery;
