//! Result of a document store operation.
//!
//! Store operations do not fail. An operation that cannot apply leaves the
//! snapshot untouched and reports why; callers that do not care simply drop
//! the outcome.

use crate::common::{ContentId, MediaId, PresentationId, SlideId};
use std::fmt;

/// The referent an operation could not find.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Presentation(PresentationId),
    Slide(SlideId),
    Content(ContentId),
    Media(MediaId),
    /// A slide position outside the current slide list
    SlideIndex(usize),
    /// Nothing left to undo or redo
    History,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Presentation(id) => write!(f, "presentation {}", id),
            Target::Slide(id) => write!(f, "slide {}", id),
            Target::Content(id) => write!(f, "content {}", id),
            Target::Media(id) => write!(f, "media {}", id),
            Target::SlideIndex(index) => write!(f, "slide index {}", index),
            Target::History => f.write_str("history entry"),
        }
    }
}

/// What a store operation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T = ()> {
    /// The operation produced a new snapshot
    Applied(T),
    /// There is no current presentation to operate on
    NoPresentation,
    /// An id or index did not resolve
    NotFound(Target),
}

impl<T> Outcome<T> {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }

    /// The value of an applied operation, `None` otherwise.
    pub fn applied(self) -> Option<T> {
        match self {
            Outcome::Applied(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Applied(value) => Outcome::Applied(f(value)),
            Outcome::NoPresentation => Outcome::NoPresentation,
            Outcome::NotFound(target) => Outcome::NotFound(target),
        }
    }
}

impl<T> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Applied(_) => f.write_str("applied"),
            Outcome::NoPresentation => f.write_str("no current presentation"),
            Outcome::NotFound(target) => write!(f, "{} not found", target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_applied_value() {
        let outcome = Outcome::Applied(MediaId::from("m1"));
        assert!(outcome.is_applied());
        assert_eq!(outcome.applied(), Some(MediaId::from("m1")));

        let missing: Outcome<MediaId> = Outcome::NoPresentation;
        assert_eq!(missing.applied(), None);
    }

    #[test]
    fn test_display() {
        let outcome: Outcome = Outcome::NotFound(Target::Slide(SlideId::from("s9")));
        assert_eq!(outcome.to_string(), "slide s9 not found");
        assert_eq!(Outcome::Applied(()).to_string(), "applied");
    }

    #[test]
    fn test_map_preserves_failure() {
        let outcome: Outcome<u32> = Outcome::NotFound(Target::SlideIndex(4));
        assert_eq!(outcome.map(|n| n + 1), Outcome::NotFound(Target::SlideIndex(4)));
        assert_eq!(Outcome::Applied(1).map(|n| n + 1), Outcome::Applied(2));
    }
}
