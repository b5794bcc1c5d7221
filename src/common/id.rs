//! Opaque identifiers for presentations, slides, content items and media.
//!
//! Every id is a newtype over `String` so the kinds cannot be mixed up, while
//! serializing transparently as the bare string.
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Prefix used by the sequential id strategy.
            pub const PREFIX: &'static str = $prefix;

            /// Wrap an existing identifier string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the raw identifier.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Identifier of a presentation, assigned at creation.
    PresentationId,
    "p"
);
define_id!(
    /// Identifier of a slide, unique within the store.
    SlideId,
    "s"
);
define_id!(
    /// Identifier of a content item on a slide.
    ContentId,
    "c"
);
define_id!(
    /// Identifier of a media library entry.
    MediaId,
    "m"
);

/// How new identifiers are minted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// RFC4122 v4 GUIDs
    #[default]
    Random,
    /// `p1`, `s1`, `c1`, `m1`, ... in creation order (deterministic)
    Sequential,
}

/// Mints identifiers according to an [`IdStrategy`].
///
/// Sequential ids count per kind, so the first media entry is always `m1`.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    strategy: IdStrategy,
    counters: [u64; 4],
}

impl IdGenerator {
    /// Create a generator for the given strategy.
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            strategy,
            counters: [0; 4],
        }
    }

    /// The strategy this generator follows.
    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    fn next_raw(&mut self, kind: usize, prefix: &str) -> String {
        match self.strategy {
            IdStrategy::Random => generate_guid(),
            IdStrategy::Sequential => {
                self.counters[kind] += 1;
                format!("{}{}", prefix, self.counters[kind])
            },
        }
    }

    pub fn presentation(&mut self) -> PresentationId {
        PresentationId(self.next_raw(0, PresentationId::PREFIX))
    }

    pub fn slide(&mut self) -> SlideId {
        SlideId(self.next_raw(1, SlideId::PREFIX))
    }

    pub fn content(&mut self) -> ContentId {
        ContentId(self.next_raw(2, ContentId::PREFIX))
    }

    pub fn media(&mut self) -> MediaId {
        MediaId(self.next_raw(3, MediaId::PREFIX))
    }

    /// Advance the counter for `kind` past an existing `{prefix}{n}` id.
    ///
    /// Ids of any other shape cannot collide with sequential output and are
    /// ignored.
    fn reserve_raw(&mut self, kind: usize, prefix: &str, raw: &str) {
        if let Some(n) = raw
            .strip_prefix(prefix)
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|digits| digits.parse::<u64>().ok())
        {
            self.counters[kind] = self.counters[kind].max(n);
        }
    }

    pub fn reserve_presentation(&mut self, id: &PresentationId) {
        self.reserve_raw(0, PresentationId::PREFIX, id.as_str());
    }

    pub fn reserve_slide(&mut self, id: &SlideId) {
        self.reserve_raw(1, SlideId::PREFIX, id.as_str());
    }

    pub fn reserve_content(&mut self, id: &ContentId) {
        self.reserve_raw(2, ContentId::PREFIX, id.as_str());
    }

    pub fn reserve_media(&mut self, id: &MediaId) {
        self.reserve_raw(3, MediaId::PREFIX, id.as_str());
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(IdStrategy::default())
    }
}

/// Generate a random RFC4122 v4 GUID as raw 16 bytes
pub fn generate_guid_bytes() -> [u8; 16] {
    let mut bytes = [0u8; 16];
    let mut rng = rand::rng();
    rng.fill(&mut bytes);
    // RFC4122 v4
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    bytes
}

/// Generate a random GUID in the form xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx
pub fn generate_guid() -> String {
    format_guid(&generate_guid_bytes())
}

/// Format raw GUID bytes as a lowercase hyphenated string
pub fn format_guid(bytes: &[u8; 16]) -> String {
    let mut out = String::with_capacity(36);
    for (i, byte) in bytes.iter().enumerate() {
        if matches!(i, 4 | 6 | 8 | 10) {
            out.push('-');
        }
        out.push_str(&format!("{:02x}", byte));
    }
    out
}
