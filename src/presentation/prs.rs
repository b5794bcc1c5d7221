//! Presentation snapshots and their theme.

use super::slide::Slide;
use crate::common::{MediaId, PresentationId, RGBColor, SlideId};
use crate::media::MediaItem;
use serde::{Deserialize, Serialize};

/// Visual theme of a presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub primary_color: String,
    pub secondary_color: String,
    pub font_family: String,
    pub dark_mode: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_color: "#3b82f6".to_string(),
            secondary_color: "#8b5cf6".to_string(),
            font_family: "Inter, sans-serif".to_string(),
            dark_mode: false,
        }
    }
}

impl Theme {
    /// Background used by slides without an override.
    pub fn default_background(&self) -> RGBColor {
        if self.dark_mode {
            RGBColor::DARK_BACKGROUND
        } else {
            RGBColor::LIGHT_BACKGROUND
        }
    }

    /// Primary colour, if it is a parseable hex colour.
    pub fn primary_rgb(&self) -> Option<RGBColor> {
        RGBColor::from_hex(&self.primary_color)
    }

    /// Secondary colour, if it is a parseable hex colour.
    pub fn secondary_rgb(&self) -> Option<RGBColor> {
        RGBColor::from_hex(&self.secondary_color)
    }
}

/// A presentation snapshot.
///
/// Snapshots are values: the document store never edits one in place, it
/// builds the next snapshot and swaps it in. Anything holding an older
/// snapshot keeps seeing exactly what it saw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    pub id: PresentationId,
    pub title: String,
    #[serde(default)]
    pub theme: Theme,
    pub slides: Vec<Slide>,
    #[serde(default)]
    pub media_library: Vec<MediaItem>,
}

impl Presentation {
    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Look up a slide by id.
    pub fn slide(&self, id: &SlideId) -> Option<&Slide> {
        self.slides.iter().find(|slide| &slide.id == id)
    }

    /// Index of a slide in presentation order.
    pub fn slide_index(&self, id: &SlideId) -> Option<usize> {
        self.slides.iter().position(|slide| &slide.id == id)
    }

    /// Look up a media library entry by id.
    pub fn media(&self, id: &MediaId) -> Option<&MediaItem> {
        self.media_library.iter().find(|item| &item.id == id)
    }

    /// Resolved background of a slide: its override, else the theme default.
    ///
    /// An override that is not a hex colour is ignored.
    pub fn background_of(&self, slide: &Slide) -> RGBColor {
        slide
            .background
            .as_deref()
            .and_then(RGBColor::from_hex)
            .unwrap_or_else(|| self.theme.default_background())
    }

    /// Extract all text from the presentation, one block per slide.
    pub fn text(&self) -> String {
        self.slides
            .iter()
            .map(Slide::text)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
