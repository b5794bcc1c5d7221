//! Slides and the content items placed on them.

use super::types::{ContentStyle, ContentType, Position, SlideLayout};
use crate::common::{ContentId, SlideId};
use serde::{Deserialize, Serialize};

/// A single content item on a slide.
///
/// The meaning of `value` depends on `content_type`: raw text, a resource URL,
/// or newline/`|` delimited table data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: ContentId,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ContentStyle>,
}

impl ContentItem {
    /// Whether the item has no value yet and renders as a placeholder.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// The style, but only for types it applies to.
    pub fn effective_style(&self) -> Option<&ContentStyle> {
        if self.content_type.is_text_like() {
            self.style.as_ref()
        } else {
            None
        }
    }
}

/// A slide in a presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: SlideId,
    pub layout: SlideLayout,
    /// Main heading, or the attribution of a quote slide.
    pub title: String,
    pub content: Vec<ContentItem>,
    /// Background colour override; the theme decides when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

impl Slide {
    /// Look up a content item by id.
    pub fn content(&self, id: &ContentId) -> Option<&ContentItem> {
        self.content.iter().find(|item| &item.id == id)
    }

    /// The first content item tagged with `position`.
    pub fn content_at(&self, position: Position) -> Option<&ContentItem> {
        self.content
            .iter()
            .find(|item| item.position == Some(position))
    }

    /// The first content item of the given type.
    pub fn first_of_type(&self, content_type: ContentType) -> Option<&ContentItem> {
        self.content
            .iter()
            .find(|item| item.content_type == content_type)
    }

    /// Plain text of the slide for previews and search.
    ///
    /// Concatenates the title and every text-like value, skipping URLs.
    pub fn text(&self) -> String {
        let mut out = String::new();
        if !self.title.is_empty() {
            out.push_str(&self.title);
        }
        for item in &self.content {
            if !item.content_type.is_text_like() || item.value.is_empty() {
                continue;
            }
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&item.value);
        }
        out
    }
}
