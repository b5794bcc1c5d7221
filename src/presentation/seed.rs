//! Seed content generated for a freshly added slide.
//!
//! The rules are data: one entry per layout name, looked up in a perfect hash
//! map. A layout without an entry (any [`SlideLayout::Other`]) gets
//! [`DEFAULT_SEED`]. Adding a layout means adding a row here.

use super::patch::NewContent;
use super::types::{ContentType, Position, SlideLayout};
use phf::phf_map;

/// One content item of a seed rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedItem {
    pub content_type: ContentType,
    pub position: Position,
    pub value: &'static str,
}

impl SeedItem {
    const fn new(content_type: ContentType, position: Position, value: &'static str) -> Self {
        Self {
            content_type,
            position,
            value,
        }
    }

    /// The item to insert, still without an id.
    pub fn to_content(&self) -> NewContent {
        NewContent::new(self.content_type, self.value).at(self.position)
    }
}

const CENTER_TEXT: &[SeedItem] = &[SeedItem::new(
    ContentType::Text,
    Position::Center,
    "Click to add text",
)];

const TITLE_TEXT: &[SeedItem] = &[SeedItem::new(
    ContentType::Text,
    Position::Center,
    "Click to add subtitle",
)];

const TWO_COLUMNS: &[SeedItem] = &[
    SeedItem::new(ContentType::Text, Position::Left, "Left column content"),
    SeedItem::new(ContentType::Text, Position::Right, "Right column content"),
];

const CENTER_IMAGE: &[SeedItem] = &[SeedItem::new(ContentType::Image, Position::Center, "")];

const IMAGE_TEXT: &[SeedItem] = &[
    SeedItem::new(ContentType::Image, Position::Left, ""),
    SeedItem::new(ContentType::Text, Position::Right, "Describe the image here"),
];

const COMPARISON: &[SeedItem] = &[
    SeedItem::new(ContentType::Text, Position::Left, "First option"),
    SeedItem::new(ContentType::Text, Position::Right, "Second option"),
];

const CENTER_QUOTE: &[SeedItem] = &[SeedItem::new(
    ContentType::Quote,
    Position::Center,
    "Enter your quote here",
)];

const CENTER_VIDEO: &[SeedItem] = &[SeedItem::new(ContentType::Video, Position::Center, "")];

/// Seed for layouts without a rule of their own.
pub const DEFAULT_SEED: &[SeedItem] = &[SeedItem::new(
    ContentType::Text,
    Position::Full,
    "Click to add content",
)];

static SEED_RULES: phf::Map<&'static str, &'static [SeedItem]> = phf_map! {
    "title" => TITLE_TEXT,
    "title-content" => CENTER_TEXT,
    "title-two-columns" => TWO_COLUMNS,
    "title-image" => CENTER_IMAGE,
    "image-only" => CENTER_IMAGE,
    "title-image-text" => IMAGE_TEXT,
    "comparison" => COMPARISON,
    "quote" => CENTER_QUOTE,
    "video" => CENTER_VIDEO,
    "title-video" => CENTER_VIDEO,
};

/// Seed items for a layout, in insertion order.
pub fn seed_for(layout: &SlideLayout) -> &'static [SeedItem] {
    SEED_RULES.get(layout.as_str()).copied().unwrap_or(DEFAULT_SEED)
}
