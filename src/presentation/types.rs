//! Closed vocabularies of the document model: layouts, content types, positions.

use phf::phf_map;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a content item on a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Editable text
    Text,
    /// Image referenced by URL
    Image,
    /// Chart placeholder driven by the raw value
    Graph,
    /// Table encoded as newline separated rows of `|` separated cells
    Table,
    /// Block quote (attribution lives in the slide title)
    Quote,
    /// Video referenced by URL
    Video,
    /// Audio referenced by URL
    Audio,
}

impl ContentType {
    /// All content types, in declaration order.
    pub const ALL: [ContentType; 7] = [
        ContentType::Text,
        ContentType::Image,
        ContentType::Graph,
        ContentType::Table,
        ContentType::Quote,
        ContentType::Video,
        ContentType::Audio,
    ];

    /// The serialized name of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Text => "text",
            ContentType::Image => "image",
            ContentType::Graph => "graph",
            ContentType::Table => "table",
            ContentType::Quote => "quote",
            ContentType::Video => "video",
            ContentType::Audio => "audio",
        }
    }

    /// Whether the `style` field of an item applies to this type.
    pub fn is_text_like(&self) -> bool {
        matches!(
            self,
            ContentType::Text | ContentType::Quote | ContentType::Table
        )
    }

    /// Whether the value is a URL to an external resource.
    pub fn is_media(&self) -> bool {
        matches!(
            self,
            ContentType::Image | ContentType::Video | ContentType::Audio
        )
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic slot a content item occupies; not an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Left,
    Right,
    Center,
    Full,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Left => "left",
            Position::Right => "right",
            Position::Center => "center",
            Position::Full => "full",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Slide layout identifier.
///
/// The ten known layouts form a closed set. Any other name is kept verbatim in
/// [`SlideLayout::Other`] and falls back to the default seed and render rules,
/// so a snapshot written by a newer editor still loads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SlideLayout {
    Title,
    TitleContent,
    TitleTwoColumns,
    TitleImage,
    ImageOnly,
    TitleImageText,
    Comparison,
    Quote,
    Video,
    TitleVideo,
    /// Unrecognized layout name. Never a known name once it has passed
    /// through [`SlideLayout::normalized`], which every store entry point does.
    Other(String),
}

static LAYOUT_NAMES: phf::Map<&'static str, SlideLayout> = phf_map! {
    "title" => SlideLayout::Title,
    "title-content" => SlideLayout::TitleContent,
    "title-two-columns" => SlideLayout::TitleTwoColumns,
    "title-image" => SlideLayout::TitleImage,
    "image-only" => SlideLayout::ImageOnly,
    "title-image-text" => SlideLayout::TitleImageText,
    "comparison" => SlideLayout::Comparison,
    "quote" => SlideLayout::Quote,
    "video" => SlideLayout::Video,
    "title-video" => SlideLayout::TitleVideo,
};

impl SlideLayout {
    /// The ten known layouts, in catalog order.
    pub const KNOWN: [SlideLayout; 10] = [
        SlideLayout::Title,
        SlideLayout::TitleContent,
        SlideLayout::TitleTwoColumns,
        SlideLayout::TitleImage,
        SlideLayout::ImageOnly,
        SlideLayout::TitleImageText,
        SlideLayout::Comparison,
        SlideLayout::Quote,
        SlideLayout::Video,
        SlideLayout::TitleVideo,
    ];

    /// Parse a layout name. Never fails: unknown names become [`SlideLayout::Other`].
    pub fn parse(name: &str) -> Self {
        LAYOUT_NAMES
            .get(name)
            .cloned()
            .unwrap_or_else(|| SlideLayout::Other(name.to_string()))
    }

    /// The machine name of the layout.
    pub fn as_str(&self) -> &str {
        match self {
            SlideLayout::Title => "title",
            SlideLayout::TitleContent => "title-content",
            SlideLayout::TitleTwoColumns => "title-two-columns",
            SlideLayout::TitleImage => "title-image",
            SlideLayout::ImageOnly => "image-only",
            SlideLayout::TitleImageText => "title-image-text",
            SlideLayout::Comparison => "comparison",
            SlideLayout::Quote => "quote",
            SlideLayout::Video => "video",
            SlideLayout::TitleVideo => "title-video",
            SlideLayout::Other(name) => name,
        }
    }

    /// Resolve an [`SlideLayout::Other`] that spells a known name to that layout.
    pub fn normalized(self) -> Self {
        match self {
            SlideLayout::Other(name) => SlideLayout::from(name),
            known => known,
        }
    }

    /// Whether this is one of the known layouts.
    pub fn is_known(&self) -> bool {
        !matches!(self, SlideLayout::Other(_))
    }
}

impl Default for SlideLayout {
    fn default() -> Self {
        SlideLayout::TitleContent
    }
}

impl fmt::Display for SlideLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for SlideLayout {
    fn from(name: &str) -> Self {
        SlideLayout::parse(name)
    }
}

impl From<String> for SlideLayout {
    fn from(name: String) -> Self {
        match LAYOUT_NAMES.get(name.as_str()) {
            Some(layout) => layout.clone(),
            None => SlideLayout::Other(name),
        }
    }
}

impl From<SlideLayout> for String {
    fn from(layout: SlideLayout) -> Self {
        match layout {
            SlideLayout::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

/// Horizontal text alignment of a styled item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justify,
}

/// Optional presentation overrides for text-like content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_names_round_trip() {
        for layout in SlideLayout::KNOWN {
            assert_eq!(SlideLayout::parse(layout.as_str()), layout);
            assert!(layout.is_known());
        }
    }

    #[test]
    fn test_unknown_layout_is_preserved() {
        let layout = SlideLayout::parse("three-columns");
        assert_eq!(layout, SlideLayout::Other("three-columns".to_string()));
        assert!(!layout.is_known());
        assert_eq!(layout.as_str(), "three-columns");
    }

    #[test]
    fn test_other_with_known_name_normalizes() {
        let spelled = SlideLayout::Other("title".to_string());
        assert_eq!(spelled.clone().normalized(), SlideLayout::Title);
        let unknown = SlideLayout::Other("three-columns".to_string());
        assert_eq!(unknown.clone().normalized(), unknown);
        assert_eq!(SlideLayout::Quote.normalized(), SlideLayout::Quote);

        let json = serde_json::to_string(&spelled).unwrap();
        let back: SlideLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spelled.normalized());
    }

    #[test]
    fn test_layout_serializes_as_name() {
        let json = serde_json::to_string(&SlideLayout::TitleTwoColumns).unwrap();
        assert_eq!(json, "\"title-two-columns\"");
        let back: SlideLayout = serde_json::from_str("\"mystery\"").unwrap();
        assert_eq!(back, SlideLayout::Other("mystery".to_string()));
    }

    #[test]
    fn test_content_type_names() {
        let json = serde_json::to_string(&ContentType::Quote).unwrap();
        assert_eq!(json, "\"quote\"");
        for ty in ContentType::ALL {
            let parsed: ContentType =
                serde_json::from_str(&format!("\"{}\"", ty.as_str())).unwrap();
            assert_eq!(parsed, ty);
        }
        assert!(ContentType::Table.is_text_like());
        assert!(!ContentType::Video.is_text_like());
        assert!(ContentType::Audio.is_media());
    }

    #[test]
    fn test_style_omits_absent_fields() {
        let style = ContentStyle {
            font_size: Some("24px".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&style).unwrap();
        assert_eq!(json, r#"{"fontSize":"24px"}"#);
    }
}
