//! Partial updates merged into slides, content items and themes.
//!
//! Every patch is shallow: a field that is set replaces the old value
//! wholesale, a field that is left out keeps it. Fields that are themselves
//! optional on the target (`background`, `position`, `style`) take an inner
//! `Option` so a patch can also clear them.

use super::prs::Theme;
use super::slide::{ContentItem, Slide};
use super::types::{ContentStyle, ContentType, Position, SlideLayout};
use crate::common::ContentId;
use serde::{Deserialize, Serialize};

/// Fields to merge into a slide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideUpdate {
    pub title: Option<String>,
    pub layout: Option<SlideLayout>,
    pub background: Option<Option<String>>,
}

impl SlideUpdate {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn layout(mut self, layout: impl Into<SlideLayout>) -> Self {
        self.layout = Some(layout.into().normalized());
        self
    }

    /// Set (`Some`) or clear (`None`) the background override.
    pub fn background(mut self, background: Option<&str>) -> Self {
        self.background = Some(background.map(str::to_string));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.layout.is_none() && self.background.is_none()
    }

    pub(crate) fn apply(self, slide: &mut Slide) {
        if let Some(title) = self.title {
            slide.title = title;
        }
        // Changing the layout keeps the content as is; renderers resolve by position.
        if let Some(layout) = self.layout {
            slide.layout = layout;
        }
        if let Some(background) = self.background {
            slide.background = background;
        }
    }
}

/// Fields to merge into a content item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentUpdate {
    pub content_type: Option<ContentType>,
    pub value: Option<String>,
    pub position: Option<Option<Position>>,
    pub style: Option<Option<ContentStyle>>,
}

impl ContentUpdate {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for the most common edit.
    pub fn value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_type(mut self, content_type: ContentType) -> Self {
        self.content_type = Some(content_type);
        self
    }

    pub fn with_position(mut self, position: Option<Position>) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_style(mut self, style: Option<ContentStyle>) -> Self {
        self.style = Some(style);
        self
    }

    pub(crate) fn apply(self, item: &mut ContentItem) {
        if let Some(content_type) = self.content_type {
            item.content_type = content_type;
        }
        if let Some(value) = self.value {
            item.value = value;
        }
        if let Some(position) = self.position {
            item.position = position;
        }
        if let Some(style) = self.style {
            item.style = style;
        }
    }
}

/// A content item before the store assigns its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContent {
    #[serde(rename = "type")]
    pub content_type: ContentType,
    #[serde(default)]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ContentStyle>,
}

impl NewContent {
    pub fn new(content_type: ContentType, value: impl Into<String>) -> Self {
        Self {
            content_type,
            value: value.into(),
            position: None,
            style: None,
        }
    }

    /// A text item.
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(ContentType::Text, value)
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn styled(mut self, style: ContentStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub(crate) fn into_item(self, id: ContentId) -> ContentItem {
        ContentItem {
            id,
            content_type: self.content_type,
            value: self.value,
            position: self.position,
            style: self.style,
        }
    }
}

/// Fields to merge into a theme. Deserializes from a partial theme object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,
}

impl ThemeUpdate {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primary_color(mut self, color: impl Into<String>) -> Self {
        self.primary_color = Some(color.into());
        self
    }

    pub fn secondary_color(mut self, color: impl Into<String>) -> Self {
        self.secondary_color = Some(color.into());
        self
    }

    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn dark_mode(mut self, dark: bool) -> Self {
        self.dark_mode = Some(dark);
        self
    }

    pub(crate) fn apply(self, theme: &mut Theme) {
        if let Some(color) = self.primary_color {
            theme.primary_color = color;
        }
        if let Some(color) = self.secondary_color {
            theme.secondary_color = color;
        }
        if let Some(family) = self.font_family {
            theme.font_family = family;
        }
        if let Some(dark) = self.dark_mode {
            theme.dark_mode = dark;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::SlideId;

    fn slide() -> Slide {
        Slide {
            id: SlideId::from("s1"),
            layout: SlideLayout::Title,
            title: "Old".to_string(),
            content: Vec::new(),
            background: Some("#000000".to_string()),
        }
    }

    #[test]
    fn test_slide_update_merges_only_set_fields() {
        let mut s = slide();
        SlideUpdate::new().title("New").apply(&mut s);
        assert_eq!(s.title, "New");
        assert_eq!(s.layout, SlideLayout::Title);
        assert_eq!(s.background.as_deref(), Some("#000000"));

        SlideUpdate::new().background(None).layout("quote").apply(&mut s);
        assert_eq!(s.background, None);
        assert_eq!(s.layout, SlideLayout::Quote);
    }

    #[test]
    fn test_content_update_keeps_style_unless_set() {
        let mut item = NewContent::text("a")
            .at(Position::Left)
            .styled(ContentStyle {
                color: Some("#fff".to_string()),
                ..Default::default()
            })
            .into_item(ContentId::from("c1"));

        ContentUpdate::value("b").apply(&mut item);
        assert_eq!(item.value, "b");
        assert_eq!(item.position, Some(Position::Left));
        assert!(item.style.is_some());

        ContentUpdate::new().with_style(None).with_position(None).apply(&mut item);
        assert!(item.style.is_none());
        assert!(item.position.is_none());
    }

    #[test]
    fn test_theme_update_from_partial_json() {
        let update: ThemeUpdate = serde_json::from_str(r#"{"darkMode":true}"#).unwrap();
        let mut theme = Theme::default();
        update.apply(&mut theme);
        assert!(theme.dark_mode);
        assert_eq!(theme.primary_color, Theme::default().primary_color);
    }

    #[test]
    fn test_empty_slide_update() {
        assert!(SlideUpdate::new().is_empty());
        assert!(!SlideUpdate::new().title("x").is_empty());
    }
}
