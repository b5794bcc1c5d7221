//! Display rules for each content type.

use crate::presentation::{ContentItem, ContentStyle, ContentType};
use std::borrow::Cow;

/// How a content item displays.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentView<'a> {
    /// Editable text region
    Text {
        text: &'a str,
        style: Option<&'a ContentStyle>,
    },
    /// Image with its URL shown as an editable caption
    Image { url: &'a str },
    /// Embedded player; `embedded` is set when the URL was rewritten for a hosting site
    Video { url: Cow<'a, str>, embedded: bool },
    /// Audio player with a progress bar
    Audio { url: &'a str },
    /// Styled block quote
    Quote {
        text: &'a str,
        style: Option<&'a ContentStyle>,
    },
    Table(TableView<'a>),
    Graph(GraphView),
    /// An item without a value yet
    Placeholder {
        content_type: ContentType,
        prompt: &'static str,
    },
}

impl<'a> ContentView<'a> {
    /// Project an item into its view. An empty value always yields a placeholder.
    pub fn of(item: &'a ContentItem) -> Self {
        let value = item.value.as_str();
        if value.is_empty() {
            return ContentView::Placeholder {
                content_type: item.content_type,
                prompt: placeholder_prompt(item.content_type),
            };
        }

        match item.content_type {
            ContentType::Text => ContentView::Text {
                text: value,
                style: item.effective_style(),
            },
            ContentType::Image => ContentView::Image { url: value },
            ContentType::Video => match embed_url(value) {
                Some(url) => ContentView::Video {
                    url: Cow::Owned(url),
                    embedded: true,
                },
                None => ContentView::Video {
                    url: Cow::Borrowed(value),
                    embedded: false,
                },
            },
            ContentType::Audio => ContentView::Audio { url: value },
            ContentType::Quote => ContentView::Quote {
                text: value,
                style: item.effective_style(),
            },
            ContentType::Table => ContentView::Table(TableView::parse(value)),
            ContentType::Graph => ContentView::Graph(GraphView::parse(value)),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, ContentView::Placeholder { .. })
    }
}

/// Prompt shown in place of an item with no value.
pub fn placeholder_prompt(content_type: ContentType) -> &'static str {
    match content_type {
        ContentType::Text => "Click to add text",
        ContentType::Image => "Enter image URL...",
        ContentType::Video => "Enter video URL...",
        ContentType::Audio => "Enter audio URL...",
        ContentType::Quote => "Enter a quote...",
        ContentType::Table => "Enter rows, separating cells with |",
        ContentType::Graph => "Enter values separated by commas",
    }
}

/// Rewrite a YouTube or Vimeo page URL to its embeddable player URL.
///
/// Returns `None` for anything else, which is then played directly.
pub fn embed_url(url: &str) -> Option<String> {
    let rest = url
        .trim()
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_start_matches("www.")
        .trim_start_matches("m.");

    let video_id = |s: &str| -> Option<String> {
        let id: String = s
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
            .collect();
        (!id.is_empty()).then_some(id)
    };

    if let Some(query) = rest.strip_prefix("youtube.com/watch?") {
        let id = query
            .split('&')
            .find_map(|pair| pair.strip_prefix("v="))
            .and_then(video_id)?;
        return Some(format!("https://www.youtube.com/embed/{}", id));
    }
    if rest.starts_with("youtube.com/embed/") || rest.starts_with("player.vimeo.com/video/") {
        return Some(url.trim().to_string());
    }
    if let Some(path) = rest
        .strip_prefix("youtu.be/")
        .or_else(|| rest.strip_prefix("youtube.com/shorts/"))
    {
        return Some(format!("https://www.youtube.com/embed/{}", video_id(path)?));
    }
    if let Some(path) = rest.strip_prefix("vimeo.com/") {
        let id: String = path.chars().take_while(char::is_ascii_digit).collect();
        if !id.is_empty() {
            return Some(format!("https://player.vimeo.com/video/{}", id));
        }
    }
    None
}

/// A table parsed from `row\nrow`, cells separated by `|`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView<'a> {
    pub rows: Vec<Vec<&'a str>>,
}

impl<'a> TableView<'a> {
    /// Parse a table value. Cells are trimmed and blank lines skipped; one
    /// leading and one trailing `|` on a row are treated as borders.
    pub fn parse(value: &'a str) -> Self {
        let rows = value
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                let line = line.strip_prefix('|').unwrap_or(line);
                let line = line.strip_suffix('|').unwrap_or(line);
                line.split('|').map(str::trim).collect()
            })
            .collect();
        Self { rows }
    }

    /// Width of the widest row.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// The first row, shown as the header.
    pub fn header(&self) -> Option<&[&'a str]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Every row after the header.
    pub fn body(&self) -> &[Vec<&'a str>] {
        self.rows.get(1..).unwrap_or(&[])
    }
}

/// Bar heights drawn for a graph item.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphView {
    /// Numbers found in the value
    pub values: Vec<f64>,
    /// Bar heights scaled into `0.0..=1.0`
    pub heights: Vec<f64>,
    /// Set when the value held no numbers and the bars are illustrative
    pub is_sample: bool,
}

const SAMPLE_BARS: [f64; 5] = [0.45, 0.7, 0.55, 0.9, 0.65];

impl GraphView {
    /// Collect the numbers in a raw graph value.
    ///
    /// Separators are commas, semicolons, `|` and whitespace; tokens that are
    /// not numbers (labels) are skipped.
    pub fn parse(value: &str) -> Self {
        let values: Vec<f64> = value
            .split(|c: char| c == ',' || c == ';' || c == '|' || c.is_whitespace())
            .filter_map(|token| token.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .collect();

        if values.is_empty() {
            return Self {
                values,
                heights: SAMPLE_BARS.to_vec(),
                is_sample: true,
            };
        }

        let max = values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
        let heights = values
            .iter()
            .map(|v| if max > 0.0 { v.abs() / max } else { 0.0 })
            .collect();
        Self {
            values,
            heights,
            is_sample: false,
        }
    }
}
