//! Slide thumbnails for the editor sidebar.

use super::catalog::spec_for;
use crate::common::SlideId;
use crate::presentation::{Presentation, Slide};

/// Longest preview, in characters, before it is cut with an ellipsis.
const PREVIEW_CHARS: usize = 60;

/// One entry of the slide list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideSummary {
    pub index: usize,
    pub id: SlideId,
    pub layout_label: &'static str,
    /// First line of the slide's text, shortened
    pub preview: String,
}

impl SlideSummary {
    pub fn of(index: usize, slide: &Slide) -> Self {
        Self {
            index,
            id: slide.id.clone(),
            layout_label: spec_for(&slide.layout).label,
            preview: preview(&slide.text()),
        }
    }
}

/// Summaries of every slide, in order.
pub fn slide_summaries(presentation: &Presentation) -> Vec<SlideSummary> {
    presentation
        .slides
        .iter()
        .enumerate()
        .map(|(index, slide)| SlideSummary::of(index, slide))
        .collect()
}

fn preview(text: &str) -> String {
    let line = text.lines().map(str::trim).find(|l| !l.is_empty()).unwrap_or("");
    match line.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}…", line[..cut].trim_end()),
        None => line.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::IdStrategy;
    use crate::config::StoreOptions;
    use crate::presentation::{DocumentStore, SlideLayout, SlideUpdate};

    #[test]
    fn test_summaries_follow_slide_order() {
        let mut store =
            DocumentStore::with_options(StoreOptions::new().with_id_strategy(IdStrategy::Sequential));
        store.create_presentation("Quarterly review");
        store.add_slide(SlideLayout::Quote);
        store.add_slide(SlideLayout::parse("grid"));

        let summaries = slide_summaries(store.current().unwrap());
        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[0].layout_label, "Title Slide");
        assert_eq!(summaries[0].preview, "Quarterly review");
        assert_eq!(summaries[1].index, 1);
        assert_eq!(summaries[1].layout_label, "Quote");
        assert_eq!(summaries[2].layout_label, "Custom");
        assert_eq!(summaries[2].id, store.current().unwrap().slides[2].id);
    }

    #[test]
    fn test_preview_uses_content_when_untitled() {
        let mut store = DocumentStore::new();
        store.create_presentation("Deck");
        let id = store.current_slide().unwrap().id.clone();
        store.update_slide(&id, SlideUpdate::new().title(""));

        let summaries = slide_summaries(store.current().unwrap());
        assert_eq!(summaries[0].preview, "Click to add subtitle");
    }

    #[test]
    fn test_long_preview_is_cut() {
        let long = "word ".repeat(30);
        let cut = preview(&long);
        assert!(cut.ends_with('…'));
        assert_eq!(cut.chars().count(), PREVIEW_CHARS);
        assert_eq!(preview(""), "");
        assert_eq!(preview("\n  \nsecond"), "second");
    }
}
