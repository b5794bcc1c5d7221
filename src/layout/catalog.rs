//! The fixed registry of slide layouts.

use crate::presentation::{ContentType, Position, SlideLayout};

/// Overall spatial arrangement of a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrangement {
    /// Title and one block, centered on the slide
    Centered,
    /// Heading above a single body block
    HeaderBody,
    /// Heading above two side-by-side columns
    Split,
    /// Like `Split`, with a divider and equal emphasis on both sides
    Comparison,
    /// One item covering the whole slide
    FullBleed,
    /// Large quotation with the attribution underneath
    Quote,
    /// Heading above every item, one under the other
    Stacked,
}

/// Where a region sits on the slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    /// Large centered title of a title slide
    Hero,
    /// Heading strip at the top
    Header,
    /// Line under the hero title
    Subtitle,
    /// Main area below the header
    Body,
    Left,
    Right,
    /// Edge to edge
    FullBleed,
    /// Card laid over a full-bleed item
    Overlay,
    /// Quote attribution
    Attribution,
    /// n-th block of a stacked layout
    Stack(usize),
}

/// Where the title goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitlePlacement {
    /// The layout draws no title
    Hidden,
    /// Before the content regions
    Before(Area),
    /// After the content regions
    After(Area),
    /// After the content regions, and only when the title is non-empty
    Overlay,
}

/// What a slot takes when no item carries its position.
///
/// Unplaced items win. Once every item is placed the slot reuses `content[0]`,
/// or for `OfType` the first item of that type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// The first unplaced item
    First,
    /// The item at this index if unplaced, else the first unplaced item
    Index(usize),
    /// The first unplaced item of this type, else the first unplaced item
    OfType(ContentType),
}

/// A content slot of a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub area: Area,
    pub position: Position,
    pub fallback: Fallback,
}

const fn slot(area: Area, position: Position, fallback: Fallback) -> Slot {
    Slot {
        area,
        position,
        fallback,
    }
}

/// Declaration of one layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutSpec {
    /// Machine name, as stored on slides
    pub name: &'static str,
    /// Name shown in the layout picker
    pub label: &'static str,
    pub arrangement: Arrangement,
    pub title: TitlePlacement,
    /// Content slots in render order. Empty means "stack every item".
    pub slots: &'static [Slot],
}

static LAYOUTS: [LayoutSpec; 10] = [
    LayoutSpec {
        name: "title",
        label: "Title Slide",
        arrangement: Arrangement::Centered,
        title: TitlePlacement::Before(Area::Hero),
        slots: &[slot(Area::Subtitle, Position::Center, Fallback::First)],
    },
    LayoutSpec {
        name: "title-content",
        label: "Title and Content",
        arrangement: Arrangement::HeaderBody,
        title: TitlePlacement::Before(Area::Header),
        slots: &[slot(Area::Body, Position::Center, Fallback::First)],
    },
    LayoutSpec {
        name: "title-two-columns",
        label: "Two Columns",
        arrangement: Arrangement::Split,
        title: TitlePlacement::Before(Area::Header),
        slots: &[
            slot(Area::Left, Position::Left, Fallback::Index(0)),
            slot(Area::Right, Position::Right, Fallback::Index(1)),
        ],
    },
    LayoutSpec {
        name: "title-image",
        label: "Title and Image",
        arrangement: Arrangement::HeaderBody,
        title: TitlePlacement::Before(Area::Header),
        slots: &[slot(
            Area::Body,
            Position::Center,
            Fallback::OfType(ContentType::Image),
        )],
    },
    LayoutSpec {
        name: "image-only",
        label: "Image Only",
        arrangement: Arrangement::FullBleed,
        title: TitlePlacement::Overlay,
        slots: &[slot(
            Area::FullBleed,
            Position::Center,
            Fallback::OfType(ContentType::Image),
        )],
    },
    LayoutSpec {
        name: "title-image-text",
        label: "Image and Text",
        arrangement: Arrangement::Split,
        title: TitlePlacement::Before(Area::Header),
        slots: &[
            slot(Area::Left, Position::Left, Fallback::OfType(ContentType::Image)),
            slot(Area::Right, Position::Right, Fallback::OfType(ContentType::Text)),
        ],
    },
    LayoutSpec {
        name: "comparison",
        label: "Comparison",
        arrangement: Arrangement::Comparison,
        title: TitlePlacement::Before(Area::Header),
        slots: &[
            slot(Area::Left, Position::Left, Fallback::Index(0)),
            slot(Area::Right, Position::Right, Fallback::Index(1)),
        ],
    },
    LayoutSpec {
        name: "quote",
        label: "Quote",
        arrangement: Arrangement::Quote,
        title: TitlePlacement::After(Area::Attribution),
        slots: &[slot(
            Area::Body,
            Position::Center,
            Fallback::OfType(ContentType::Quote),
        )],
    },
    LayoutSpec {
        name: "video",
        label: "Video",
        arrangement: Arrangement::FullBleed,
        title: TitlePlacement::Hidden,
        slots: &[slot(
            Area::FullBleed,
            Position::Center,
            Fallback::OfType(ContentType::Video),
        )],
    },
    LayoutSpec {
        name: "title-video",
        label: "Title and Video",
        arrangement: Arrangement::HeaderBody,
        title: TitlePlacement::Before(Area::Header),
        slots: &[slot(
            Area::Body,
            Position::Center,
            Fallback::OfType(ContentType::Video),
        )],
    },
];

/// Used for any layout name outside the catalog.
static DEFAULT_LAYOUT: LayoutSpec = LayoutSpec {
    name: "default",
    label: "Custom",
    arrangement: Arrangement::Stacked,
    title: TitlePlacement::Before(Area::Header),
    slots: &[],
};

/// Every known layout, in picker order.
pub fn catalog() -> &'static [LayoutSpec] {
    &LAYOUTS
}

/// The declaration for a layout; unknown layouts get the stacked default.
pub fn spec_for(layout: &SlideLayout) -> &'static LayoutSpec {
    LAYOUTS
        .iter()
        .find(|spec| spec.name == layout.as_str())
        .unwrap_or(&DEFAULT_LAYOUT)
}
