//! Render plans: the placed regions of one slide.

use super::catalog::{Area, Arrangement, Fallback, LayoutSpec, Slot, TitlePlacement, spec_for};
use super::content::ContentView;
use crate::common::RGBColor;
use crate::presentation::{ContentItem, Presentation, Slide, SlideLayout};
use smallvec::SmallVec;

/// What a region shows.
#[derive(Debug, Clone, PartialEq)]
pub enum RegionSource<'a> {
    /// The slide title (the attribution on quote slides)
    Title(&'a str),
    /// A content item and how it displays
    Content {
        item: &'a ContentItem,
        view: ContentView<'a>,
    },
}

/// A placed region.
#[derive(Debug, Clone, PartialEq)]
pub struct Region<'a> {
    pub area: Area,
    pub source: RegionSource<'a>,
}

impl<'a> Region<'a> {
    /// The content item shown here, if this is not the title.
    pub fn item(&self) -> Option<&'a ContentItem> {
        match &self.source {
            RegionSource::Content { item, .. } => Some(*item),
            RegionSource::Title(_) => None,
        }
    }
}

/// The display arrangement of one slide.
///
/// Building a plan is a pure projection of `(layout, title, content)`: it
/// never fails, and the same inputs always produce the same plan. Layouts
/// outside the catalog stack every item under the title.
///
/// # Examples
///
/// ```rust
/// use slidedeck::layout::{Area, RenderPlan};
/// use slidedeck::presentation::{DocumentStore, SlideLayout};
///
/// let mut store = DocumentStore::new();
/// store.create_presentation("Demo");
/// store.add_slide(SlideLayout::TitleImageText);
///
/// let pres = store.current().unwrap();
/// let plan = RenderPlan::for_slide(pres, store.current_slide().unwrap());
/// let areas: Vec<Area> = plan.regions.iter().map(|r| r.area).collect();
/// assert_eq!(areas, [Area::Header, Area::Left, Area::Right]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan<'a> {
    pub layout: &'static LayoutSpec,
    pub arrangement: Arrangement,
    /// Regions in drawing order
    pub regions: SmallVec<[Region<'a>; 4]>,
    pub background: RGBColor,
    /// Text colour readable on `background`
    pub foreground: RGBColor,
    /// Theme primary colour, when it parses
    pub accent: Option<RGBColor>,
    pub font_family: Option<&'a str>,
}

impl<'a> RenderPlan<'a> {
    /// Place the title and content of a slide for `layout`.
    ///
    /// Colours are the light theme defaults; use [`RenderPlan::for_slide`] to
    /// resolve them against a presentation.
    pub fn build(layout: &SlideLayout, title: &'a str, content: &'a [ContentItem]) -> Self {
        let spec = spec_for(layout);
        let mut regions = SmallVec::new();

        if let TitlePlacement::Before(area) = spec.title {
            regions.push(title_region(area, title));
        }

        if spec.slots.is_empty() {
            regions.extend(
                content
                    .iter()
                    .enumerate()
                    .map(|(i, item)| content_region(Area::Stack(i), item)),
            );
        } else {
            for (slot, index) in spec.slots.iter().zip(resolve_slots(spec.slots, content)) {
                if let Some(index) = index {
                    regions.push(content_region(slot.area, &content[index]));
                }
            }
        }

        match spec.title {
            TitlePlacement::After(area) => regions.push(title_region(area, title)),
            TitlePlacement::Overlay if !title.is_empty() => {
                regions.push(title_region(Area::Overlay, title))
            },
            _ => {},
        }

        let background = RGBColor::LIGHT_BACKGROUND;
        Self {
            layout: spec,
            arrangement: spec.arrangement,
            regions,
            background,
            foreground: background.contrasting_text(),
            accent: None,
            font_family: None,
        }
    }

    /// Plan a slide of `presentation`, with its colours and font resolved.
    pub fn for_slide(presentation: &'a Presentation, slide: &'a Slide) -> Self {
        let mut plan = Self::build(&slide.layout, &slide.title, &slide.content);
        plan.background = presentation.background_of(slide);
        plan.foreground = plan.background.contrasting_text();
        plan.accent = presentation.theme.primary_rgb();
        plan.font_family = Some(presentation.theme.font_family.as_str());
        plan
    }

    /// The region drawn in `area`.
    pub fn region(&self, area: Area) -> Option<&Region<'a>> {
        self.regions.iter().find(|region| region.area == area)
    }

    /// Whether the title is drawn.
    pub fn shows_title(&self) -> bool {
        self.regions
            .iter()
            .any(|region| matches!(region.source, RegionSource::Title(_)))
    }
}

fn title_region(area: Area, title: &str) -> Region<'_> {
    Region {
        area,
        source: RegionSource::Title(title),
    }
}

fn content_region(area: Area, item: &ContentItem) -> Region<'_> {
    Region {
        area,
        source: RegionSource::Content {
            item,
            view: ContentView::of(item),
        },
    }
}

/// Choose a content index for every slot.
///
/// Position tags are matched first across all slots, then fallbacks fill the
/// slots still empty. Fallbacks prefer items not yet placed; when every
/// candidate is taken they reuse `content[0]` (or the first item of the wanted
/// type), so a slot is only omitted when there is no content at all.
fn resolve_slots(slots: &[Slot], content: &[ContentItem]) -> SmallVec<[Option<usize>; 2]> {
    let mut placed: SmallVec<[bool; 8]> = SmallVec::from_elem(false, content.len());
    let mut chosen: SmallVec<[Option<usize>; 2]> = SmallVec::from_elem(None, slots.len());

    for (slot, choice) in slots.iter().zip(chosen.iter_mut()) {
        let found = content
            .iter()
            .enumerate()
            .position(|(i, item)| !placed[i] && item.position == Some(slot.position));
        if let Some(i) = found {
            placed[i] = true;
            *choice = Some(i);
        }
    }

    for (slot, choice) in slots.iter().zip(chosen.iter_mut()) {
        if choice.is_some() {
            continue;
        }
        let first_unplaced = || (0..content.len()).find(|&i| !placed[i]);
        let first_any = || (!content.is_empty()).then_some(0);
        let found = match slot.fallback {
            Fallback::First => first_unplaced().or_else(first_any),
            Fallback::Index(i) => (i < content.len() && !placed[i])
                .then_some(i)
                .or_else(first_unplaced)
                .or_else(first_any),
            Fallback::OfType(ty) => {
                let of_type = |taken: bool| {
                    (0..content.len())
                        .find(|&i| (taken || !placed[i]) && content[i].content_type == ty)
                };
                of_type(false)
                    .or_else(first_unplaced)
                    .or_else(|| of_type(true))
                    .or_else(first_any)
            },
        };
        if let Some(i) = found {
            placed[i] = true;
            *choice = Some(i);
        }
    }

    chosen
}
