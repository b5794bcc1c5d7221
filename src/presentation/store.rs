//! The document store: single owner and only mutator of presentations.

use super::history::History;
use super::outcome::{Outcome, Target};
use super::patch::{ContentUpdate, NewContent, SlideUpdate, ThemeUpdate};
use super::prs::Presentation;
use super::seed::seed_for;
use super::slide::Slide;
use super::types::{ContentType, Position, SlideLayout};
use crate::common::{ContentId, IdGenerator, MediaId, PresentationId, SlideId};
use crate::config::StoreOptions;
use crate::media::{MediaItem, NewMedia};
use chrono::Utc;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, trace};

/// A store shared between the editor surfaces and collaborators that finish later.
pub type SharedStore = Arc<RwLock<DocumentStore>>;

/// Owns every presentation of an editing session.
///
/// Each mutation reads the current snapshot, builds the next one and swaps it
/// into the collection. References to older snapshots stay valid and
/// unchanged. Mutations never fail: an unknown id, or the absence of a current
/// presentation, leaves everything as it was and is reported through
/// [`Outcome`].
///
/// The store is an ordinary value. Construct one per session and hand it (or a
/// [`SharedStore`]) to whatever needs it.
///
/// # Examples
///
/// ```rust
/// use slidedeck::presentation::{DocumentStore, SlideLayout};
///
/// let mut store = DocumentStore::new();
/// store.create_presentation("Quarterly review");
/// let slide = store.add_slide(SlideLayout::TitleTwoColumns).applied().unwrap();
///
/// let current = store.current().unwrap();
/// assert_eq!(current.slide_count(), 2);
/// assert_eq!(current.slides[1].id, slide);
/// assert_eq!(store.current_slide_index(), 1);
/// ```
#[derive(Debug)]
pub struct DocumentStore {
    presentations: Vec<Arc<Presentation>>,
    current: Option<Arc<Presentation>>,
    current_slide_index: usize,
    history: History,
    ids: IdGenerator,
    options: StoreOptions,
}

impl DocumentStore {
    /// Create an empty store with default options.
    pub fn new() -> Self {
        Self::with_options(StoreOptions::default())
    }

    /// Create an empty store.
    pub fn with_options(options: StoreOptions) -> Self {
        Self {
            presentations: Vec::new(),
            current: None,
            current_slide_index: 0,
            history: History::new(options.history_limit),
            ids: IdGenerator::new(options.id_strategy),
            options,
        }
    }

    /// Wrap the store for sharing across tasks.
    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// All presentations, in creation order.
    pub fn presentations(&self) -> &[Arc<Presentation>] {
        &self.presentations
    }

    /// Look up a presentation by id.
    pub fn presentation(&self, id: &PresentationId) -> Option<&Arc<Presentation>> {
        self.presentations.iter().find(|p| &p.id == id)
    }

    /// The current presentation snapshot.
    pub fn current(&self) -> Option<&Arc<Presentation>> {
        self.current.as_ref()
    }

    /// Index of the active slide. Not necessarily in range, see
    /// [`set_current_slide_index`](Self::set_current_slide_index).
    pub fn current_slide_index(&self) -> usize {
        self.current_slide_index
    }

    /// The active slide, if the index points at one.
    pub fn current_slide(&self) -> Option<&Slide> {
        self.current
            .as_ref()
            .and_then(|p| p.slides.get(self.current_slide_index))
    }

    /// Media library of the current presentation; empty when there is none.
    pub fn media_library(&self) -> &[MediaItem] {
        self.current
            .as_ref()
            .map(|p| p.media_library.as_slice())
            .unwrap_or_default()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Create a presentation seeded with one title slide and make it current.
    pub fn create_presentation(&mut self, title: impl Into<String>) -> PresentationId {
        let title = title.into();
        let id = self.ids.presentation();
        let slide = self.seeded_slide(SlideLayout::Title, title.clone());
        let presentation = Arc::new(Presentation {
            id: id.clone(),
            title,
            theme: self.options.default_theme.clone(),
            slides: vec![slide],
            media_library: Vec::new(),
        });
        debug!(presentation = %id, "presentation created");

        self.presentations.push(Arc::clone(&presentation));
        self.current = Some(presentation);
        self.current_slide_index = 0;
        self.history.clear();
        id
    }

    /// Insert a snapshot from elsewhere (e.g. persistence) and make it current.
    ///
    /// A presentation with the same id is replaced. Sequential counters move
    /// past every id in the snapshot so later inserts never reuse one.
    pub fn load_presentation(&mut self, mut presentation: Presentation) -> PresentationId {
        for slide in &mut presentation.slides {
            slide.layout = std::mem::take(&mut slide.layout).normalized();
        }
        reserve_ids(&mut self.ids, &presentation);
        let id = presentation.id.clone();
        let presentation = Arc::new(presentation);
        match self.presentations.iter_mut().find(|p| p.id == id) {
            Some(slot) => *slot = Arc::clone(&presentation),
            None => self.presentations.push(Arc::clone(&presentation)),
        }
        debug!(presentation = %id, slides = presentation.slide_count(), "presentation loaded");

        self.current = Some(presentation);
        self.current_slide_index = 0;
        self.history.clear();
        id
    }

    /// Switch the current presentation.
    ///
    /// An unknown id leaves no presentation current. The active slide index
    /// resets to 0 either way.
    pub fn set_current_presentation(&mut self, id: &PresentationId) -> Outcome {
        self.current = self.presentation(id).cloned();
        self.current_slide_index = 0;
        self.history.clear();
        match self.current {
            Some(_) => {
                trace!(presentation = %id, "current presentation switched");
                Outcome::Applied(())
            },
            None => {
                debug!(presentation = %id, "unknown presentation, nothing is current");
                Outcome::NotFound(Target::Presentation(id.clone()))
            },
        }
    }

    /// Point at a slide. The index is taken as is; callers keep it in bounds.
    pub fn set_current_slide_index(&mut self, index: usize) {
        trace!(index, "current slide index set");
        self.current_slide_index = index;
    }

    /// Set the title of the current presentation.
    pub fn rename_presentation(&mut self, title: impl Into<String>) -> Outcome {
        let title = title.into();
        self.edit("rename_presentation", |pres, _| {
            pres.title = title;
            Outcome::Applied(())
        })
    }

    /// Append a slide seeded for `layout` and make it active.
    pub fn add_slide(&mut self, layout: impl Into<SlideLayout>) -> Outcome<SlideId> {
        let layout = layout.into().normalized();
        let title = self.options.new_slide_title.clone();
        if self.current.is_none() {
            return self.no_presentation("add_slide");
        }
        let slide = self.seeded_slide(layout, title);

        let outcome = self.edit("add_slide", |pres, _| {
            let id = slide.id.clone();
            pres.slides.push(slide);
            Outcome::Applied(id)
        });
        if let Outcome::Applied(id) = &outcome {
            self.current_slide_index = self.slide_count().saturating_sub(1);
            debug!(slide = %id, index = self.current_slide_index, "slide added");
        }
        outcome
    }

    /// Merge fields into a slide.
    pub fn update_slide(&mut self, slide_id: &SlideId, update: SlideUpdate) -> Outcome {
        self.edit("update_slide", |pres, _| match find_slide(pres, slide_id) {
            Some(slide) => {
                update.apply(slide);
                Outcome::Applied(())
            },
            None => Outcome::NotFound(Target::Slide(slide_id.clone())),
        })
    }

    /// Remove a slide, clamping the active index into the remaining range.
    ///
    /// Removing the last remaining slide is allowed and leaves an empty
    /// presentation with index 0.
    pub fn delete_slide(&mut self, slide_id: &SlideId) -> Outcome {
        let outcome = self.edit("delete_slide", |pres, _| {
            match pres.slide_index(slide_id) {
                Some(index) => {
                    pres.slides.remove(index);
                    Outcome::Applied(())
                },
                None => Outcome::NotFound(Target::Slide(slide_id.clone())),
            }
        });
        if outcome.is_applied() {
            self.clamp_slide_index();
            debug!(slide = %slide_id, index = self.current_slide_index, "slide deleted");
        }
        outcome
    }

    /// Insert a copy of a slide (fresh ids throughout) right after it and make it active.
    pub fn duplicate_slide(&mut self, slide_id: &SlideId) -> Outcome<SlideId> {
        let mut inserted_at = 0;
        let outcome = self.edit("duplicate_slide", |pres, ids| {
            let Some(index) = pres.slide_index(slide_id) else {
                return Outcome::NotFound(Target::Slide(slide_id.clone()));
            };
            let mut copy = pres.slides[index].clone();
            copy.id = ids.slide();
            for item in &mut copy.content {
                item.id = ids.content();
            }
            let new_id = copy.id.clone();
            inserted_at = index + 1;
            pres.slides.insert(inserted_at, copy);
            Outcome::Applied(new_id)
        });
        if outcome.is_applied() {
            self.current_slide_index = inserted_at;
        }
        outcome
    }

    /// Move the slide at `from` to position `to`. The active slide stays selected.
    pub fn move_slide(&mut self, from: usize, to: usize) -> Outcome {
        let active = self.current_slide().map(|s| s.id.clone());
        let outcome = self.edit("move_slide", |pres, _| {
            let len = pres.slides.len();
            if from >= len {
                return Outcome::NotFound(Target::SlideIndex(from));
            }
            if to >= len {
                return Outcome::NotFound(Target::SlideIndex(to));
            }
            let slide = pres.slides.remove(from);
            pres.slides.insert(to, slide);
            Outcome::Applied(())
        });
        if outcome.is_applied()
            && let Some(active) = active
            && let Some(index) = self.current.as_ref().and_then(|p| p.slide_index(&active))
        {
            self.current_slide_index = index;
        }
        outcome
    }

    /// Append a content item to a slide.
    pub fn add_content(&mut self, slide_id: &SlideId, content: NewContent) -> Outcome<ContentId> {
        self.edit("add_content", |pres, ids| {
            let Some(slide) = find_slide(pres, slide_id) else {
                return Outcome::NotFound(Target::Slide(slide_id.clone()));
            };
            let id = ids.content();
            slide.content.push(content.into_item(id.clone()));
            Outcome::Applied(id)
        })
    }

    /// Merge fields into a content item.
    pub fn update_content(
        &mut self,
        slide_id: &SlideId,
        content_id: &ContentId,
        update: ContentUpdate,
    ) -> Outcome {
        self.edit("update_content", |pres, _| {
            let Some(slide) = find_slide(pres, slide_id) else {
                return Outcome::NotFound(Target::Slide(slide_id.clone()));
            };
            match slide.content.iter_mut().find(|item| &item.id == content_id) {
                Some(item) => {
                    update.apply(item);
                    Outcome::Applied(())
                },
                None => Outcome::NotFound(Target::Content(content_id.clone())),
            }
        })
    }

    /// Remove a content item from a slide.
    pub fn delete_content(&mut self, slide_id: &SlideId, content_id: &ContentId) -> Outcome {
        self.edit("delete_content", |pres, _| {
            let Some(slide) = find_slide(pres, slide_id) else {
                return Outcome::NotFound(Target::Slide(slide_id.clone()));
            };
            match slide.content.iter().position(|item| &item.id == content_id) {
                Some(index) => {
                    slide.content.remove(index);
                    Outcome::Applied(())
                },
                None => Outcome::NotFound(Target::Content(content_id.clone())),
            }
        })
    }

    /// Merge fields into the current presentation's theme.
    pub fn update_theme(&mut self, update: ThemeUpdate) -> Outcome {
        self.edit("update_theme", |pres, _| {
            update.apply(&mut pres.theme);
            Outcome::Applied(())
        })
    }

    /// Append an empty, centered item of `content_type` to the active slide.
    ///
    /// The UI fills in the value afterwards.
    pub fn add_media_to_current_slide(&mut self, content_type: ContentType) -> Outcome<ContentId> {
        let index = self.current_slide_index;
        self.edit("add_media_to_current_slide", |pres, ids| {
            let Some(slide) = pres.slides.get_mut(index) else {
                return Outcome::NotFound(Target::SlideIndex(index));
            };
            let id = ids.content();
            let item = NewContent::new(content_type, "")
                .at(Position::Center)
                .into_item(id.clone());
            slide.content.push(item);
            Outcome::Applied(id)
        })
    }

    /// Add an entry to the current presentation's media library.
    ///
    /// Returns the new id, which callers typically pass straight to
    /// [`use_media_in_current_slide`](Self::use_media_in_current_slide).
    pub fn add_media_to_library(&mut self, media: NewMedia) -> Outcome<MediaId> {
        let outcome = self.edit("add_media_to_library", |pres, ids| {
            let id = ids.media();
            pres.media_library.push(media.into_item(id.clone(), Utc::now()));
            Outcome::Applied(id)
        });
        if let Outcome::Applied(id) = &outcome {
            debug!(media = %id, "media added to library");
        }
        outcome
    }

    /// Remove an entry from the media library. Slides already using it keep their copy.
    pub fn delete_media_from_library(&mut self, media_id: &MediaId) -> Outcome {
        self.edit("delete_media_from_library", |pres, _| {
            match pres.media_library.iter().position(|m| &m.id == media_id) {
                Some(index) => {
                    pres.media_library.remove(index);
                    Outcome::Applied(())
                },
                None => Outcome::NotFound(Target::Media(media_id.clone())),
            }
        })
    }

    /// Copy a library entry into the active slide as a centered content item.
    pub fn use_media_in_current_slide(&mut self, media_id: &MediaId) -> Outcome<ContentId> {
        let index = self.current_slide_index;
        self.edit("use_media_in_current_slide", |pres, ids| {
            let Some(media) = pres.media(media_id) else {
                return Outcome::NotFound(Target::Media(media_id.clone()));
            };
            let content = NewContent::new(media.media_type.content_type(), media.url.clone())
                .at(Position::Center);
            let Some(slide) = pres.slides.get_mut(index) else {
                return Outcome::NotFound(Target::SlideIndex(index));
            };
            let id = ids.content();
            slide.content.push(content.into_item(id.clone()));
            Outcome::Applied(id)
        })
    }

    /// Restore the snapshot before the last mutation of the current presentation.
    pub fn undo(&mut self) -> Outcome {
        let Some(current) = self.current.clone() else {
            return self.no_presentation("undo");
        };
        match self.history.undo(current) {
            Some(previous) => {
                self.swap_in(previous);
                self.clamp_slide_index();
                debug!(index = self.current_slide_index, "undo");
                Outcome::Applied(())
            },
            None => Outcome::NotFound(Target::History),
        }
    }

    /// Re-apply the mutation last undone.
    pub fn redo(&mut self) -> Outcome {
        let Some(current) = self.current.clone() else {
            return self.no_presentation("redo");
        };
        match self.history.redo(current) {
            Some(next) => {
                self.swap_in(next);
                self.clamp_slide_index();
                debug!(index = self.current_slide_index, "redo");
                Outcome::Applied(())
            },
            None => Outcome::NotFound(Target::History),
        }
    }

    /// Build the next snapshot with `f` and commit it if `f` applied.
    fn edit<T>(
        &mut self,
        op: &'static str,
        f: impl FnOnce(&mut Presentation, &mut IdGenerator) -> Outcome<T>,
    ) -> Outcome<T> {
        let Some(current) = self.current.as_ref() else {
            return self.no_presentation(op);
        };
        let mut next = Presentation::clone(current);
        let outcome = f(&mut next, &mut self.ids);
        match &outcome {
            Outcome::Applied(_) => {
                trace!(op, presentation = %next.id, "snapshot committed");
                self.commit(next);
            },
            other => debug!(op, outcome = %other, "operation ignored"),
        }
        outcome
    }

    fn commit(&mut self, next: Presentation) {
        if let Some(previous) = self.current.take() {
            self.history.record(previous);
        }
        self.swap_in(Arc::new(next));
    }

    /// Replace the collection entry with the same id and make it current.
    fn swap_in(&mut self, snapshot: Arc<Presentation>) {
        match self.presentations.iter_mut().find(|p| p.id == snapshot.id) {
            Some(slot) => *slot = Arc::clone(&snapshot),
            None => self.presentations.push(Arc::clone(&snapshot)),
        }
        self.current = Some(snapshot);
    }

    fn no_presentation<T>(&self, op: &'static str) -> Outcome<T> {
        debug!(op, "no current presentation");
        Outcome::NoPresentation
    }

    fn slide_count(&self) -> usize {
        self.current.as_ref().map_or(0, |p| p.slide_count())
    }

    fn clamp_slide_index(&mut self) {
        let last = self.slide_count().saturating_sub(1);
        self.current_slide_index = self.current_slide_index.min(last);
    }

    fn seeded_slide(&mut self, layout: SlideLayout, title: String) -> Slide {
        let content = seed_for(&layout)
            .iter()
            .map(|seed| seed.to_content().into_item(self.ids.content()))
            .collect();
        Slide {
            id: self.ids.slide(),
            layout,
            title,
            content,
            background: None,
        }
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

fn find_slide<'a>(pres: &'a mut Presentation, id: &SlideId) -> Option<&'a mut Slide> {
    pres.slides.iter_mut().find(|slide| &slide.id == id)
}

fn reserve_ids(ids: &mut IdGenerator, pres: &Presentation) {
    ids.reserve_presentation(&pres.id);
    for slide in &pres.slides {
        ids.reserve_slide(&slide.id);
        for item in &slide.content {
            ids.reserve_content(&item.id);
        }
    }
    for media in &pres.media_library {
        ids.reserve_media(&media.id);
    }
}
