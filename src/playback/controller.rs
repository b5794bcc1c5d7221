//! The playback state machine.

use super::keys::{Key, PlaybackCommand};
use crate::config::PlaybackOptions;
use crate::layout::RenderPlan;
use crate::presentation::{Presentation, Slide};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Where playback is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Showing the slide at this index
    Idle(usize),
    /// Moving between two slides; `to` is committed when the transition settles
    Transitioning { from: usize, to: usize },
    /// Playback was left; nothing responds any more
    Exited,
}

/// What a command or tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// A transition began
    Started { from: usize, to: usize },
    /// A transition settled on this index
    Settled(usize),
    Exited,
    /// Nothing changed
    Ignored,
}

/// Sequential playback of one presentation snapshot.
///
/// Playback reads a snapshot and never touches the document store. Time is
/// passed in by the caller so the host decides the clock.
///
/// # Examples
///
/// ```rust
/// use slidedeck::config::PlaybackOptions;
/// use slidedeck::playback::{Key, Playback, PlaybackState};
/// use slidedeck::presentation::{DocumentStore, SlideLayout};
/// use std::time::{Duration, Instant};
///
/// let mut store = DocumentStore::new();
/// store.create_presentation("Demo");
/// store.add_slide(SlideLayout::TitleContent);
///
/// let mut playback = Playback::new(store.current().unwrap().clone(), PlaybackOptions::default());
/// let start = Instant::now();
/// playback.handle_key(Key::ArrowRight, start);
/// assert_eq!(playback.state(), PlaybackState::Transitioning { from: 0, to: 1 });
///
/// playback.tick(start + Duration::from_millis(300));
/// assert_eq!(playback.state(), PlaybackState::Idle(1));
/// ```
#[derive(Debug, Clone)]
pub struct Playback {
    presentation: Arc<Presentation>,
    options: PlaybackOptions,
    state: PlaybackState,
    started_at: Option<Instant>,
}

impl Playback {
    /// Start playback at the first slide.
    pub fn new(presentation: Arc<Presentation>, options: PlaybackOptions) -> Self {
        Self {
            presentation,
            options,
            state: PlaybackState::Idle(0),
            started_at: None,
        }
    }

    /// Start at `index` instead, clamped to the last slide.
    pub fn starting_at(mut self, index: usize) -> Self {
        self.state = PlaybackState::Idle(index.min(self.last_index()));
        self
    }

    pub fn presentation(&self) -> &Arc<Presentation> {
        &self.presentation
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_exited(&self) -> bool {
        self.state == PlaybackState::Exited
    }

    fn last_index(&self) -> usize {
        self.presentation.slide_count().saturating_sub(1)
    }

    /// Index of the slide on screen. During a transition this is still the
    /// outgoing slide.
    pub fn displayed_index(&self) -> Option<usize> {
        match self.state {
            PlaybackState::Idle(index) => Some(index),
            PlaybackState::Transitioning { from, .. } => Some(from),
            PlaybackState::Exited => None,
        }
    }

    /// The slide on screen.
    pub fn displayed_slide(&self) -> Option<&Slide> {
        self.displayed_index()
            .and_then(|index| self.presentation.slides.get(index))
    }

    /// Render plan of the slide on screen.
    pub fn plan(&self) -> Option<RenderPlan<'_>> {
        self.displayed_slide()
            .map(|slide| RenderPlan::for_slide(&self.presentation, slide))
    }

    /// Opacity of the displayed slide: fades from 1 to 0 over a transition.
    pub fn opacity(&self, now: Instant) -> f32 {
        match (self.state, self.started_at) {
            (PlaybackState::Transitioning { .. }, Some(start)) => 1.0 - self.progress(start, now),
            (PlaybackState::Exited, _) => 0.0,
            _ => 1.0,
        }
    }

    fn progress(&self, start: Instant, now: Instant) -> f32 {
        let total = self.options.transition();
        if total.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(start);
        (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Translate a key press and run its command. Unbound keys are ignored.
    pub fn handle_key(&mut self, key: Key, now: Instant) -> PlaybackEvent {
        match PlaybackCommand::from_key(key) {
            Some(command) => self.command(command, now),
            None => {
                trace!(?key, "unbound key during playback");
                PlaybackEvent::Ignored
            },
        }
    }

    /// Run a command at time `now`.
    ///
    /// Next and Prev are ignored while a transition is running and at the ends
    /// of the deck. Exit always ends playback.
    pub fn command(&mut self, command: PlaybackCommand, now: Instant) -> PlaybackEvent {
        // settle first so a press after the interval is not swallowed
        self.tick(now);

        let index = match self.state {
            PlaybackState::Exited => return PlaybackEvent::Ignored,
            _ if command == PlaybackCommand::Exit => {
                debug!("playback exited");
                self.state = PlaybackState::Exited;
                self.started_at = None;
                return PlaybackEvent::Exited;
            },
            PlaybackState::Transitioning { .. } => {
                trace!(?command, "ignored during transition");
                return PlaybackEvent::Ignored;
            },
            PlaybackState::Idle(index) => index,
        };

        let to = match command {
            PlaybackCommand::Next if index < self.last_index() => index + 1,
            PlaybackCommand::Prev if index > 0 => index - 1,
            _ => return PlaybackEvent::Ignored,
        };

        debug!(from = index, to, "playback transition started");
        self.state = PlaybackState::Transitioning { from: index, to };
        self.started_at = Some(now);
        PlaybackEvent::Started { from: index, to }
    }

    /// Commit a running transition once its interval has elapsed.
    pub fn tick(&mut self, now: Instant) -> PlaybackEvent {
        let (PlaybackState::Transitioning { to, .. }, Some(start)) = (self.state, self.started_at)
        else {
            return PlaybackEvent::Ignored;
        };
        if now.saturating_duration_since(start) < self.options.transition() {
            return PlaybackEvent::Ignored;
        }
        self.state = PlaybackState::Idle(to);
        self.started_at = None;
        debug!(index = to, "playback transition settled");
        PlaybackEvent::Settled(to)
    }

    /// Time left in the running transition.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match (self.state, self.started_at) {
            (PlaybackState::Transitioning { .. }, Some(start)) => Some(
                self.options
                    .transition()
                    .saturating_sub(now.saturating_duration_since(start)),
            ),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::IdStrategy;
    use crate::config::StoreOptions;
    use crate::presentation::{DocumentStore, SlideLayout};

    const STEP: Duration = Duration::from_millis(300);

    fn deck(slides: usize) -> Arc<Presentation> {
        let mut store =
            DocumentStore::with_options(StoreOptions::new().with_id_strategy(IdStrategy::Sequential));
        store.create_presentation("Deck");
        for _ in 1..slides {
            store.add_slide(SlideLayout::TitleContent);
        }
        store.current().unwrap().clone()
    }

    fn playback(slides: usize) -> Playback {
        Playback::new(deck(slides), PlaybackOptions::default())
    }

    #[test]
    fn test_next_commits_after_interval() {
        let mut pb = playback(3);
        let t0 = Instant::now();

        assert_eq!(pb.state(), PlaybackState::Idle(0));
        assert_eq!(pb.handle_key(Key::ArrowRight, t0), PlaybackEvent::Started { from: 0, to: 1 });
        assert_eq!(pb.state(), PlaybackState::Transitioning { from: 0, to: 1 });
        assert_eq!(pb.displayed_index(), Some(0));

        assert_eq!(pb.tick(t0 + STEP / 2), PlaybackEvent::Ignored);
        assert_eq!(pb.tick(t0 + STEP), PlaybackEvent::Settled(1));
        assert_eq!(pb.state(), PlaybackState::Idle(1));
        assert_eq!(pb.displayed_index(), Some(1));
    }

    #[test]
    fn test_rapid_double_next_advances_once() {
        let mut pb = playback(3);
        let t0 = Instant::now();

        pb.handle_key(Key::ArrowRight, t0);
        assert_eq!(
            pb.handle_key(Key::ArrowRight, t0 + Duration::from_millis(50)),
            PlaybackEvent::Ignored
        );
        pb.tick(t0 + STEP);
        assert_eq!(pb.state(), PlaybackState::Idle(1));
    }

    #[test]
    fn test_press_after_interval_is_not_lost() {
        let mut pb = playback(3);
        let t0 = Instant::now();
        pb.command(PlaybackCommand::Next, t0);
        // no tick in between; the command settles the pending transition first
        assert_eq!(
            pb.command(PlaybackCommand::Next, t0 + STEP),
            PlaybackEvent::Started { from: 1, to: 2 }
        );
    }

    #[test]
    fn test_bounds() {
        let mut pb = playback(2);
        let t0 = Instant::now();
        assert_eq!(pb.command(PlaybackCommand::Prev, t0), PlaybackEvent::Ignored);

        pb.command(PlaybackCommand::Next, t0);
        pb.tick(t0 + STEP);
        assert_eq!(pb.command(PlaybackCommand::Next, t0 + STEP), PlaybackEvent::Ignored);
        assert_eq!(
            pb.handle_key(Key::ArrowLeft, t0 + STEP),
            PlaybackEvent::Started { from: 1, to: 0 }
        );
    }

    #[test]
    fn test_exit_is_terminal() {
        let mut pb = playback(3);
        let t0 = Instant::now();
        pb.command(PlaybackCommand::Next, t0);
        assert_eq!(pb.handle_key(Key::Escape, t0), PlaybackEvent::Exited);
        assert!(pb.is_exited());
        assert_eq!(pb.displayed_index(), None);
        assert!(pb.plan().is_none());
        assert_eq!(pb.command(PlaybackCommand::Next, t0 + STEP * 4), PlaybackEvent::Ignored);
        assert_eq!(pb.tick(t0 + STEP * 4), PlaybackEvent::Ignored);
    }

    #[test]
    fn test_unbound_keys_ignored() {
        let mut pb = playback(3);
        let t0 = Instant::now();
        assert_eq!(pb.handle_key(Key::ArrowDown, t0), PlaybackEvent::Ignored);
        assert_eq!(pb.handle_key(Key::Enter, t0), PlaybackEvent::Ignored);
        assert_eq!(pb.state(), PlaybackState::Idle(0));
    }

    #[test]
    fn test_opacity_fades_outgoing_slide() {
        let mut pb = playback(2);
        let t0 = Instant::now();
        assert_eq!(pb.opacity(t0), 1.0);
        pb.command(PlaybackCommand::Next, t0);
        assert_eq!(pb.opacity(t0), 1.0);
        assert!((pb.opacity(t0 + STEP / 2) - 0.5).abs() < 1e-3);
        assert_eq!(pb.remaining(t0 + STEP / 2), Some(STEP / 2));
        pb.tick(t0 + STEP);
        assert_eq!(pb.opacity(t0 + STEP), 1.0);
        assert_eq!(pb.remaining(t0 + STEP), None);
    }

    #[test]
    fn test_zero_length_transition() {
        let options = PlaybackOptions::new().with_transition(Duration::ZERO);
        let mut pb = Playback::new(deck(2), options);
        let t0 = Instant::now();
        pb.command(PlaybackCommand::Next, t0);
        assert_eq!(pb.tick(t0), PlaybackEvent::Settled(1));
    }

    #[test]
    fn test_empty_and_single_slide_decks() {
        let mut single = playback(1);
        let t0 = Instant::now();
        assert_eq!(single.command(PlaybackCommand::Next, t0), PlaybackEvent::Ignored);
        assert!(single.plan().is_some());

        let mut pres = (*deck(1)).clone();
        pres.slides.clear();
        let mut empty = Playback::new(Arc::new(pres), PlaybackOptions::default());
        assert_eq!(empty.command(PlaybackCommand::Next, t0), PlaybackEvent::Ignored);
        assert!(empty.displayed_slide().is_none());
    }

    #[test]
    fn test_starting_at_clamps() {
        let pb = playback(3).starting_at(10);
        assert_eq!(pb.state(), PlaybackState::Idle(2));
    }

    #[test]
    fn test_snapshot_is_read_only() {
        let pres = deck(2);
        let pb = Playback::new(pres.clone(), PlaybackOptions::default());
        assert!(Arc::ptr_eq(pb.presentation(), &pres));
        let plan = pb.plan().unwrap();
        assert!(plan.shows_title());
    }
}
