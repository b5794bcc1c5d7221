//! Undo/redo over presentation snapshots.

use super::prs::Presentation;
use std::collections::VecDeque;
use std::sync::Arc;

/// Bounded history of snapshots for one presentation.
///
/// Since snapshots are immutable, recording one is just keeping the `Arc`.
#[derive(Debug, Clone)]
pub struct History {
    undo: VecDeque<Arc<Presentation>>,
    redo: Vec<Arc<Presentation>>,
    limit: usize,
}

impl History {
    /// A history keeping at most `limit` undo steps. `0` disables recording.
    pub fn new(limit: usize) -> Self {
        Self {
            undo: VecDeque::with_capacity(limit.min(64)),
            redo: Vec::new(),
            limit,
        }
    }

    /// Record the snapshot that a mutation is about to replace.
    pub fn record(&mut self, previous: Arc<Presentation>) {
        if self.limit == 0 {
            return;
        }
        if self.undo.len() == self.limit {
            self.undo.pop_front();
        }
        self.undo.push_back(previous);
        self.redo.clear();
    }

    /// Step back: returns the snapshot to restore, remembering `current` for redo.
    pub fn undo(&mut self, current: Arc<Presentation>) -> Option<Arc<Presentation>> {
        let previous = self.undo.pop_back()?;
        self.redo.push(current);
        Some(previous)
    }

    /// Step forward again after an undo.
    pub fn redo(&mut self, current: Arc<Presentation>) -> Option<Arc<Presentation>> {
        let next = self.redo.pop()?;
        self.undo.push_back(current);
        if self.undo.len() > self.limit {
            self.undo.pop_front();
        }
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}
