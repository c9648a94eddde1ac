//! Todo entity.
//!
//! # Responsibility
//! - Hold one task title and its completion flag.
//! - Render the single-line `[X] title` display form.
//!
//! # Invariants
//! - `id` is assigned once, either by `next_id` or by `revive`, and never
//!   changes afterwards.
//! - Titles are stored verbatim; length and emptiness are checked by callers.

use crate::model::id::{next_id, observe_id, TodoId};
use crate::model::snapshot::{ReviveError, TodoSnapshot};
use std::fmt::{Display, Formatter};

/// Marker rendered for a completed todo.
pub const DONE_MARKER: char = 'X';
/// Marker rendered for an open todo.
pub const UNDONE_MARKER: char = ' ';

/// A single task item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id: TodoId,
    title: String,
    done: bool,
}

impl Todo {
    /// Creates an open todo with a fresh id.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: next_id(),
            title: title.into(),
            done: false,
        }
    }

    /// Rebuilds a todo from persisted data, keeping its original id.
    ///
    /// # Errors
    /// - `ReviveError::ZeroId` when the snapshot carries id `0`.
    pub fn revive(snapshot: TodoSnapshot) -> Result<Self, ReviveError> {
        if snapshot.id == 0 {
            return Err(ReviveError::ZeroId);
        }
        observe_id(snapshot.id);
        Ok(Self {
            id: snapshot.id,
            title: snapshot.title,
            done: snapshot.done,
        })
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn mark_undone(&mut self) {
        self.done = false;
    }

    /// Replaces the title verbatim.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Captures the plain-data form stored in sessions.
    pub fn snapshot(&self) -> TodoSnapshot {
        TodoSnapshot {
            id: self.id,
            title: self.title.clone(),
            done: self.done,
        }
    }
}

impl Display for Todo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let marker = if self.done { DONE_MARKER } else { UNDONE_MARKER };
        write!(f, "[{marker}] {}", self.title)
    }
}
