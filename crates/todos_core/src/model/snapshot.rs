//! Plain-data snapshots of the entity graph.
//!
//! # Responsibility
//! - Define the serializable session layout `{id, title, todos: [{id, title, done}]}`.
//! - Report why a snapshot cannot be turned back into live entities.
//!
//! # Invariants
//! - Field names on the wire are exactly `id`, `title`, `done`, `todos`.
//! - Snapshots carry ids verbatim; reviving never mints new ids.

use crate::model::id::{EntityId, ListId, TodoId};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Persisted form of one todo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoSnapshot {
    pub id: TodoId,
    pub title: String,
    pub done: bool,
}

/// Persisted form of one todo list and its items, in list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoListSnapshot {
    pub id: ListId,
    pub title: String,
    #[serde(default)]
    pub todos: Vec<TodoSnapshot>,
}

/// Errors raised while rebuilding entities from snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviveError {
    /// Id `0` is never issued, so a snapshot containing it is corrupt.
    ZeroId,
    /// Two todos inside one list share an id.
    DuplicateTodoId { list_id: ListId, todo_id: TodoId },
    /// Two lists inside one collection share an id.
    DuplicateListId(ListId),
}

impl Display for ReviveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroId => write!(f, "snapshot contains reserved id 0"),
            Self::DuplicateTodoId { list_id, todo_id } => {
                write!(f, "list {list_id} contains todo id {todo_id} more than once")
            }
            Self::DuplicateListId(id) => write!(f, "list id {id} appears more than once"),
        }
    }
}

impl Error for ReviveError {}

pub(crate) fn first_duplicate(ids: impl IntoIterator<Item = EntityId>) -> Option<EntityId> {
    let mut seen = std::collections::HashSet::new();
    ids.into_iter().find(|id| !seen.insert(*id))
}
