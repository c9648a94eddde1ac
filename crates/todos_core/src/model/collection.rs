//! Collection root: every todo list visible to one session.
//!
//! # Responsibility
//! - Own the ordered set of `TodoList` values for a session.
//! - Resolve lists and todos by id for use-case callers.
//! - Convert to and from session snapshots.
//!
//! # Invariants
//! - No two lists in one root share an id.
//! - Lists are exclusively owned; lookups hand out borrows only.

use crate::model::id::{ListId, TodoId};
use crate::model::snapshot::{first_duplicate, ReviveError, TodoListSnapshot};
use crate::model::todo::Todo;
use crate::model::todo_list::TodoList;
use crate::sort::sort_todo_lists;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors raised when adding lists to a root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    /// A list with this id is already in the root.
    DuplicateListId(ListId),
}

impl Display for CollectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateListId(id) => write!(f, "list id {id} is already in the collection"),
        }
    }
}

impl Error for CollectionError {}

/// Ordered set of todo lists owned by one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoLists {
    lists: Vec<TodoList>,
}

impl TodoLists {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a fresh root holding the starter lists.
    ///
    /// Every call mints new entities; nothing is shared between roots.
    pub fn seed() -> Self {
        Self {
            lists: crate::model::seed::seed_lists(),
        }
    }

    /// Rebuilds a root from persisted list snapshots, keeping every id.
    ///
    /// # Errors
    /// - `ReviveError::DuplicateListId` when two snapshots share a list id.
    /// - Any error from [`TodoList::revive`].
    pub fn revive(snapshots: Vec<TodoListSnapshot>) -> Result<Self, ReviveError> {
        if let Some(list_id) = first_duplicate(snapshots.iter().map(|list| list.id)) {
            return Err(ReviveError::DuplicateListId(list_id));
        }
        let lists = snapshots
            .into_iter()
            .map(TodoList::revive)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { lists })
    }

    pub fn snapshot(&self) -> Vec<TodoListSnapshot> {
        self.lists.iter().map(TodoList::snapshot).collect()
    }

    /// Appends a list.
    ///
    /// # Errors
    /// - `CollectionError::DuplicateListId` when a list with the same id is
    ///   already present; the root is left unchanged.
    pub fn push(&mut self, list: TodoList) -> Result<(), CollectionError> {
        if self.find_list(list.id()).is_some() {
            return Err(CollectionError::DuplicateListId(list.id()));
        }
        self.lists.push(list);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TodoList> {
        self.lists.iter()
    }

    pub fn find_list(&self, list_id: ListId) -> Option<&TodoList> {
        self.lists.iter().find(|list| list.id() == list_id)
    }

    pub fn find_list_mut(&mut self, list_id: ListId) -> Option<&mut TodoList> {
        self.lists.iter_mut().find(|list| list.id() == list_id)
    }

    /// Resolves a todo inside the list with `list_id`.
    pub fn find_todo(&self, list_id: ListId, todo_id: TodoId) -> Option<&Todo> {
        self.find_list(list_id)?.find_by_id(todo_id)
    }

    pub fn find_todo_mut(&mut self, list_id: ListId, todo_id: TodoId) -> Option<&mut Todo> {
        self.find_list_mut(list_id)?.find_by_id_mut(todo_id)
    }

    /// Removes the list with `list_id`, keeping the order of the rest.
    pub fn remove_list(&mut self, list_id: ListId) -> Option<TodoList> {
        let index = self.lists.iter().position(|list| list.id() == list_id)?;
        Some(self.lists.remove(index))
    }

    /// True when some list is titled exactly `title` (case-sensitive).
    pub fn has_title(&self, title: &str) -> bool {
        self.lists.iter().any(|list| list.title() == title)
    }

    /// Lists ordered open-first, then by case-insensitive title.
    pub fn sorted(&self) -> Vec<&TodoList> {
        sort_todo_lists(&self.lists)
    }
}

impl<'a> IntoIterator for &'a TodoLists {
    type Item = &'a TodoList;
    type IntoIter = std::slice::Iter<'a, TodoList>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
