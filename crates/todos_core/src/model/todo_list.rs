//! TodoList entity.
//!
//! # Responsibility
//! - Own an ordered sequence of `Todo` items under one title.
//! - Provide positional, title and id lookups plus bulk completion updates.
//! - Produce filtered views as new lists.
//!
//! # Invariants
//! - Insertion order is preserved by every operation except explicit removal.
//! - A list is done only when it has at least one todo and all are done.
//! - Index-based operations validate before mutating; a failed call leaves
//!   the list untouched.
//! - Filtered views get a fresh list id and share the source title.

use crate::model::id::{next_id, observe_id, ListId, TodoId};
use crate::model::snapshot::{first_duplicate, ReviveError, TodoListSnapshot};
use crate::model::todo::Todo;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors raised by positional list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoListError {
    /// `index` is not a current position in the list.
    IndexOutOfRange { index: usize, len: usize },
    /// A todo with this id is already in the list.
    DuplicateTodoId(TodoId),
}

impl Display for TodoListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "invalid index: {index} (list has {len} todos)")
            }
            Self::DuplicateTodoId(id) => write!(f, "todo id {id} is already in the list"),
        }
    }
}

impl Error for TodoListError {}

/// A named, ordered collection of todos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoList {
    id: ListId,
    title: String,
    todos: Vec<Todo>,
}

impl TodoList {
    /// Creates an empty list with a fresh id.
    pub fn new(title: impl Into<String>) -> Self {
        Self::from_distinct(title, Vec::new())
    }

    /// Builds a list with a fresh id around todos whose ids are already
    /// pairwise distinct.
    pub(crate) fn from_distinct(title: impl Into<String>, todos: Vec<Todo>) -> Self {
        Self {
            id: next_id(),
            title: title.into(),
            todos,
        }
    }

    /// Rebuilds a list and its todos from persisted data, keeping all ids.
    ///
    /// # Errors
    /// - `ReviveError::ZeroId` when the list or any todo carries id `0`.
    /// - `ReviveError::DuplicateTodoId` when two todos share an id.
    pub fn revive(snapshot: TodoListSnapshot) -> Result<Self, ReviveError> {
        if snapshot.id == 0 {
            return Err(ReviveError::ZeroId);
        }
        if let Some(todo_id) = first_duplicate(snapshot.todos.iter().map(|todo| todo.id)) {
            return Err(ReviveError::DuplicateTodoId {
                list_id: snapshot.id,
                todo_id,
            });
        }

        let todos = snapshot
            .todos
            .into_iter()
            .map(Todo::revive)
            .collect::<Result<Vec<_>, _>>()?;
        observe_id(snapshot.id);

        Ok(Self {
            id: snapshot.id,
            title: snapshot.title,
            todos,
        })
    }

    pub fn id(&self) -> ListId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replaces the title verbatim.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Appends a todo to the end of the list.
    ///
    /// # Errors
    /// - `TodoListError::DuplicateTodoId` when a todo with the same id is
    ///   already present; the list is left unchanged.
    pub fn add(&mut self, todo: Todo) -> Result<(), TodoListError> {
        if self.find_by_id(todo.id()).is_some() {
            return Err(TodoListError::DuplicateTodoId(todo.id()));
        }
        self.todos.push(todo);
        Ok(())
    }

    pub fn size(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn first(&self) -> Option<&Todo> {
        self.todos.first()
    }

    pub fn last(&self) -> Option<&Todo> {
        self.todos.last()
    }

    /// Returns the todo at `index`.
    ///
    /// # Errors
    /// - `TodoListError::IndexOutOfRange` when `index >= size()`.
    pub fn item_at(&self, index: usize) -> Result<&Todo, TodoListError> {
        self.validate_index(index)?;
        Ok(&self.todos[index])
    }

    /// Mutable variant of [`TodoList::item_at`].
    ///
    /// # Errors
    /// - `TodoListError::IndexOutOfRange` when `index >= size()`.
    pub fn item_at_mut(&mut self, index: usize) -> Result<&mut Todo, TodoListError> {
        self.validate_index(index)?;
        Ok(&mut self.todos[index])
    }

    /// # Errors
    /// - `TodoListError::IndexOutOfRange` when `index >= size()`.
    pub fn mark_done_at(&mut self, index: usize) -> Result<(), TodoListError> {
        self.item_at_mut(index)?.mark_done();
        Ok(())
    }

    /// # Errors
    /// - `TodoListError::IndexOutOfRange` when `index >= size()`.
    pub fn mark_undone_at(&mut self, index: usize) -> Result<(), TodoListError> {
        self.item_at_mut(index)?.mark_undone();
        Ok(())
    }

    /// Marks the first todo whose title equals `title` exactly.
    ///
    /// Absent titles are ignored.
    pub fn mark_done_by_title(&mut self, title: &str) {
        if let Some(todo) = self.find_by_title_mut(title) {
            todo.mark_done();
        }
    }

    /// True when the list is non-empty and every todo is done.
    pub fn is_done(&self) -> bool {
        !self.todos.is_empty() && self.todos.iter().all(Todo::is_done)
    }

    /// Removes and returns the first todo.
    pub fn shift(&mut self) -> Option<Todo> {
        if self.todos.is_empty() {
            return None;
        }
        Some(self.todos.remove(0))
    }

    /// Removes and returns the last todo.
    pub fn pop(&mut self) -> Option<Todo> {
        self.todos.pop()
    }

    /// Removes the todo at `index`, keeping the order of the rest.
    ///
    /// # Errors
    /// - `TodoListError::IndexOutOfRange` when `index >= size()`; the list is
    ///   left unchanged.
    pub fn remove_at(&mut self, index: usize) -> Result<Todo, TodoListError> {
        self.validate_index(index)?;
        Ok(self.todos.remove(index))
    }

    /// Returns a new list holding copies of the todos matching `predicate`.
    ///
    /// The result keeps this list's title but has its own fresh id.
    pub fn filter<F>(&self, mut predicate: F) -> TodoList
    where
        F: FnMut(&Todo) -> bool,
    {
        let todos = self
            .todos
            .iter()
            .filter(|todo| predicate(*todo))
            .cloned()
            .collect();
        TodoList::from_distinct(self.title.clone(), todos)
    }

    /// First todo with exactly `title` (case-sensitive).
    pub fn find_by_title(&self, title: &str) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.title() == title)
    }

    pub fn find_by_title_mut(&mut self, title: &str) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|todo| todo.title() == title)
    }

    pub fn find_by_id(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id() == id)
    }

    pub fn find_by_id_mut(&mut self, id: TodoId) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|todo| todo.id() == id)
    }

    /// Position of the todo sharing `todo`'s id, if it is in this list.
    pub fn find_index_of(&self, todo: &Todo) -> Option<usize> {
        self.position_of(todo.id())
    }

    /// Position of the todo with `id`, if present.
    pub fn position_of(&self, id: TodoId) -> Option<usize> {
        self.todos.iter().position(|todo| todo.id() == id)
    }

    pub fn all_done(&self) -> TodoList {
        self.filter(Todo::is_done)
    }

    pub fn all_not_done(&self) -> TodoList {
        self.filter(|todo| !todo.is_done())
    }

    pub fn all_todos(&self) -> TodoList {
        self.filter(|_| true)
    }

    pub fn mark_all_done(&mut self) {
        self.todos.iter_mut().for_each(Todo::mark_done);
    }

    pub fn mark_all_undone(&mut self) {
        self.todos.iter_mut().for_each(Todo::mark_undone);
    }

    /// Independent copy of the todos in list order.
    pub fn to_array(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.todos.iter()
    }

    /// Number of completed todos.
    pub fn done_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.is_done()).count()
    }

    /// Captures the plain-data form stored in sessions.
    pub fn snapshot(&self) -> TodoListSnapshot {
        TodoListSnapshot {
            id: self.id,
            title: self.title.clone(),
            todos: self.todos.iter().map(Todo::snapshot).collect(),
        }
    }

    fn validate_index(&self, index: usize) -> Result<(), TodoListError> {
        if index < self.todos.len() {
            Ok(())
        } else {
            Err(TodoListError::IndexOutOfRange {
                index,
                len: self.todos.len(),
            })
        }
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for TodoList {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "---- {} ----", self.title)?;
        for todo in &self.todos {
            write!(f, "\n{todo}")?;
        }
        Ok(())
    }
}
