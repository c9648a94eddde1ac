//! Todo list use-case service.
//!
//! # Responsibility
//! - Provide the create/rename/delete/toggle/complete entry points a request
//!   handler needs, over one session's `TodoLists`.
//! - Open sessions from storage, falling back to seed lists for new sessions.
//!
//! # Invariants
//! - Titles are validated before any entity is created or renamed.
//! - List titles stay unique within a session (exact, case-sensitive match).
//! - A failed call leaves the session's lists unchanged.
//! - Unknown list/todo ids surface as `ListNotFound`/`TodoNotFound`, ahead of
//!   any title error.

use crate::model::collection::{CollectionError, TodoLists};
use crate::model::id::{ListId, TodoId};
use crate::model::snapshot::ReviveError;
use crate::model::todo::Todo;
use crate::model::todo_list::{TodoList, TodoListError};
use crate::repo::session_repo::{SessionId, SessionRepoError, SessionRepository};
use crate::service::validation::{validate_title, TitleError, TitleKind};
use crate::sort::sort_todos;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from todo use-cases.
#[derive(Debug)]
pub enum TodoServiceError {
    InvalidTitle(TitleError),
    ListNotFound(ListId),
    TodoNotFound { list_id: ListId, todo_id: TodoId },
    List(TodoListError),
    Collection(CollectionError),
    /// Stored session data could not be rebuilt into entities.
    Revive(ReviveError),
    Repo(SessionRepoError),
}

impl Display for TodoServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTitle(err) => write!(f, "{err}"),
            Self::ListNotFound(id) => write!(f, "todo list not found: {id}"),
            Self::TodoNotFound { list_id, todo_id } => {
                write!(f, "todo {todo_id} not found in list {list_id}")
            }
            Self::List(err) => write!(f, "{err}"),
            Self::Collection(err) => write!(f, "{err}"),
            Self::Revive(err) => write!(f, "failed to revive session: {err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TodoServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidTitle(err) => Some(err),
            Self::List(err) => Some(err),
            Self::Collection(err) => Some(err),
            Self::Revive(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::ListNotFound(_) | Self::TodoNotFound { .. } => None,
        }
    }
}

impl From<TitleError> for TodoServiceError {
    fn from(value: TitleError) -> Self {
        Self::InvalidTitle(value)
    }
}

impl From<TodoListError> for TodoServiceError {
    fn from(value: TodoListError) -> Self {
        Self::List(value)
    }
}

impl From<CollectionError> for TodoServiceError {
    fn from(value: CollectionError) -> Self {
        Self::Collection(value)
    }
}

impl From<ReviveError> for TodoServiceError {
    fn from(value: ReviveError) -> Self {
        Self::Revive(value)
    }
}

impl From<SessionRepoError> for TodoServiceError {
    fn from(value: SessionRepoError) -> Self {
        Self::Repo(value)
    }
}

/// Overview row for one list, as shown on the index page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSummary {
    pub id: ListId,
    pub title: String,
    pub done: bool,
    pub size: usize,
    pub done_count: usize,
}

/// One list with its todos in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListDetail<'a> {
    pub list: &'a TodoList,
    /// Open todos first, then done todos, each by case-insensitive title.
    pub todos: Vec<&'a Todo>,
}

/// Use-case facade over a session repository.
pub struct TodoService<R: SessionRepository> {
    repo: R,
}

impl<R: SessionRepository> TodoService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Loads the lists stored for `session_id`.
    ///
    /// Sessions with nothing stored start from fresh seed lists.
    pub fn open_session(&self, session_id: SessionId) -> Result<TodoLists, TodoServiceError> {
        match self.repo.load(session_id)? {
            Some(snapshots) => {
                let lists = TodoLists::revive(snapshots).inspect_err(|err| {
                    warn!(
                        "event=session_open module=service status=error source=stored error={err}"
                    );
                })?;
                info!(
                    "event=session_open module=service status=ok source=stored lists={}",
                    lists.len()
                );
                Ok(lists)
            }
            None => {
                let lists = TodoLists::seed();
                info!(
                    "event=session_open module=service status=ok source=seed lists={}",
                    lists.len()
                );
                Ok(lists)
            }
        }
    }

    /// Persists the current lists for `session_id`.
    pub fn save_session(
        &self,
        session_id: SessionId,
        lists: &TodoLists,
    ) -> Result<(), TodoServiceError> {
        self.repo.save(session_id, &lists.snapshot())?;
        info!(
            "event=session_save module=service status=ok lists={}",
            lists.len()
        );
        Ok(())
    }

    /// Drops everything stored for `session_id`.
    pub fn end_session(&self, session_id: SessionId) -> Result<(), TodoServiceError> {
        self.repo.delete(session_id)?;
        info!("event=session_end module=service status=ok");
        Ok(())
    }

    /// Creates an empty list with a validated, unique title.
    pub fn create_list(
        &self,
        lists: &mut TodoLists,
        title: &str,
    ) -> Result<ListId, TodoServiceError> {
        let title = validate_title(TitleKind::List, title)?;
        if lists.has_title(&title) {
            return Err(TitleError::Duplicate.into());
        }

        let list = TodoList::new(title);
        let list_id = list.id();
        lists.push(list)?;
        info!("event=list_create module=service status=ok list_id={list_id}");
        Ok(list_id)
    }

    /// Renames a list; the new title must not belong to another list.
    pub fn rename_list(
        &self,
        lists: &mut TodoLists,
        list_id: ListId,
        title: &str,
    ) -> Result<(), TodoServiceError> {
        if lists.find_list(list_id).is_none() {
            return Err(TodoServiceError::ListNotFound(list_id));
        }
        let title = validate_title(TitleKind::List, title)?;
        if lists
            .iter()
            .any(|list| list.id() != list_id && list.title() == title)
        {
            return Err(TitleError::Duplicate.into());
        }

        lists
            .find_list_mut(list_id)
            .ok_or(TodoServiceError::ListNotFound(list_id))?
            .set_title(title);
        info!("event=list_rename module=service status=ok list_id={list_id}");
        Ok(())
    }

    /// Removes a list and all of its todos.
    pub fn delete_list(
        &self,
        lists: &mut TodoLists,
        list_id: ListId,
    ) -> Result<TodoList, TodoServiceError> {
        let removed = lists
            .remove_list(list_id)
            .ok_or(TodoServiceError::ListNotFound(list_id))?;
        info!(
            "event=list_delete module=service status=ok list_id={list_id} todos={}",
            removed.size()
        );
        Ok(removed)
    }

    /// Appends a new open todo to a list.
    pub fn add_todo(
        &self,
        lists: &mut TodoLists,
        list_id: ListId,
        title: &str,
    ) -> Result<TodoId, TodoServiceError> {
        let title = validate_title(TitleKind::Todo, title)?;
        let list = lists
            .find_list_mut(list_id)
            .ok_or(TodoServiceError::ListNotFound(list_id))?;

        let todo = Todo::new(title);
        let todo_id = todo.id();
        list.add(todo)?;
        info!("event=todo_create module=service status=ok list_id={list_id} todo_id={todo_id}");
        Ok(todo_id)
    }

    /// Flips a todo's completion state and returns the new state.
    pub fn toggle_todo(
        &self,
        lists: &mut TodoLists,
        list_id: ListId,
        todo_id: TodoId,
    ) -> Result<bool, TodoServiceError> {
        let todo = find_todo_mut(lists, list_id, todo_id)?;
        if todo.is_done() {
            todo.mark_undone();
        } else {
            todo.mark_done();
        }

        let done = todo.is_done();
        info!(
            "event=todo_toggle module=service status=ok list_id={list_id} todo_id={todo_id} done={done}"
        );
        Ok(done)
    }

    /// Removes one todo from its list.
    pub fn delete_todo(
        &self,
        lists: &mut TodoLists,
        list_id: ListId,
        todo_id: TodoId,
    ) -> Result<Todo, TodoServiceError> {
        let list = lists
            .find_list_mut(list_id)
            .ok_or(TodoServiceError::ListNotFound(list_id))?;
        let index = list
            .position_of(todo_id)
            .ok_or(TodoServiceError::TodoNotFound { list_id, todo_id })?;

        let removed = list.remove_at(index)?;
        info!("event=todo_delete module=service status=ok list_id={list_id} todo_id={todo_id}");
        Ok(removed)
    }

    /// Marks every todo in a list as done.
    pub fn complete_all(
        &self,
        lists: &mut TodoLists,
        list_id: ListId,
    ) -> Result<(), TodoServiceError> {
        let list = lists
            .find_list_mut(list_id)
            .ok_or(TodoServiceError::ListNotFound(list_id))?;
        list.mark_all_done();
        info!(
            "event=list_complete_all module=service status=ok list_id={list_id} todos={}",
            list.size()
        );
        Ok(())
    }

    /// Summaries of every list, open lists first, then by title.
    pub fn list_overview(&self, lists: &TodoLists) -> Vec<ListSummary> {
        lists
            .sorted()
            .into_iter()
            .map(|list| ListSummary {
                id: list.id(),
                title: list.title().to_string(),
                done: list.is_done(),
                size: list.size(),
                done_count: list.done_count(),
            })
            .collect()
    }

    /// One list with its todos in display order.
    pub fn list_detail<'a>(
        &self,
        lists: &'a TodoLists,
        list_id: ListId,
    ) -> Result<ListDetail<'a>, TodoServiceError> {
        let list = lists
            .find_list(list_id)
            .ok_or(TodoServiceError::ListNotFound(list_id))?;
        Ok(ListDetail {
            list,
            todos: sort_todos(list),
        })
    }
}

fn find_todo_mut(
    lists: &mut TodoLists,
    list_id: ListId,
    todo_id: TodoId,
) -> Result<&mut Todo, TodoServiceError> {
    lists
        .find_list_mut(list_id)
        .ok_or(TodoServiceError::ListNotFound(list_id))?
        .find_by_id_mut(todo_id)
        .ok_or(TodoServiceError::TodoNotFound { list_id, todo_id })
}
