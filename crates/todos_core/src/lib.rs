//! Core domain logic for the todo list manager.
//!
//! Entities, ordering and session persistence live here; request routing and
//! rendering are left to callers.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod sort;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::collection::{CollectionError, TodoLists};
pub use model::id::{next_id, EntityId, ListId, TodoId};
pub use model::snapshot::{ReviveError, TodoListSnapshot, TodoSnapshot};
pub use model::todo::Todo;
pub use model::todo_list::{TodoList, TodoListError};
pub use repo::session_repo::{
    new_session_id, SessionId, SessionRepoError, SessionRepoResult, SessionRepository,
    SqliteSessionRepository,
};
pub use service::todo_service::{ListDetail, ListSummary, TodoService, TodoServiceError};
pub use service::validation::{validate_title, TitleError, TitleKind, MAX_TITLE_CHARS};
pub use sort::{sort_todo_lists, sort_todos, Completable};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
