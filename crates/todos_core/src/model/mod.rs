//! In-memory todo domain model.
//!
//! # Responsibility
//! - Define the `Todo` and `TodoList` entities and the per-session root.
//! - Define the plain-data snapshot shape used to persist sessions.
//!
//! # Invariants
//! - Every entity id comes from one process-wide generator or a revived
//!   snapshot; ids are never reused for another entity.
//! - Ownership is a strict tree: root owns lists, lists own todos.

pub mod collection;
pub mod id;
mod seed;
pub mod snapshot;
pub mod todo;
pub mod todo_list;
