//! Process-wide entity identifier generator.
//!
//! # Responsibility
//! - Issue integer ids shared by todos and todo lists.
//! - Keep fresh ids ahead of every id revived from a snapshot.
//!
//! # Invariants
//! - The first id issued after process start is `1`; `0` is never issued.
//! - Every value returned by `next_id` is strictly greater than all values
//!   returned before it and all values passed to `observe_id`.
//! - The counter lives for the process lifetime only.

use std::sync::atomic::{AtomicU64, Ordering};

/// Identifier shared by every entity kind.
pub type EntityId = u64;

/// Identifier of a single todo item.
pub type TodoId = EntityId;

/// Identifier of a todo list.
pub type ListId = EntityId;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Returns a fresh entity id.
///
/// Lock-free and safe to call from any thread.
pub fn next_id() -> EntityId {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Records an id that entered the process from outside the generator.
///
/// Afterwards `next_id` only returns values greater than `id`.
pub(crate) fn observe_id(id: EntityId) {
    NEXT_ID.fetch_max(id.saturating_add(1), Ordering::Relaxed);
}
