//! Repository layer for session persistence.
//!
//! # Responsibility
//! - Define the session storage contract used by services.
//! - Keep SQL and JSON encoding details out of the service layer.
//!
//! # Invariants
//! - Stored session data round-trips through `TodoListSnapshot` only.
//! - Missing sessions are reported as `None` on load and `NotFound` on delete.

pub mod session_repo;
