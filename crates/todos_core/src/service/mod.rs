//! Use-case services over a session's todo lists.
//!
//! # Responsibility
//! - Apply title validation and uniqueness rules the entities do not enforce.
//! - Translate id lookups into explicit not-found errors.
//! - Load and store sessions through the repository contract.

pub mod todo_service;
pub mod validation;
