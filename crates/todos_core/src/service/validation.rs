//! Title validation applied before entities are created or renamed.
//!
//! # Invariants
//! - Accepted titles are trimmed and hold 1 to `MAX_TITLE_CHARS` characters.
//! - Length is counted in `char`s, not bytes.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Maximum title length accepted for lists and todos.
pub const MAX_TITLE_CHARS: usize = 100;

/// Which entity a title belongs to; selects the message wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleKind {
    List,
    Todo,
}

impl TitleKind {
    fn label(self) -> &'static str {
        match self {
            Self::List => "List",
            Self::Todo => "Todo",
        }
    }
}

/// Rejected title input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleError {
    /// Blank after trimming.
    Empty(TitleKind),
    /// Longer than `MAX_TITLE_CHARS` after trimming.
    TooLong { kind: TitleKind, chars: usize },
    /// Another list already uses this exact title.
    Duplicate,
}

impl Display for TitleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty(_) => write!(f, "A title was not provided."),
            Self::TooLong { kind, .. } => write!(
                f,
                "{} title must be between 1 and {MAX_TITLE_CHARS} characters.",
                kind.label()
            ),
            Self::Duplicate => write!(f, "List title must be unique."),
        }
    }
}

impl Error for TitleError {}

/// Trims `raw` and checks its length.
pub fn validate_title(kind: TitleKind, raw: &str) -> Result<String, TitleError> {
    let trimmed = raw.trim();
    let chars = trimmed.chars().count();
    if chars == 0 {
        return Err(TitleError::Empty(kind));
    }
    if chars > MAX_TITLE_CHARS {
        return Err(TitleError::TooLong { kind, chars });
    }
    Ok(trimmed.to_string())
}
