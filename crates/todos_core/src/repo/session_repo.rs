//! Session repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Store one JSON snapshot of a session's todo lists per session id.
//! - Decode stored snapshots back into plain data for revival.
//!
//! # Invariants
//! - `save` is an upsert; the latest write wins.
//! - Read paths reject malformed stored data instead of masking it.

use crate::db::DbError;
use crate::model::snapshot::TodoListSnapshot;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Identifier of one browser/client session.
pub type SessionId = Uuid;

pub type SessionRepoResult<T> = Result<T, SessionRepoError>;

/// Issues a new random session id.
pub fn new_session_id() -> SessionId {
    Uuid::new_v4()
}

/// Errors from session persistence.
#[derive(Debug)]
pub enum SessionRepoError {
    Db(DbError),
    /// Snapshot could not be encoded for storage.
    Encode(serde_json::Error),
    NotFound(SessionId),
    /// Stored row cannot be decoded into snapshots.
    InvalidData(String),
}

impl Display for SessionRepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode session data: {err}"),
            Self::NotFound(id) => write!(f, "session not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid stored session data: {message}"),
        }
    }
}

impl Error for SessionRepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::NotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for SessionRepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for SessionRepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage contract for per-session todo list snapshots.
pub trait SessionRepository {
    /// Loads the stored lists for `session_id`, or `None` for an unknown session.
    fn load(&self, session_id: SessionId) -> SessionRepoResult<Option<Vec<TodoListSnapshot>>>;
    /// Replaces the stored lists for `session_id`.
    fn save(&self, session_id: SessionId, lists: &[TodoListSnapshot]) -> SessionRepoResult<()>;
    /// Removes a stored session.
    fn delete(&self, session_id: SessionId) -> SessionRepoResult<()>;
    /// Known session ids, most recently written first.
    fn list_ids(&self) -> SessionRepoResult<Vec<SessionId>>;
}

/// SQLite-backed session repository.
pub struct SqliteSessionRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSessionRepository<'conn> {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SessionRepository for SqliteSessionRepository<'_> {
    fn load(&self, session_id: SessionId) -> SessionRepoResult<Option<Vec<TodoListSnapshot>>> {
        let data: Option<String> = self
            .conn
            .query_row(
                "SELECT data FROM sessions WHERE session_id = ?1;",
                [session_id.to_string()],
                |row| row.get(0),
            )
            .optional()?;

        data.map(|text| {
            serde_json::from_str::<Vec<TodoListSnapshot>>(&text).map_err(|err| {
                SessionRepoError::InvalidData(format!("session {session_id}: {err}"))
            })
        })
        .transpose()
    }

    fn save(&self, session_id: SessionId, lists: &[TodoListSnapshot]) -> SessionRepoResult<()> {
        let data = serde_json::to_string(lists).map_err(SessionRepoError::Encode)?;
        self.conn.execute(
            "INSERT INTO sessions (session_id, data) VALUES (?1, ?2)
             ON CONFLICT(session_id) DO UPDATE SET
                data = excluded.data,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![session_id.to_string(), data],
        )?;
        Ok(())
    }

    fn delete(&self, session_id: SessionId) -> SessionRepoResult<()> {
        let changed = self.conn.execute(
            "DELETE FROM sessions WHERE session_id = ?1;",
            [session_id.to_string()],
        )?;
        if changed == 0 {
            return Err(SessionRepoError::NotFound(session_id));
        }
        Ok(())
    }

    fn list_ids(&self) -> SessionRepoResult<Vec<SessionId>> {
        let mut stmt = self
            .conn
            .prepare("SELECT session_id FROM sessions ORDER BY updated_at DESC, session_id ASC;")?;
        let mut rows = stmt.query([])?;
        let mut ids = Vec::new();

        while let Some(row) = rows.next()? {
            let text: String = row.get(0)?;
            let id = Uuid::parse_str(&text).map_err(|_| {
                SessionRepoError::InvalidData(format!(
                    "invalid uuid value `{text}` in sessions.session_id"
                ))
            })?;
            ids.push(id);
        }

        Ok(ids)
    }
}
