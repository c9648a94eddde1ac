//! CLI smoke entry point.
//!
//! # Responsibility
//! - Exercise `todos_core` end to end: open a session database, seed a new
//!   session, print it in display order, and store it.
//!
//! Usage: `todos_cli [DB_PATH]`. Without a path an in-memory database is used.
//! Set `TODOS_LOG_DIR` to an absolute directory to enable file logging.

use std::error::Error;
use todos_core::db::{open_db, open_db_in_memory};
use todos_core::{
    default_log_level, init_logging, new_session_id, SqliteSessionRepository, TodoService,
};

fn main() -> Result<(), Box<dyn Error>> {
    if let Ok(log_dir) = std::env::var("TODOS_LOG_DIR") {
        init_logging(default_log_level(), &log_dir)?;
    }

    let conn = match std::env::args().nth(1) {
        Some(path) => open_db(path)?,
        None => open_db_in_memory()?,
    };
    let service = TodoService::new(SqliteSessionRepository::new(&conn));

    let session_id = new_session_id();
    let lists = service.open_session(session_id)?;

    println!("todos_core version={}", todos_core::core_version());
    for summary in service.list_overview(&lists) {
        let detail = service.list_detail(&lists, summary.id)?;
        println!(
            "\n---- {} ---- ({}/{} done)",
            summary.title, summary.done_count, summary.size
        );
        for todo in detail.todos {
            println!("{todo}");
        }
    }

    service.save_session(session_id, &lists)?;
    println!("\nsaved session={session_id}");
    Ok(())
}
