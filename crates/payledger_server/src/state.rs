//! Shared application state.
//!
//! # Responsibility
//! - Own the server's SQLite connection for its whole lifetime: opened at
//!   startup, dropped at shutdown.
//!
//! # Invariants
//! - Each request locks the connection for exactly one gateway operation;
//!   the mutex guard guarantees release on every exit path, including
//!   errors.

use rusqlite::Connection;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub struct AppState {
    db: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Wraps a bootstrapped connection (see `payledger_core::db::open_db`).
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
        }
    }

    /// Clones the shared handle for use inside a blocking task.
    pub fn db(&self) -> Arc<Mutex<Connection>> {
        Arc::clone(&self.db)
    }
}

/// Locks the shared connection, recovering from a poisoned mutex.
///
/// A panic in one request must not wedge the store for every later request;
/// the connection itself stays consistent because each operation is a single
/// statement.
pub fn lock_db(db: &Arc<Mutex<Connection>>) -> MutexGuard<'_, Connection> {
    db.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
