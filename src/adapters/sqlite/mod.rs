//! Durable store adapter backed by `SQLite`.
//!
//! One connection is shared behind a mutex and every transaction is opened
//! with `BEGIN IMMEDIATE`, so writers are serialized and a lookup that races
//! a merge sees either the pre-merge or the post-merge state.

mod schema;
mod tx;

use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use rusqlite::{Connection, TransactionBehavior};
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::ports::store::{Store, StoreTx};

use tx::SqliteTx;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Store adapter persisting the six relations in a `SQLite` database.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Opens (or creates) the database at `path` and ensures the schema exists.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Storage`] if the parent directory cannot be
    /// created or the database cannot be opened or initialized.
    pub fn open(path: &Path) -> CoreResult<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                CoreError::storage(format!("failed to create {}: {e}", parent.display()))
            })?;
        }
        let conn = Connection::open(path).map_err(db)?;
        debug!(path = %path.display(), "opened sqlite store");
        Self::from_connection(conn)
    }

    /// Opens a private in-memory database.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Storage`] if the schema cannot be created.
    pub fn open_in_memory() -> CoreResult<Self> {
        Self::from_connection(Connection::open_in_memory().map_err(db)?)
    }

    fn from_connection(conn: Connection) -> CoreResult<Self> {
        conn.busy_timeout(BUSY_TIMEOUT).map_err(db)?;
        schema::init(&conn).map_err(db)?;
        Ok(Self { conn: Mutex::new(conn) })
    }
}

impl Store for SqliteStore {
    fn with_transaction(
        &self,
        work: &mut dyn FnMut(&mut dyn StoreTx) -> CoreResult<()>,
    ) -> CoreResult<()> {
        let mut conn =
            self.conn.lock().map_err(|_| CoreError::storage("sqlite connection lock poisoned"))?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate).map_err(db)?;
        // Dropping `tx` on the error path rolls back.
        work(&mut SqliteTx::new(&tx))?;
        tx.commit().map_err(db)
    }
}

fn db(err: rusqlite::Error) -> CoreError {
    CoreError::storage(err)
}
