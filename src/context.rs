//! Service context bundling all port trait objects.

use crate::adapters::{
    FixedClock, LiveClock, MemoryStore, SequentialIdGenerator, SqliteStore, UuidIdGenerator,
};
use crate::config::Config;
use crate::error::CoreResult;
use crate::ports::clock::Clock;
use crate::ports::id_gen::IdGenerator;
use crate::ports::store::Store;

/// Bundles all port trait objects into a single context.
///
/// This is the storage handle every ledger receives explicitly; nothing in
/// the crate reaches for a process-wide table. Constructors wire up
/// different adapter sets.
pub struct ServiceContext {
    /// Clock for comment timestamps.
    pub clock: Box<dyn Clock>,
    /// Source of fresh object ids.
    pub id_gen: Box<dyn IdGenerator>,
    /// Transactional store holding the six relations.
    pub store: Box<dyn Store>,
}

impl ServiceContext {
    /// Creates a live context backed by the `SQLite` database named in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CoreError::Storage`] if the database cannot be opened.
    pub fn live(config: &Config) -> CoreResult<Self> {
        Ok(Self {
            clock: Box::new(LiveClock),
            id_gen: Box::new(UuidIdGenerator),
            store: Box::new(SqliteStore::open(&config.database)?),
        })
    }

    /// Creates a context over a fresh in-memory store with live clock and ids.
    ///
    /// Every write transaction copies the whole store, so this suits tests
    /// and small single-process runs. Use [`ServiceContext::live`] for real
    /// data.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            clock: Box::new(LiveClock),
            id_gen: Box::new(UuidIdGenerator),
            store: Box::new(MemoryStore::new()),
        }
    }

    /// Creates a fully deterministic context: fixed clock, `obj-N` ids,
    /// in-memory store.
    #[must_use]
    pub fn deterministic() -> Self {
        Self {
            clock: Box::new(FixedClock::default()),
            id_gen: Box::new(SequentialIdGenerator::default()),
            store: Box::new(MemoryStore::new()),
        }
    }

    /// Replaces the store, keeping the other ports.
    #[must_use]
    pub fn with_store(mut self, store: Box<dyn Store>) -> Self {
        self.store = store;
        self
    }
}
