//! Adapter implementations of the port traits.
//!
//! - `live`: system clock and UUID identifiers
//! - `fixed`: deterministic clock and identifiers
//! - `memory`: transactional in-process store
//! - `sqlite`: durable store

pub mod fixed;
pub mod live;
pub mod memory;
pub mod sqlite;

pub use fixed::{FixedClock, SequentialIdGenerator};
pub use live::clock::LiveClock;
pub use live::id_gen::UuidIdGenerator;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
