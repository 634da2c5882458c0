//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the reputation core and
//! something it does not own (time, identifiers, persistence).
//! Implementations live in `src/adapters/`.

pub mod clock;
pub mod id_gen;
pub mod store;

pub use clock::Clock;
pub use id_gen::IdGenerator;
pub use store::{atomically, Store, StoreTx};
