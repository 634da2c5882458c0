//! Deterministic adapters for tests and reproducible runs.

mod clock;
mod id_gen;

pub use clock::FixedClock;
pub use id_gen::SequentialIdGenerator;
