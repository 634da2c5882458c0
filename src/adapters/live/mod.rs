//! Live adapters for the system clock and random identifiers.

pub mod clock;
pub mod id_gen;
