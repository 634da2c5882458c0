//! Predictable identifier sequence.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::model::ObjectId;
use crate::ports::IdGenerator;

/// Yields `<prefix>-1`, `<prefix>-2`, ...
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    /// Starts a sequence with the given prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into(), next: AtomicU64::new(1) }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("obj")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_object_id(&self) -> ObjectId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        ObjectId::new(format!("{}-{n}", self.prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_up_from_one() {
        let gen = SequentialIdGenerator::default();
        assert_eq!(gen.next_object_id().as_str(), "obj-1");
        assert_eq!(gen.next_object_id().as_str(), "obj-2");
    }
}
