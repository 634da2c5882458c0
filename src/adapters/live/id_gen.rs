//! Live adapter for the `IdGenerator` port.

use uuid::Uuid;

use crate::model::ObjectId;
use crate::ports::IdGenerator;

/// Hands out random v4 UUIDs, so object ids are never reused.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_object_id(&self) -> ObjectId {
        ObjectId::new(Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_distinct_uuids() {
        let gen = UuidIdGenerator;
        let first = gen.next_object_id();
        let second = gen.next_object_id();

        assert_ne!(first, second);
        assert!(Uuid::parse_str(first.as_str()).is_ok());
    }
}
