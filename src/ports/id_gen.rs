//! Source of canonical object identifiers.

use crate::model::ObjectId;

/// Hands out identifiers for newly created objects.
///
/// An id, once issued, must never be issued again, even after the object it
/// named is retired by a merge.
pub trait IdGenerator: Send + Sync {
    /// Returns a fresh object id.
    fn next_object_id(&self) -> ObjectId;
}
