//! Anonymous comments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CommentId, ObjectId};

/// A stored note. No author identity is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Creation order across the whole store.
    pub id: CommentId,
    /// The object the note is attached to.
    pub object: ObjectId,
    /// Verbatim text.
    pub text: String,
    /// When the note was added.
    pub created_at: DateTime<Utc>,
}
