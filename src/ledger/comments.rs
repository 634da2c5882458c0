//! Append-only anonymous notes.

use tracing::debug;

use super::require_live;
use crate::context::ServiceContext;
use crate::error::CoreResult;
use crate::model::{Comment, CommentId, ObjectId};
use crate::ports::atomically;

/// Stores comments verbatim; callers impose any length limit.
pub struct CommentStore<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentStore<'a> {
    /// Creates a comment store over the given context.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Appends `text` to `object`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CoreError::NotFound`] if `object` is not live, or
    /// [`crate::CoreError::Storage`] if the store fails.
    pub fn add_comment(&self, object: &ObjectId, text: &str) -> CoreResult<CommentId> {
        let created_at = self.ctx.clock.now();
        let id = atomically(self.ctx.store.as_ref(), |tx| {
            require_live(tx, object)?;
            tx.append_comment(object, text, created_at)
        })?;
        debug!(%object, comment = id.0, "comment added");
        Ok(id)
    }

    /// The `limit` most recent comments on `object`, newest first.
    ///
    /// Each call reads a fresh snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CoreError::NotFound`] if `object` is not live, or
    /// [`crate::CoreError::Storage`] if the store fails.
    pub fn recent_comments(&self, object: &ObjectId, limit: usize) -> CoreResult<Vec<Comment>> {
        atomically(self.ctx.store.as_ref(), |tx| {
            require_live(tx, object)?;
            tx.recent_comments(object, limit)
        })
    }
}
