//! Store port: the six relations and the transaction that guards them.
//!
//! The ledgers never talk to a backend directly. They open a transaction
//! with [`atomically`] and issue primitive reads and writes through
//! [`StoreTx`]. Uniqueness is enforced by the store itself: insert methods
//! report whether a row was actually written, which replaces explicit locking
//! for vote and tag deduplication.

use chrono::{DateTime, Utc};

use crate::error::{CoreError, CoreResult};
use crate::model::{
    Alias, Comment, CommentId, ObjectId, ObjectRecord, TagCount, Vote, VoteRecord, VoterId,
};

/// Primitive operations available inside a transaction.
///
/// Methods that take an object id do not check liveness unless stated; the
/// ledgers check with [`StoreTx::object`] first.
pub trait StoreTx {
    /// Returns the owner of `alias`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Storage`] on backend failure.
    fn find_alias_owner(&mut self, alias: &Alias) -> CoreResult<Option<ObjectId>>;

    /// Creates a live object with score 0. Ids must be fresh.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Storage`] if the id was ever used before.
    fn insert_object(&mut self, id: &ObjectId, title: &str) -> CoreResult<()>;

    /// Returns the object if it exists and is not retired.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Storage`] on backend failure.
    fn object(&mut self, id: &ObjectId) -> CoreResult<Option<ObjectRecord>>;

    /// Marks an object retired. Its id stays reserved.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Storage`] on backend failure.
    fn retire_object(&mut self, id: &ObjectId) -> CoreResult<()>;

    /// Attaches a new alias to `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Storage`] if the alias is already owned.
    fn insert_alias(&mut self, alias: &Alias, owner: &ObjectId) -> CoreResult<()>;

    /// Every alias owned by `id`. Order is unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Storage`] on backend failure.
    fn aliases_of(&mut self, id: &ObjectId) -> CoreResult<Vec<Alias>>;

    /// Moves every alias of `from` to `to`; returns how many moved.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Storage`] on backend failure.
    fn reassign_aliases(&mut self, from: &ObjectId, to: &ObjectId) -> CoreResult<u64>;

    /// Inserts a vote unless `(voter, object)` already has one.
    ///
    /// Returns `true` when the row was written.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Storage`] on backend failure.
    fn insert_vote(&mut self, voter: &VoterId, object: &ObjectId, vote: Vote) -> CoreResult<bool>;

    /// All votes on `object`, ordered by voter.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Storage`] on backend failure.
    fn votes_of(&mut self, object: &ObjectId) -> CoreResult<Vec<VoteRecord>>;

    /// Removes all votes on `object`; returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Storage`] on backend failure.
    fn delete_votes(&mut self, object: &ObjectId) -> CoreResult<u64>;

    /// Adds `delta` to the object's stored score.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Storage`] on backend failure.
    fn add_score(&mut self, object: &ObjectId, delta: i64) -> CoreResult<()>;

    /// Overwrites the object's stored score.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Storage`] on backend failure.
    fn set_score(&mut self, object: &ObjectId, score: i64) -> CoreResult<()>;

    /// Records that `voter` spent their tag contribution on `object`.
    ///
    /// Returns `true` when the row was written.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Storage`] on backend failure.
    fn insert_tag_voter(&mut self, voter: &VoterId, object: &ObjectId) -> CoreResult<bool>;

    /// Voters who have tagged `object`, ordered by voter.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Storage`] on backend failure.
    fn tag_voters_of(&mut self, object: &ObjectId) -> CoreResult<Vec<VoterId>>;

    /// Removes all tag-voter records of `object`; returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Storage`] on backend failure.
    fn delete_tag_voters(&mut self, object: &ObjectId) -> CoreResult<u64>;

    /// Adds `by` to the `(object, tag)` count, creating it if absent.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Storage`] on backend failure.
    fn increment_tag(&mut self, object: &ObjectId, tag: &str, by: u64) -> CoreResult<()>;

    /// Tag counts of `object`, ordered by tag name.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Storage`] on backend failure.
    fn tag_counts(&mut self, object: &ObjectId) -> CoreResult<Vec<TagCount>>;

    /// Removes all tag counts of `object`; returns how many rows were removed.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Storage`] on backend failure.
    fn delete_tags(&mut self, object: &ObjectId) -> CoreResult<u64>;

    /// Appends a comment and returns its sequence number.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Storage`] on backend failure.
    fn append_comment(
        &mut self,
        object: &ObjectId,
        text: &str,
        created_at: DateTime<Utc>,
    ) -> CoreResult<CommentId>;

    /// Up to `limit` comments of `object`, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Storage`] on backend failure.
    fn recent_comments(&mut self, object: &ObjectId, limit: usize) -> CoreResult<Vec<Comment>>;

    /// Number of comments on `object`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Storage`] on backend failure.
    fn comment_count(&mut self, object: &ObjectId) -> CoreResult<u64>;

    /// Moves every comment of `from` to `to`, keeping creation order.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Storage`] on backend failure.
    fn reassign_comments(&mut self, from: &ObjectId, to: &ObjectId) -> CoreResult<u64>;
}

/// A transactional backing store.
///
/// Implementations must make `work` all-or-nothing and serialize it against
/// any other transaction that touches the same rows.
pub trait Store: Send + Sync {
    /// Runs `work` in a single transaction.
    ///
    /// Commits when `work` returns `Ok`, rolls back when it returns `Err`.
    ///
    /// # Errors
    ///
    /// Returns the error from `work`, or [`CoreError::Storage`] when the
    /// transaction cannot be opened or committed.
    fn with_transaction(
        &self,
        work: &mut dyn FnMut(&mut dyn StoreTx) -> CoreResult<()>,
    ) -> CoreResult<()>;
}

/// Runs a closure in a transaction and hands back its output.
///
/// # Errors
///
/// Returns whatever `work` or the store returns; nothing is committed on error.
pub fn atomically<T>(
    store: &dyn Store,
    work: impl FnOnce(&mut dyn StoreTx) -> CoreResult<T>,
) -> CoreResult<T> {
    let mut work = Some(work);
    let mut output = None;
    store.with_transaction(&mut |tx| {
        let body = work.take().ok_or_else(|| CoreError::storage("transaction body ran twice"))?;
        output = Some(body(tx)?);
        Ok(())
    })?;
    output.ok_or_else(|| CoreError::storage("transaction committed without running its body"))
}
