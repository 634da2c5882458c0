//! One signed vote per voter per object.

use tracing::debug;

use super::require_live;
use crate::context::ServiceContext;
use crate::error::{CoreError, CoreResult};
use crate::model::{ObjectId, Vote, VoterId};
use crate::ports::atomically;

/// Records votes and keeps each object's score equal to their sum.
pub struct VoteLedger<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VoteLedger<'a> {
    /// Creates a ledger over the given context.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Casts `vote` from `voter` on `object` and returns the new score.
    ///
    /// Votes are final: there is no change or withdrawal.
    ///
    /// # Errors
    ///
    /// - [`CoreError::AlreadyVoted`] if `voter` already voted on `object`;
    ///   the score is left unchanged.
    /// - [`CoreError::NotFound`] if `object` is not live.
    /// - [`CoreError::Storage`] if the store fails.
    pub fn cast_vote(&self, voter: &VoterId, object: &ObjectId, vote: Vote) -> CoreResult<i64> {
        let score = atomically(self.ctx.store.as_ref(), |tx| {
            let record = require_live(tx, object)?;
            if !tx.insert_vote(voter, object, vote)? {
                return Err(CoreError::AlreadyVoted { voter: voter.clone(), object: object.clone() });
            }
            tx.add_score(object, vote.delta())?;
            Ok(record.score + vote.delta())
        })?;
        debug!(%voter, %object, delta = vote.delta(), score, "vote recorded");
        Ok(score)
    }
}
