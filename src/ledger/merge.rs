//! Merging two canonical objects into one.
//!
//! Conflict policy: the surviving object's records win. A vote or tag-voter
//! record from the retired object whose voter already has one on the winner
//! is discarded; every other record migrates. Tag counts are summed per tag
//! name and comments always migrate. The winner's score is then recomputed
//! from its votes.

use tracing::info;

use super::require_live;
use crate::context::ServiceContext;
use crate::error::{CoreError, CoreResult};
use crate::model::{MergeReport, ObjectId};
use crate::ports::{atomically, StoreTx};

/// Unifies two objects that turned out to be the same identity.
pub struct MergeCoordinator<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MergeCoordinator<'a> {
    /// Creates a coordinator over the given context.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Moves everything `from` owns onto `into` and retires `from`.
    ///
    /// Runs as one transaction: a failure leaves both objects untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::SelfMerge`] when both ids are equal,
    /// [`CoreError::NotFound`] when either object is not live, or
    /// [`CoreError::Storage`] if the store fails.
    pub fn merge(&self, from: &ObjectId, into: &ObjectId) -> CoreResult<MergeReport> {
        let report = atomically(self.ctx.store.as_ref(), |tx| merge_within(tx, from, into))?;
        info!(
            winner = %report.winner,
            retired = %report.retired,
            votes_moved = report.votes_moved,
            votes_discarded = report.votes_discarded,
            score = report.score,
            "objects merged"
        );
        Ok(report)
    }
}

/// Merge body, run inside a caller-owned transaction.
pub(super) fn merge_within(
    tx: &mut dyn StoreTx,
    from: &ObjectId,
    into: &ObjectId,
) -> CoreResult<MergeReport> {
    if from == into {
        return Err(CoreError::SelfMerge { object: from.clone() });
    }
    require_live(tx, from)?;
    require_live(tx, into)?;

    let aliases_moved = tx.reassign_aliases(from, into)?;

    let (mut votes_moved, mut votes_discarded) = (0, 0);
    for record in tx.votes_of(from)? {
        if tx.insert_vote(&record.voter, into, record.vote)? {
            votes_moved += 1;
        } else {
            votes_discarded += 1;
        }
    }
    tx.delete_votes(from)?;

    let mut tag_increments_moved = 0;
    for tag in tx.tag_counts(from)? {
        tx.increment_tag(into, &tag.name, tag.count)?;
        tag_increments_moved += tag.count;
    }
    tx.delete_tags(from)?;

    let (mut tag_voters_moved, mut tag_voters_discarded) = (0, 0);
    for voter in tx.tag_voters_of(from)? {
        if tx.insert_tag_voter(&voter, into)? {
            tag_voters_moved += 1;
        } else {
            tag_voters_discarded += 1;
        }
    }
    tx.delete_tag_voters(from)?;

    let comments_moved = tx.reassign_comments(from, into)?;

    let score: i64 = tx.votes_of(into)?.iter().map(|record| record.vote.delta()).sum();
    tx.set_score(into, score)?;
    tx.set_score(from, 0)?;
    tx.retire_object(from)?;

    Ok(MergeReport {
        winner: into.clone(),
        retired: from.clone(),
        aliases_moved,
        votes_moved,
        votes_discarded,
        tag_increments_moved,
        tag_voters_moved,
        tag_voters_discarded,
        comments_moved,
        score,
    })
}
