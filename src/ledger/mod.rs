//! Entity resolution and the three reputation ledgers.
//!
//! Each component borrows the [`ServiceContext`] and wraps every operation in
//! one store transaction, so uniqueness checks and aggregate updates commit
//! together or not at all.

mod comments;
mod facade;
mod merge;
mod resolver;
mod tags;
mod votes;

pub use comments::CommentStore;
pub use facade::Reputation;
pub use merge::MergeCoordinator;
pub use resolver::EntityResolver;
pub use tags::TagLedger;
pub use votes::VoteLedger;

use crate::context::ServiceContext;
use crate::error::{CoreError, CoreResult};
use crate::model::{ObjectId, ObjectRecord};
use crate::ports::StoreTx;

/// Loads a live object or fails with [`CoreError::NotFound`].
fn require_live(tx: &mut dyn StoreTx, id: &ObjectId) -> CoreResult<ObjectRecord> {
    tx.object(id)?.ok_or_else(|| CoreError::NotFound { object: id.clone() })
}

#[cfg(test)]
pub(crate) mod testing {
    //! Helpers shared by the ledger tests.

    use super::*;
    use crate::model::Alias;
    use crate::normalize::normalize;

    pub(crate) fn alias(text: &str) -> Alias {
        normalize(text).unwrap()
    }

    /// Creates an object for `text` and returns its id.
    pub(crate) fn object(ctx: &ServiceContext, text: &str) -> ObjectId {
        EntityResolver::new(ctx).resolve(&alias(text), None).unwrap().object
    }

    /// Sum of vote deltas as recorded, independent of the stored score.
    pub(crate) fn vote_sum(ctx: &ServiceContext, id: &ObjectId) -> i64 {
        crate::ports::atomically(ctx.store.as_ref(), |tx| tx.votes_of(id))
            .unwrap()
            .iter()
            .map(|record| record.vote.delta())
            .sum()
    }

    /// Score as stored on the object row.
    pub(crate) fn stored_score(ctx: &ServiceContext, id: &ObjectId) -> i64 {
        crate::ports::atomically(ctx.store.as_ref(), |tx| require_live(tx, id)).unwrap().score
    }
}
