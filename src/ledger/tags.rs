//! Category tags: each voter gets one tag increment per object.

use tracing::debug;

use super::require_live;
use crate::catalog::TagCatalog;
use crate::context::ServiceContext;
use crate::error::{CoreError, CoreResult};
use crate::model::{ObjectId, TagName, VoterId};
use crate::ports::atomically;

/// Maintains tag counts and the per-voter contribution gate.
pub struct TagLedger<'a> {
    ctx: &'a ServiceContext,
    catalog: &'a TagCatalog,
}

impl<'a> TagLedger<'a> {
    /// Creates a ledger that accepts only tags listed in `catalog`.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, catalog: &'a TagCatalog) -> Self {
        Self { ctx, catalog }
    }

    /// Adds one to `tag` on `object` on behalf of `voter`.
    ///
    /// Returns the canonical tag name and its new count. A voter's single
    /// contribution is spent regardless of which tag they pick.
    ///
    /// # Errors
    ///
    /// - [`CoreError::UnknownTag`] if `tag` is not in the catalog.
    /// - [`CoreError::AlreadyTagged`] if `voter` already tagged `object`.
    /// - [`CoreError::NotFound`] if `object` is not live.
    /// - [`CoreError::Storage`] if the store fails.
    pub fn add_tag(
        &self,
        voter: &VoterId,
        object: &ObjectId,
        tag: &str,
    ) -> CoreResult<(TagName, u64)> {
        let name = self.catalog.lookup(tag)?;
        let count = atomically(self.ctx.store.as_ref(), |tx| {
            require_live(tx, object)?;
            if !tx.insert_tag_voter(voter, object)? {
                return Err(CoreError::AlreadyTagged {
                    voter: voter.clone(),
                    object: object.clone(),
                });
            }
            tx.increment_tag(object, name.as_str(), 1)?;
            let count = tx
                .tag_counts(object)?
                .into_iter()
                .find(|tag| tag.name == name.as_str())
                .map_or(0, |tag| tag.count);
            Ok(count)
        })?;
        debug!(%voter, %object, tag = %name, count, "tag recorded");
        Ok((name, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::testing::object;
    use crate::ports::atomically;

    fn counts(ctx: &ServiceContext, id: &ObjectId) -> Vec<(String, u64)> {
        atomically(ctx.store.as_ref(), |tx| tx.tag_counts(id))
            .unwrap()
            .into_iter()
            .map(|tag| (tag.name, tag.count))
            .collect()
    }

    #[test]
    fn distinct_voters_accumulate() {
        let ctx = ServiceContext::deterministic();
        let catalog = TagCatalog::default();
        let ledger = TagLedger::new(&ctx, &catalog);
        let o = object(&ctx, "@target");

        let (name, count) = ledger.add_tag(&VoterId::new("a"), &o, "business").unwrap();
        assert_eq!(name.as_str(), "Business");
        assert_eq!(count, 1);
        assert_eq!(ledger.add_tag(&VoterId::new("b"), &o, "Business").unwrap().1, 2);
        ledger.add_tag(&VoterId::new("c"), &o, "Police").unwrap();

        assert_eq!(counts(&ctx, &o), vec![("Business".into(), 2), ("Police".into(), 1)]);
    }

    #[test]
    fn one_contribution_per_voter_regardless_of_tag() {
        let ctx = ServiceContext::deterministic();
        let catalog = TagCatalog::default();
        let ledger = TagLedger::new(&ctx, &catalog);
        let o = object(&ctx, "@target");
        let v = VoterId::new("v");

        ledger.add_tag(&v, &o, "Scammer").unwrap();
        let err = ledger.add_tag(&v, &o, "Police").unwrap_err();
        assert_eq!(err, CoreError::AlreadyTagged { voter: v.clone(), object: o.clone() });
        assert!(ledger.add_tag(&v, &o, "Scammer").is_err());
        assert_eq!(counts(&ctx, &o), vec![("Scammer".into(), 1)]);
    }

    #[test]
    fn unknown_tag_does_not_spend_the_contribution() {
        let ctx = ServiceContext::deterministic();
        let catalog = TagCatalog::default();
        let ledger = TagLedger::new(&ctx, &catalog);
        let o = object(&ctx, "@target");
        let v = VoterId::new("v");

        let err = ledger.add_tag(&v, &o, "Astronaut").unwrap_err();
        assert_eq!(err, CoreError::UnknownTag { name: "Astronaut".into() });
        assert!(ledger.add_tag(&v, &o, "Police").is_ok());
    }
}
