//! Alias lookup-or-create, and the link flow that can trigger a merge.

use tracing::{debug, info};

use super::merge::merge_within;
use super::require_live;
use crate::context::ServiceContext;
use crate::error::CoreResult;
use crate::model::{Alias, ObjectId, Resolution, ResolveOutcome};
use crate::ports::{atomically, IdGenerator, StoreTx};

/// Maps aliases to the live objects that own them.
pub struct EntityResolver<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EntityResolver<'a> {
    /// Creates a resolver over the given context.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Returns the object that owns `alias`.
    ///
    /// Without a `target`, a first-seen alias gets a new object titled after
    /// it. With a `target` (the "link to this object" action), a first-seen
    /// alias is attached to the target, and an alias owned by a different
    /// object causes that object to be merged into the target. Lookup,
    /// creation, and merge share one transaction.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CoreError::NotFound`] if `target` is not a live object,
    /// or [`crate::CoreError::Storage`] if the store fails.
    pub fn resolve(&self, alias: &Alias, target: Option<&ObjectId>) -> CoreResult<Resolution> {
        let id_gen = self.ctx.id_gen.as_ref();
        let resolution =
            atomically(self.ctx.store.as_ref(), |tx| resolve_within(tx, id_gen, alias, target))?;

        match &resolution.outcome {
            ResolveOutcome::Existing => {
                debug!(alias = %alias, object = %resolution.object, "alias resolved");
            }
            ResolveOutcome::Created => {
                info!(alias = %alias, object = %resolution.object, "object created");
            }
            ResolveOutcome::Attached => {
                info!(alias = %alias, object = %resolution.object, "alias attached");
            }
            ResolveOutcome::Merged(report) => info!(
                alias = %alias,
                winner = %report.winner,
                retired = %report.retired,
                aliases_moved = report.aliases_moved,
                votes_moved = report.votes_moved,
                votes_discarded = report.votes_discarded,
                tag_increments_moved = report.tag_increments_moved,
                comments_moved = report.comments_moved,
                score = report.score,
                "objects merged"
            ),
        }
        Ok(resolution)
    }
}

fn resolve_within(
    tx: &mut dyn StoreTx,
    id_gen: &dyn IdGenerator,
    alias: &Alias,
    target: Option<&ObjectId>,
) -> CoreResult<Resolution> {
    let owner = tx.find_alias_owner(alias)?;
    let (object, outcome) = match (owner, target) {
        (Some(owner), None) => (owner, ResolveOutcome::Existing),
        (Some(owner), Some(target)) if &owner == target => {
            require_live(tx, target)?;
            (owner, ResolveOutcome::Existing)
        }
        (Some(owner), Some(target)) => {
            let report = merge_within(tx, &owner, target)?;
            (target.clone(), ResolveOutcome::Merged(report))
        }
        (None, Some(target)) => {
            require_live(tx, target)?;
            tx.insert_alias(alias, target)?;
            (target.clone(), ResolveOutcome::Attached)
        }
        (None, None) => {
            let id = id_gen.next_object_id();
            tx.insert_object(&id, &alias.title())?;
            tx.insert_alias(alias, &id)?;
            (id, ResolveOutcome::Created)
        }
    };
    Ok(Resolution { object, outcome })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::ledger::testing::{alias, object};
    use crate::ports::atomically;

    #[test]
    fn first_sighting_creates_then_lookup_returns_same_object() {
        let ctx = ServiceContext::deterministic();
        let resolver = EntityResolver::new(&ctx);

        let first = resolver.resolve(&alias("+7 999 888 77 66"), None).unwrap();
        assert_eq!(first.outcome, ResolveOutcome::Created);
        assert_eq!(first.object, ObjectId::new("obj-1"));

        let second = resolver.resolve(&alias("89998887766"), None).unwrap();
        assert_eq!(second.outcome, ResolveOutcome::Existing);
        assert_eq!(second.object, first.object);
    }

    #[test]
    fn new_object_is_titled_after_its_first_alias() {
        let ctx = ServiceContext::deterministic();
        let id = object(&ctx, "https://vk.com/Durov");
        let record = atomically(ctx.store.as_ref(), |tx| require_live(tx, &id)).unwrap();
        assert_eq!(record.title, "https://vk.com/durov");
        assert_eq!(record.score, 0);
    }

    #[test]
    fn link_attaches_unseen_alias_to_target() {
        let ctx = ServiceContext::deterministic();
        let resolver = EntityResolver::new(&ctx);
        let target = object(&ctx, "@foo");

        let linked = resolver.resolve(&alias("89998887766"), Some(&target)).unwrap();
        assert_eq!(linked.outcome, ResolveOutcome::Attached);
        assert_eq!(linked.object, target);

        let again = resolver.resolve(&alias("+79998887766"), None).unwrap();
        assert_eq!(again.object, target);
    }

    #[test]
    fn link_to_current_owner_is_a_no_op() {
        let ctx = ServiceContext::deterministic();
        let target = object(&ctx, "@foo");
        let result = EntityResolver::new(&ctx).resolve(&alias("@foo"), Some(&target)).unwrap();
        assert_eq!(result.outcome, ResolveOutcome::Existing);
    }

    #[test]
    fn link_to_other_owner_merges_into_target() {
        let ctx = ServiceContext::deterministic();
        let a = object(&ctx, "@foo");
        let b = object(&ctx, "vk.com/bar");

        let result = EntityResolver::new(&ctx).resolve(&alias("@foo"), Some(&b)).unwrap();
        assert_eq!(result.object, b);
        match result.outcome {
            ResolveOutcome::Merged(report) => {
                assert_eq!(report.retired, a);
                assert_eq!(report.aliases_moved, 1);
            }
            other => panic!("expected merge, got {other:?}"),
        }
    }

    #[test]
    fn link_to_missing_target_fails_without_attaching() {
        let ctx = ServiceContext::deterministic();
        let resolver = EntityResolver::new(&ctx);
        let ghost = ObjectId::new("ghost");

        let err = resolver.resolve(&alias("@foo"), Some(&ghost)).unwrap_err();
        assert_eq!(err, CoreError::NotFound { object: ghost });

        let owner = atomically(ctx.store.as_ref(), |tx| tx.find_alias_owner(&alias("@foo")));
        assert_eq!(owner.unwrap(), None);
    }
}
