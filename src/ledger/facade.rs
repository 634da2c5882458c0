//! The operations the presentation layer consumes, in one place.

use super::{require_live, CommentStore, EntityResolver, MergeCoordinator, TagLedger, VoteLedger};
use crate::catalog::TagCatalog;
use crate::context::ServiceContext;
use crate::error::CoreResult;
use crate::model::{
    Alias, Comment, CommentId, MergeReport, ObjectId, Resolution, Snapshot, TagCount, TagName,
    Vote, VoterId,
};
use crate::normalize;
use crate::ports::atomically;

/// Entry point bundling resolution, the three ledgers, and merging.
pub struct Reputation<'a> {
    ctx: &'a ServiceContext,
    catalog: &'a TagCatalog,
}

impl<'a> Reputation<'a> {
    /// Creates the facade over a context and the tag catalog in force.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, catalog: &'a TagCatalog) -> Self {
        Self { ctx, catalog }
    }

    /// Classifies raw text as an alias.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CoreError::UnrecognizedFormat`] for free text.
    pub fn normalize(&self, text: &str) -> CoreResult<Alias> {
        normalize::normalize(text)
    }

    /// See [`EntityResolver::resolve`].
    ///
    /// # Errors
    ///
    /// As [`EntityResolver::resolve`].
    pub fn resolve(&self, alias: &Alias, target: Option<&ObjectId>) -> CoreResult<Resolution> {
        EntityResolver::new(self.ctx).resolve(alias, target)
    }

    /// Normalizes `text` and resolves the resulting alias.
    ///
    /// # Errors
    ///
    /// As [`Reputation::normalize`] and [`EntityResolver::resolve`].
    pub fn resolve_text(&self, text: &str, target: Option<&ObjectId>) -> CoreResult<Resolution> {
        let alias = self.normalize(text)?;
        self.resolve(&alias, target)
    }

    /// See [`VoteLedger::cast_vote`].
    ///
    /// # Errors
    ///
    /// As [`VoteLedger::cast_vote`].
    pub fn cast_vote(&self, voter: &VoterId, object: &ObjectId, vote: Vote) -> CoreResult<i64> {
        VoteLedger::new(self.ctx).cast_vote(voter, object, vote)
    }

    /// See [`TagLedger::add_tag`].
    ///
    /// # Errors
    ///
    /// As [`TagLedger::add_tag`].
    pub fn add_tag(
        &self,
        voter: &VoterId,
        object: &ObjectId,
        tag: &str,
    ) -> CoreResult<(TagName, u64)> {
        TagLedger::new(self.ctx, self.catalog).add_tag(voter, object, tag)
    }

    /// See [`CommentStore::add_comment`].
    ///
    /// # Errors
    ///
    /// As [`CommentStore::add_comment`].
    pub fn add_comment(&self, object: &ObjectId, text: &str) -> CoreResult<CommentId> {
        CommentStore::new(self.ctx).add_comment(object, text)
    }

    /// See [`CommentStore::recent_comments`].
    ///
    /// # Errors
    ///
    /// As [`CommentStore::recent_comments`].
    pub fn recent_comments(&self, object: &ObjectId, limit: usize) -> CoreResult<Vec<Comment>> {
        CommentStore::new(self.ctx).recent_comments(object, limit)
    }

    /// See [`MergeCoordinator::merge`].
    ///
    /// # Errors
    ///
    /// As [`MergeCoordinator::merge`].
    pub fn merge(&self, from: &ObjectId, into: &ObjectId) -> CoreResult<MergeReport> {
        MergeCoordinator::new(self.ctx).merge(from, into)
    }

    /// Everything known about a live object, read in one transaction.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CoreError::NotFound`] if `object` is not live, or
    /// [`crate::CoreError::Storage`] if the store fails.
    pub fn snapshot(&self, object: &ObjectId) -> CoreResult<Snapshot> {
        atomically(self.ctx.store.as_ref(), |tx| {
            let record = require_live(tx, object)?;
            let votes = tx.votes_of(object)?;
            let up_votes = votes.iter().filter(|v| v.vote == Vote::Up).count();
            let down_votes = votes.len() - up_votes;

            let mut tag_counts = tx.tag_counts(object)?;
            TagCount::sort_for_display(&mut tag_counts);
            let mut aliases = tx.aliases_of(object)?;
            aliases.sort();

            Ok(Snapshot {
                id: record.id,
                title: record.title,
                score: record.score,
                up_votes: u64::try_from(up_votes).unwrap_or(u64::MAX),
                down_votes: u64::try_from(down_votes).unwrap_or(u64::MAX),
                tag_counts,
                aliases,
                comment_count: tx.comment_count(object)?,
            })
        })
    }

    /// The catalog this facade validates tags against.
    #[must_use]
    pub fn catalog(&self) -> &TagCatalog {
        self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::model::{AliasKind, ResolveOutcome};

    #[test]
    fn phone_spellings_resolve_to_one_object() {
        let ctx = ServiceContext::deterministic();
        let catalog = TagCatalog::default();
        let rep = Reputation::new(&ctx, &catalog);

        let alias = rep.normalize("+7 999 888 77 66").unwrap();
        assert_eq!(alias.kind(), AliasKind::Phone);
        assert_eq!(alias.value(), "+79998887766");

        let first = rep.resolve_text("+7 999 888 77 66", None).unwrap();
        let second = rep.resolve_text("89998887766", None).unwrap();
        assert_eq!(first.object, second.object);
        assert_eq!(second.outcome, ResolveOutcome::Existing);
    }

    #[test]
    fn free_text_never_creates_an_object() {
        let ctx = ServiceContext::deterministic();
        let catalog = TagCatalog::default();
        let rep = Reputation::new(&ctx, &catalog);

        let err = rep.resolve_text("just some words", None).unwrap_err();
        assert!(matches!(err, CoreError::UnrecognizedFormat { .. }));
        assert_eq!(ctx.id_gen.next_object_id().as_str(), "obj-1");
    }

    #[test]
    fn snapshot_reports_every_ledger() {
        let ctx = ServiceContext::deterministic();
        let catalog = TagCatalog::default();
        let rep = Reputation::new(&ctx, &catalog);
        let o = rep.resolve_text("@foo", None).unwrap().object;
        rep.resolve_text("89998887766", Some(&o)).unwrap();

        rep.cast_vote(&VoterId::new("a"), &o, Vote::Up).unwrap();
        rep.cast_vote(&VoterId::new("b"), &o, Vote::Up).unwrap();
        rep.cast_vote(&VoterId::new("c"), &o, Vote::Down).unwrap();
        rep.add_tag(&VoterId::new("a"), &o, "Police").unwrap();
        rep.add_tag(&VoterId::new("b"), &o, "Scammer").unwrap();
        rep.add_tag(&VoterId::new("c"), &o, "Scammer").unwrap();
        rep.add_comment(&o, "seen at the market").unwrap();

        let snap = rep.snapshot(&o).unwrap();
        assert_eq!(snap.title, "@foo");
        assert_eq!(snap.score, 1);
        assert_eq!((snap.up_votes, snap.down_votes), (2, 1));
        assert_eq!(snap.tag_counts[0], TagCount { name: "Scammer".into(), count: 2 });
        assert_eq!(snap.tag_counts[1], TagCount { name: "Police".into(), count: 1 });
        assert_eq!(snap.aliases.len(), 2);
        assert_eq!(snap.aliases[0].kind(), AliasKind::Phone);
        assert_eq!(snap.comment_count, 1);
    }

    #[test]
    fn snapshot_of_retired_object_is_not_found() {
        let ctx = ServiceContext::deterministic();
        let catalog = TagCatalog::default();
        let rep = Reputation::new(&ctx, &catalog);
        let a = rep.resolve_text("@a", None).unwrap().object;
        let b = rep.resolve_text("@b", None).unwrap().object;
        rep.merge(&a, &b).unwrap();

        assert_eq!(rep.snapshot(&a).unwrap_err(), CoreError::NotFound { object: a });
        assert!(rep.snapshot(&b).is_ok());
    }
}
