//! Canonical objects and the views built over them.

use serde::{Deserialize, Serialize};

use super::{Alias, ObjectId, TagCount};

/// A live canonical object as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRecord {
    /// Object identifier.
    pub id: ObjectId,
    /// Display title, taken from the first alias seen.
    pub title: String,
    /// Aggregate of all votes on the object.
    pub score: i64,
}

/// Read-only view of everything known about an object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Object identifier.
    pub id: ObjectId,
    /// Display title.
    pub title: String,
    /// Aggregate score.
    pub score: i64,
    /// Number of `+1` votes.
    pub up_votes: u64,
    /// Number of `-1` votes.
    pub down_votes: u64,
    /// Tag counts, most applied first.
    pub tag_counts: Vec<TagCount>,
    /// Every alias the object owns.
    pub aliases: Vec<Alias>,
    /// Total number of comments.
    pub comment_count: u64,
}

/// What a merge moved, kept, and discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeReport {
    /// The surviving object.
    pub winner: ObjectId,
    /// The object that was retired.
    pub retired: ObjectId,
    /// Aliases reassigned to the winner.
    pub aliases_moved: u64,
    /// Votes migrated to the winner.
    pub votes_moved: u64,
    /// Votes dropped because the voter had already voted on the winner.
    pub votes_discarded: u64,
    /// Tag increments added to the winner's counts.
    pub tag_increments_moved: u64,
    /// Tag-voter records migrated to the winner.
    pub tag_voters_moved: u64,
    /// Tag-voter records dropped because the voter had already tagged the winner.
    pub tag_voters_discarded: u64,
    /// Comments reassigned to the winner.
    pub comments_moved: u64,
    /// Winner's score after recomputation.
    pub score: i64,
}

/// How [`crate::ledger::EntityResolver::resolve`] reached its answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// The alias was already owned by the returned object.
    Existing,
    /// A new object was created for a first-seen alias.
    Created,
    /// A first-seen alias was attached to the explicit target.
    Attached,
    /// The alias belonged to another object, which was merged into the target.
    Merged(MergeReport),
}

/// Result of resolving an alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The live object that now owns the alias.
    pub object: ObjectId,
    /// What happened on the way.
    pub outcome: ResolveOutcome,
}
