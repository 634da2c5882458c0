//! Typed data model shared by the normalizer, the ledgers, and the stores.

mod alias;
mod comment;
mod ids;
mod object;
mod tag;
mod vote;

pub use alias::{Alias, AliasKind, PROFILE_HOST};
pub use comment::Comment;
pub use ids::{CommentId, ObjectId, VoterId};
pub use object::{MergeReport, ObjectRecord, Resolution, ResolveOutcome, Snapshot};
pub use tag::{TagCount, TagName};
pub use vote::{Vote, VoteRecord};
