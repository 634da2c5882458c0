//! In-process store adapter.
//!
//! All six relations live behind one mutex, so concurrent callers are
//! serialized. A transaction reads the committed tables directly and clones
//! them on its first write; the copy is swapped in only when the body
//! succeeds, so a failed operation leaves no trace. Read-only transactions
//! never copy, but a write costs a full copy of the store, which suits tests
//! and small single-process deployments rather than large datasets.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

use chrono::{DateTime, Utc};

use crate::error::{CoreError, CoreResult};
use crate::model::{
    Alias, Comment, CommentId, ObjectId, ObjectRecord, TagCount, Vote, VoteRecord, VoterId,
};
use crate::ports::store::{Store, StoreTx};

#[derive(Debug, Clone)]
struct ObjectRow {
    title: String,
    score: i64,
    retired: bool,
}

#[derive(Debug, Clone)]
struct CommentRow {
    object: ObjectId,
    text: String,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
struct Tables {
    objects: BTreeMap<ObjectId, ObjectRow>,
    aliases: BTreeMap<Alias, ObjectId>,
    votes: BTreeMap<(ObjectId, VoterId), Vote>,
    tag_voters: BTreeSet<(ObjectId, VoterId)>,
    tags: BTreeMap<(ObjectId, String), u64>,
    comments: BTreeMap<CommentId, CommentRow>,
    next_comment: i64,
}

/// Store adapter that keeps everything in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn with_transaction(
        &self,
        work: &mut dyn FnMut(&mut dyn StoreTx) -> CoreResult<()>,
    ) -> CoreResult<()> {
        let mut committed =
            self.tables.lock().map_err(|_| CoreError::storage("memory store lock poisoned"))?;
        let working = {
            let mut tx = MemoryTx::new(&committed);
            work(&mut tx)?;
            tx.working
        };
        if let Some(working) = working {
            *committed = working;
        }
        Ok(())
    }
}

struct MemoryTx<'a> {
    committed: &'a Tables,
    working: Option<Tables>,
}

impl<'a> MemoryTx<'a> {
    fn new(committed: &'a Tables) -> Self {
        Self { committed, working: None }
    }

    fn read(&self) -> &Tables {
        self.working.as_ref().unwrap_or(self.committed)
    }

    fn write(&mut self) -> &mut Tables {
        let committed = self.committed;
        self.working.get_or_insert_with(|| committed.clone())
    }

    fn object_row(&mut self, id: &ObjectId) -> CoreResult<&mut ObjectRow> {
        self.write()
            .objects
            .get_mut(id)
            .ok_or_else(|| CoreError::storage(format!("no object row for {id}")))
    }
}

fn count(n: usize) -> u64 {
    u64::try_from(n).unwrap_or(u64::MAX)
}

impl StoreTx for MemoryTx<'_> {
    fn find_alias_owner(&mut self, alias: &Alias) -> CoreResult<Option<ObjectId>> {
        Ok(self.read().aliases.get(alias).cloned())
    }

    fn insert_object(&mut self, id: &ObjectId, title: &str) -> CoreResult<()> {
        if self.read().objects.contains_key(id) {
            return Err(CoreError::storage(format!("object id {id} already used")));
        }
        self.write()
            .objects
            .insert(id.clone(), ObjectRow { title: title.to_string(), score: 0, retired: false });
        Ok(())
    }

    fn object(&mut self, id: &ObjectId) -> CoreResult<Option<ObjectRecord>> {
        Ok(self.read().objects.get(id).filter(|row| !row.retired).map(|row| ObjectRecord {
            id: id.clone(),
            title: row.title.clone(),
            score: row.score,
        }))
    }

    fn retire_object(&mut self, id: &ObjectId) -> CoreResult<()> {
        self.object_row(id)?.retired = true;
        Ok(())
    }

    fn insert_alias(&mut self, alias: &Alias, owner: &ObjectId) -> CoreResult<()> {
        if self.read().aliases.contains_key(alias) {
            return Err(CoreError::storage(format!("alias {alias} already owned")));
        }
        self.write().aliases.insert(alias.clone(), owner.clone());
        Ok(())
    }

    fn aliases_of(&mut self, id: &ObjectId) -> CoreResult<Vec<Alias>> {
        Ok(self
            .read()
            .aliases
            .iter()
            .filter(|(_, owner)| *owner == id)
            .map(|(alias, _)| alias.clone())
            .collect())
    }

    fn reassign_aliases(&mut self, from: &ObjectId, to: &ObjectId) -> CoreResult<u64> {
        let mut moved = 0;
        for owner in self.write().aliases.values_mut().filter(|owner| *owner == from) {
            *owner = to.clone();
            moved += 1;
        }
        Ok(moved)
    }

    fn insert_vote(&mut self, voter: &VoterId, object: &ObjectId, vote: Vote) -> CoreResult<bool> {
        let key = (object.clone(), voter.clone());
        if self.read().votes.contains_key(&key) {
            return Ok(false);
        }
        self.write().votes.insert(key, vote);
        Ok(true)
    }

    fn votes_of(&mut self, object: &ObjectId) -> CoreResult<Vec<VoteRecord>> {
        Ok(self
            .read()
            .votes
            .iter()
            .filter(|((owner, _), _)| owner == object)
            .map(|((owner, voter), vote)| VoteRecord {
                voter: voter.clone(),
                object: owner.clone(),
                vote: *vote,
            })
            .collect())
    }

    fn delete_votes(&mut self, object: &ObjectId) -> CoreResult<u64> {
        let rows = &mut self.write().votes;
        let before = rows.len();
        rows.retain(|(owner, _), _| owner != object);
        Ok(count(before - rows.len()))
    }

    fn add_score(&mut self, object: &ObjectId, delta: i64) -> CoreResult<()> {
        self.object_row(object)?.score += delta;
        Ok(())
    }

    fn set_score(&mut self, object: &ObjectId, score: i64) -> CoreResult<()> {
        self.object_row(object)?.score = score;
        Ok(())
    }

    fn insert_tag_voter(&mut self, voter: &VoterId, object: &ObjectId) -> CoreResult<bool> {
        let key = (object.clone(), voter.clone());
        if self.read().tag_voters.contains(&key) {
            return Ok(false);
        }
        Ok(self.write().tag_voters.insert(key))
    }

    fn tag_voters_of(&mut self, object: &ObjectId) -> CoreResult<Vec<VoterId>> {
        Ok(self
            .read()
            .tag_voters
            .iter()
            .filter(|(owner, _)| owner == object)
            .map(|(_, voter)| voter.clone())
            .collect())
    }

    fn delete_tag_voters(&mut self, object: &ObjectId) -> CoreResult<u64> {
        let rows = &mut self.write().tag_voters;
        let before = rows.len();
        rows.retain(|(owner, _)| owner != object);
        Ok(count(before - rows.len()))
    }

    fn increment_tag(&mut self, object: &ObjectId, tag: &str, by: u64) -> CoreResult<()> {
        *self.write().tags.entry((object.clone(), tag.to_string())).or_insert(0) += by;
        Ok(())
    }

    fn tag_counts(&mut self, object: &ObjectId) -> CoreResult<Vec<TagCount>> {
        Ok(self
            .read()
            .tags
            .iter()
            .filter(|((owner, _), _)| owner == object)
            .map(|((_, name), count)| TagCount { name: name.clone(), count: *count })
            .collect())
    }

    fn delete_tags(&mut self, object: &ObjectId) -> CoreResult<u64> {
        let rows = &mut self.write().tags;
        let before = rows.len();
        rows.retain(|(owner, _), _| owner != object);
        Ok(count(before - rows.len()))
    }

    fn append_comment(
        &mut self,
        object: &ObjectId,
        text: &str,
        created_at: DateTime<Utc>,
    ) -> CoreResult<CommentId> {
        let tables = self.write();
        tables.next_comment += 1;
        let id = CommentId(tables.next_comment);
        tables.comments.insert(
            id,
            CommentRow { object: object.clone(), text: text.to_string(), created_at },
        );
        Ok(id)
    }

    fn recent_comments(&mut self, object: &ObjectId, limit: usize) -> CoreResult<Vec<Comment>> {
        Ok(self
            .read()
            .comments
            .iter()
            .rev()
            .filter(|(_, row)| &row.object == object)
            .take(limit)
            .map(|(id, row)| Comment {
                id: *id,
                object: row.object.clone(),
                text: row.text.clone(),
                created_at: row.created_at,
            })
            .collect())
    }

    fn comment_count(&mut self, object: &ObjectId) -> CoreResult<u64> {
        Ok(count(self.read().comments.values().filter(|row| &row.object == object).count()))
    }

    fn reassign_comments(&mut self, from: &ObjectId, to: &ObjectId) -> CoreResult<u64> {
        let mut moved = 0;
        for row in self.write().comments.values_mut().filter(|row| &row.object == from) {
            row.object = to.clone();
            moved += 1;
        }
        Ok(moved)
    }
}
