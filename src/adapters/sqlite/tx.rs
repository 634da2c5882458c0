//! `StoreTx` over an open `SQLite` transaction.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use super::db;
use crate::error::{CoreError, CoreResult};
use crate::model::{
    Alias, AliasKind, Comment, CommentId, ObjectId, ObjectRecord, TagCount, Vote, VoteRecord,
    VoterId,
};
use crate::ports::store::StoreTx;

pub(super) struct SqliteTx<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteTx<'a> {
    pub(super) fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn execute(&self, sql: &str, params: impl rusqlite::Params) -> CoreResult<u64> {
        let changed = self.conn.execute(sql, params).map_err(db)?;
        Ok(to_u64(changed))
    }
}

fn to_u64(n: usize) -> u64 {
    u64::try_from(n).unwrap_or(u64::MAX)
}

fn to_i64<T>(n: T) -> CoreResult<i64>
where
    i64: TryFrom<T>,
{
    i64::try_from(n).map_err(|_| CoreError::storage("value out of range for sqlite integer"))
}

impl StoreTx for SqliteTx<'_> {
    fn find_alias_owner(&mut self, alias: &Alias) -> CoreResult<Option<ObjectId>> {
        self.conn
            .query_row(
                "SELECT object_id FROM aliases WHERE kind = ?1 AND value = ?2",
                params![alias.kind().as_str(), alias.value()],
                |row| row.get::<_, String>(0),
            )
            .optional()
            .map(|owner| owner.map(ObjectId::new))
            .map_err(db)
    }

    fn insert_object(&mut self, id: &ObjectId, title: &str) -> CoreResult<()> {
        self.execute("INSERT INTO objects (id, title) VALUES (?1, ?2)", params![id.as_str(), title])?;
        Ok(())
    }

    fn object(&mut self, id: &ObjectId) -> CoreResult<Option<ObjectRecord>> {
        self.conn
            .query_row(
                "SELECT title, score FROM objects WHERE id = ?1 AND retired = 0",
                params![id.as_str()],
                |row| Ok(ObjectRecord { id: id.clone(), title: row.get(0)?, score: row.get(1)? }),
            )
            .optional()
            .map_err(db)
    }

    fn retire_object(&mut self, id: &ObjectId) -> CoreResult<()> {
        self.execute("UPDATE objects SET retired = 1 WHERE id = ?1", params![id.as_str()])?;
        Ok(())
    }

    fn insert_alias(&mut self, alias: &Alias, owner: &ObjectId) -> CoreResult<()> {
        self.execute(
            "INSERT INTO aliases (kind, value, object_id) VALUES (?1, ?2, ?3)",
            params![alias.kind().as_str(), alias.value(), owner.as_str()],
        )?;
        Ok(())
    }

    fn aliases_of(&mut self, id: &ObjectId) -> CoreResult<Vec<Alias>> {
        let mut stmt = self
            .conn
            .prepare("SELECT kind, value FROM aliases WHERE object_id = ?1")
            .map_err(db)?;
        let rows = stmt
            .query_map(params![id.as_str()], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })
            .map_err(db)?;

        let mut aliases = Vec::new();
        for row in rows {
            let (kind, value) = row.map_err(db)?;
            let kind = AliasKind::from_storage(&kind)
                .ok_or_else(|| CoreError::storage(format!("unknown alias kind {kind:?} in store")))?;
            aliases.push(Alias::from_parts(kind, value));
        }
        Ok(aliases)
    }

    fn reassign_aliases(&mut self, from: &ObjectId, to: &ObjectId) -> CoreResult<u64> {
        self.execute(
            "UPDATE aliases SET object_id = ?2 WHERE object_id = ?1",
            params![from.as_str(), to.as_str()],
        )
    }

    fn insert_vote(&mut self, voter: &VoterId, object: &ObjectId, vote: Vote) -> CoreResult<bool> {
        let inserted = self.execute(
            "INSERT OR IGNORE INTO votes (voter_id, object_id, value) VALUES (?1, ?2, ?3)",
            params![voter.as_str(), object.as_str(), vote.delta()],
        )?;
        Ok(inserted == 1)
    }

    fn votes_of(&mut self, object: &ObjectId) -> CoreResult<Vec<VoteRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT voter_id, value FROM votes WHERE object_id = ?1 ORDER BY voter_id")
            .map_err(db)?;
        let rows = stmt
            .query_map(params![object.as_str()], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
            })
            .map_err(db)?;

        let mut votes = Vec::new();
        for row in rows {
            let (voter, value) = row.map_err(db)?;
            let vote = Vote::from_delta(value)
                .ok_or_else(|| CoreError::storage(format!("invalid vote value {value} in store")))?;
            votes.push(VoteRecord { voter: VoterId::new(voter), object: object.clone(), vote });
        }
        Ok(votes)
    }

    fn delete_votes(&mut self, object: &ObjectId) -> CoreResult<u64> {
        self.execute("DELETE FROM votes WHERE object_id = ?1", params![object.as_str()])
    }

    fn add_score(&mut self, object: &ObjectId, delta: i64) -> CoreResult<()> {
        self.execute(
            "UPDATE objects SET score = score + ?2 WHERE id = ?1",
            params![object.as_str(), delta],
        )?;
        Ok(())
    }

    fn set_score(&mut self, object: &ObjectId, score: i64) -> CoreResult<()> {
        self.execute("UPDATE objects SET score = ?2 WHERE id = ?1", params![object.as_str(), score])?;
        Ok(())
    }

    fn insert_tag_voter(&mut self, voter: &VoterId, object: &ObjectId) -> CoreResult<bool> {
        let inserted = self.execute(
            "INSERT OR IGNORE INTO tag_voters (voter_id, object_id) VALUES (?1, ?2)",
            params![voter.as_str(), object.as_str()],
        )?;
        Ok(inserted == 1)
    }

    fn tag_voters_of(&mut self, object: &ObjectId) -> CoreResult<Vec<VoterId>> {
        let mut stmt = self
            .conn
            .prepare("SELECT voter_id FROM tag_voters WHERE object_id = ?1 ORDER BY voter_id")
            .map_err(db)?;
        let voters = stmt
            .query_map(params![object.as_str()], |row| row.get::<_, String>(0))
            .map_err(db)?
            .map(|voter| voter.map(VoterId::new).map_err(db))
            .collect();
        voters
    }

    fn delete_tag_voters(&mut self, object: &ObjectId) -> CoreResult<u64> {
        self.execute("DELETE FROM tag_voters WHERE object_id = ?1", params![object.as_str()])
    }

    fn increment_tag(&mut self, object: &ObjectId, tag: &str, by: u64) -> CoreResult<()> {
        self.execute(
            "INSERT INTO tag_assignments (object_id, tag, count) VALUES (?1, ?2, ?3)
             ON CONFLICT (object_id, tag) DO UPDATE SET count = count + excluded.count",
            params![object.as_str(), tag, to_i64(by)?],
        )?;
        Ok(())
    }

    fn tag_counts(&mut self, object: &ObjectId) -> CoreResult<Vec<TagCount>> {
        let mut stmt = self
            .conn
            .prepare("SELECT tag, count FROM tag_assignments WHERE object_id = ?1 ORDER BY tag")
            .map_err(db)?;
        let rows = stmt
            .query_map(params![object.as_str()], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
            })
            .map_err(db)?;

        let mut counts = Vec::new();
        for row in rows {
            let (name, count) = row.map_err(db)?;
            let count = u64::try_from(count)
                .map_err(|_| CoreError::storage(format!("negative tag count for {name}")))?;
            counts.push(TagCount { name, count });
        }
        Ok(counts)
    }

    fn delete_tags(&mut self, object: &ObjectId) -> CoreResult<u64> {
        self.execute("DELETE FROM tag_assignments WHERE object_id = ?1", params![object.as_str()])
    }

    fn append_comment(
        &mut self,
        object: &ObjectId,
        text: &str,
        created_at: DateTime<Utc>,
    ) -> CoreResult<CommentId> {
        self.execute(
            "INSERT INTO comments (object_id, text, created_at) VALUES (?1, ?2, ?3)",
            params![object.as_str(), text, created_at],
        )?;
        Ok(CommentId(self.conn.last_insert_rowid()))
    }

    fn recent_comments(&mut self, object: &ObjectId, limit: usize) -> CoreResult<Vec<Comment>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, text, created_at FROM comments
                 WHERE object_id = ?1 ORDER BY id DESC LIMIT ?2",
            )
            .map_err(db)?;
        let comments = stmt
            .query_map(params![object.as_str(), to_i64(limit)?], |row| {
                Ok(Comment {
                    id: CommentId(row.get(0)?),
                    object: object.clone(),
                    text: row.get(1)?,
                    created_at: row.get(2)?,
                })
            })
            .map_err(db)?
            .map(|comment| comment.map_err(db))
            .collect();
        comments
    }

    fn comment_count(&mut self, object: &ObjectId) -> CoreResult<u64> {
        let count: i64 = self
            .conn
            .query_row(
                "SELECT COUNT(*) FROM comments WHERE object_id = ?1",
                params![object.as_str()],
                |row| row.get(0),
            )
            .map_err(db)?;
        u64::try_from(count).map_err(|_| CoreError::storage("negative comment count"))
    }

    fn reassign_comments(&mut self, from: &ObjectId, to: &ObjectId) -> CoreResult<u64> {
        self.execute(
            "UPDATE comments SET object_id = ?2 WHERE object_id = ?1",
            params![from.as_str(), to.as_str()],
        )
    }
}
