//! `SQLite` schema for the six relations.

use rusqlite::Connection;

/// Table and index definitions. Every statement is idempotent.
const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS objects (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    score INTEGER NOT NULL DEFAULT 0,
    retired INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS aliases (
    kind TEXT NOT NULL,
    value TEXT NOT NULL,
    object_id TEXT NOT NULL REFERENCES objects(id),
    PRIMARY KEY (kind, value)
);
CREATE INDEX IF NOT EXISTS idx_aliases_object ON aliases(object_id);

CREATE TABLE IF NOT EXISTS votes (
    voter_id TEXT NOT NULL,
    object_id TEXT NOT NULL REFERENCES objects(id),
    value INTEGER NOT NULL CHECK (value IN (-1, 1)),
    PRIMARY KEY (voter_id, object_id)
);
CREATE INDEX IF NOT EXISTS idx_votes_object ON votes(object_id);

CREATE TABLE IF NOT EXISTS tag_assignments (
    object_id TEXT NOT NULL REFERENCES objects(id),
    tag TEXT NOT NULL,
    count INTEGER NOT NULL CHECK (count > 0),
    PRIMARY KEY (object_id, tag)
);

CREATE TABLE IF NOT EXISTS tag_voters (
    voter_id TEXT NOT NULL,
    object_id TEXT NOT NULL REFERENCES objects(id),
    PRIMARY KEY (voter_id, object_id)
);
CREATE INDEX IF NOT EXISTS idx_tag_voters_object ON tag_voters(object_id);

CREATE TABLE IF NOT EXISTS comments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    object_id TEXT NOT NULL REFERENCES objects(id),
    text TEXT NOT NULL,
    created_at TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_comments_object ON comments(object_id, id);
";

/// Enables foreign keys and creates any missing tables.
pub(super) fn init(conn: &Connection) -> rusqlite::Result<()> {
    conn.pragma_update(None, "foreign_keys", "ON")?;
    conn.execute_batch(SCHEMA)
}
