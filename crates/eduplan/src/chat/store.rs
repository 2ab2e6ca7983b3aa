//! Transcript persistence.
//!
//! The transcript lives behind a narrow interface (load-all, replace-all,
//! clear) so everything above it stays a pure function of its inputs. The
//! SQLite implementation mirrors how the rest of the data layer manages a
//! connection: one `Mutex<Connection>` with the schema applied at open.

use super::types::{ChatMessage, Sender};
use rusqlite::Connection;
use std::sync::Mutex;
use tracing::warn;

const SCHEMA_SQL: &str = include_str!("../../../../sql/init_transcript.sql");

/// Narrow persistence interface for the chat transcript.
pub trait TranscriptStore: Send + Sync {
    /// Reads the full transcript in insertion order.
    fn load_all(&self) -> anyhow::Result<Vec<ChatMessage>>;

    /// Rewrites the transcript wholesale.
    fn replace_all(&self, messages: &[ChatMessage]) -> anyhow::Result<()>;

    /// Deletes the transcript.
    fn clear(&self) -> anyhow::Result<()>;

    /// Appends one message. Composed from the narrow operations; a backend
    /// may override it with something atomic.
    fn append(&self, message: ChatMessage) -> anyhow::Result<()> {
        let mut all = self.load_all()?;
        all.push(message);
        self.replace_all(&all)
    }
}

/// SQLite-backed transcript store.
pub struct SqliteTranscriptStore {
    db: Mutex<Connection>,
}

impl SqliteTranscriptStore {
    /// Opens (or creates) the transcript database and applies the schema.
    pub fn new(db_path: &str) -> anyhow::Result<Self> {
        let conn = Connection::open(db_path)?;
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(Self {
            db: Mutex::new(conn),
        })
    }

    /// In-memory store, used by tests.
    pub fn in_memory() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(Self {
            db: Mutex::new(conn),
        })
    }
}

impl TranscriptStore for SqliteTranscriptStore {
    fn load_all(&self) -> anyhow::Result<Vec<ChatMessage>> {
        let db = self.db.lock().unwrap();
        let mut stmt =
            db.prepare("SELECT id, content, sender, timestamp FROM messages ORDER BY rowid")?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, i64>(3)?,
            ))
        })?;

        let mut messages = Vec::new();
        for row in rows {
            let (id, content, sender_raw, timestamp) = row?;
            // Rows with an unrecognized sender tag are dropped, not fatal.
            match Sender::from_str(&sender_raw) {
                Some(sender) => messages.push(ChatMessage {
                    id,
                    content,
                    sender,
                    timestamp,
                }),
                None => {
                    warn!(id = %id, sender = %sender_raw, "Dropping transcript row with unknown sender");
                }
            }
        }

        Ok(messages)
    }

    fn replace_all(&self, messages: &[ChatMessage]) -> anyhow::Result<()> {
        let mut db = self.db.lock().unwrap();
        let tx = db.transaction()?;
        tx.execute("DELETE FROM messages", [])?;
        for message in messages {
            tx.execute(
                "INSERT INTO messages (id, content, sender, timestamp) VALUES (?1, ?2, ?3, ?4)",
                (
                    &message.id,
                    &message.content,
                    message.sender.as_str(),
                    message.timestamp,
                ),
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    fn clear(&self) -> anyhow::Result<()> {
        let db = self.db.lock().unwrap();
        db.execute("DELETE FROM messages", [])?;
        Ok(())
    }

    fn append(&self, message: ChatMessage) -> anyhow::Result<()> {
        let db = self.db.lock().unwrap();
        db.execute(
            "INSERT INTO messages (id, content, sender, timestamp) VALUES (?1, ?2, ?3, ?4)",
            (
                &message.id,
                &message.content,
                message.sender.as_str(),
                message.timestamp,
            ),
        )?;
        Ok(())
    }
}
