/// Chat transcript types
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    System,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::System => "system",
        }
    }

    pub fn from_str(s: &str) -> Option<Sender> {
        match s {
            "user" => Some(Sender::User),
            "system" => Some(Sender::System),
            _ => None,
        }
    }
}

/// One entry of the append-only chat transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub content: String,
    pub sender: Sender,
    /// Unix timestamp, milliseconds
    pub timestamp: i64,
}

impl ChatMessage {
    pub fn new(sender: Sender, content: impl Into<String>) -> Self {
        let timestamp = chrono::Utc::now().timestamp_millis();
        Self {
            id: next_message_id(timestamp),
            content: content.into(),
            sender,
            timestamp,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Sender::User, content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Sender::System, content)
    }
}

// Timestamp plus a short random suffix; two messages appended within the
// same millisecond must not collide.
fn next_message_id(timestamp: i64) -> String {
    let suffix: u32 = rand::thread_rng().gen();
    format!("{timestamp:x}-{suffix:08x}")
}
