/// Chat transcript: message types, persistence, and selection derivation
mod selection;
mod store;
mod types;

pub use selection::{selection_from_transcript, SelectionState, SessionKey};
pub use store::{SqliteTranscriptStore, TranscriptStore};
pub use types::{ChatMessage, Sender};

use chrono::TimeZone;

/// Renders the transcript as plain text, one `[timestamp] sender: content`
/// line per message, for the download-history feature.
pub fn export_transcript(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .map(|m| {
            let when = chrono::Utc
                .timestamp_millis_opt(m.timestamp)
                .single()
                .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_else(|| m.timestamp.to_string());
            format!("[{}] {}: {}", when, m.sender.as_str(), m.content)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_formats_one_line_per_message() {
        let messages = vec![
            ChatMessage {
                id: "1".to_string(),
                content: "hello".to_string(),
                sender: Sender::User,
                timestamp: 0,
            },
            ChatMessage {
                id: "2".to_string(),
                content: "hi there".to_string(),
                sender: Sender::System,
                timestamp: 1_000,
            },
        ];
        let text = export_transcript(&messages);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "[1970-01-01 00:00:00] user: hello");
        assert!(lines[1].ends_with("system: hi there"));
    }

    #[test]
    fn test_export_of_empty_transcript_is_empty() {
        assert_eq!(export_transcript(&[]), "");
    }
}
