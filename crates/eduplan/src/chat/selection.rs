//! Selection sets: explicit per-session toggles plus auto-selection derived
//! from recommendation text in the transcript.

use crate::catalog::{extract_codes, CourseCatalog};
use crate::chat::{ChatMessage, Sender};
use dashmap::DashMap;
use sha2::{Digest, Sha256};
use std::collections::HashSet;

/// A key identifying one dashboard session.
///
/// Client identifiers are hashed so raw session tokens are never stored.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct SessionKey(String);

impl SessionKey {
    pub fn from_client_id(raw: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(raw.as_bytes());
        let digest = hasher.finalize();
        let hash = digest[..16]
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect::<String>();
        Self(hash)
    }

    /// Shared key for clients that don't identify themselves.
    pub fn anonymous() -> Self {
        Self::from_client_id("anonymous")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}...", &self.0[..8.min(self.0.len())])
    }
}

/// In-memory explicit selections, keyed per session. Never persisted; a
/// selection set lives and dies with the process.
#[derive(Default)]
pub struct SelectionState {
    sessions: DashMap<SessionKey, HashSet<i64>>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles a course in the session's selection. Returns true when the
    /// course is selected after the call.
    pub fn toggle(&self, key: &SessionKey, class_id: i64) -> bool {
        let mut entry = self.sessions.entry(key.clone()).or_default();
        if entry.insert(class_id) {
            true
        } else {
            entry.remove(&class_id);
            false
        }
    }

    /// The session's explicit selection (a snapshot).
    pub fn selected(&self, key: &SessionKey) -> HashSet<i64> {
        self.sessions
            .get(key)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    pub fn clear(&self, key: &SessionKey) {
        self.sessions.remove(key);
    }
}

/// Derives the auto-selected course ids from a transcript.
///
/// Only system messages are scanned; a transcript with zero system messages
/// yields an empty set regardless of what the user typed. Codes are matched
/// against the catalog by normalized form.
pub fn selection_from_transcript(
    messages: &[ChatMessage],
    catalog: &CourseCatalog,
) -> HashSet<i64> {
    let mut selected = HashSet::new();

    for message in messages.iter().filter(|m| m.sender == Sender::System) {
        for code in extract_codes(&message.content) {
            if let Some(course) = catalog.find_by_code(&code) {
                selected.insert(course.class_id);
            }
        }
    }

    selected
}
