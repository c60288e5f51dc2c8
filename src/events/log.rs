//! The human-readable game log.
//!
//! Entries are only ever appended. The whole log is cleared when a new hand
//! is dealt. Backed by `im::Vector` so snapshots share storage.

use im::Vector;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameLog {
    entries: Vector<String>,
}

impl GameLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push_back(entry.into());
    }

    pub fn entries(&self) -> impl Iterator<Item = &String> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&String> {
        self.entries.last()
    }

    /// Whether any entry contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|e| e.contains(needle))
    }

    /// Drop every entry. Only done when a new hand starts.
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_only_order() {
        let mut log = GameLog::new();
        log.push("first");
        log.push(String::from("second"));

        assert_eq!(log.len(), 2);
        assert_eq!(log.to_vec(), vec!["first", "second"]);
        assert_eq!(log.last().map(String::as_str), Some("second"));
        assert!(log.contains("sec"));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut log = GameLog::new();
        log.push("a");
        let snapshot = log.clone();
        log.push("b");

        assert_eq!(snapshot.len(), 1);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut log = GameLog::new();
        log.push("a");
        log.clear();
        assert!(log.is_empty());
    }
}
