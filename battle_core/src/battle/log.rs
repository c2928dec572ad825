//! BattleLog - append-only record of what happened

use serde::{Deserialize, Serialize};

/// Ordered, append-only list of human-readable battle events
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BattleLog {
    entries: Vec<String>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the end of the log
    pub fn append(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    /// Every entry, oldest first
    pub fn all(&self) -> &[String] {
        &self.entries
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let mut log = BattleLog::new();
        log.append("Charmander used Ember!");
        log.append(String::from("Bulbasaur fainted!"));

        assert_eq!(log.len(), 2);
        assert_eq!(log.all()[0], "Charmander used Ember!");
        assert_eq!(log.last(), Some("Bulbasaur fainted!"));
    }

    #[test]
    fn test_empty_log() {
        let log = BattleLog::new();
        assert!(log.is_empty());
        assert!(log.last().is_none());
        assert_eq!(log.iter().count(), 0);
    }
}
