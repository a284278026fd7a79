//! Append-only console log

use crate::core::types::{EntryId, LogKind};

/// One timestamped, kind-tagged message shown in the terminal view
///
/// Immutable once created; never individually deleted (a bulk clear
/// empties the whole log).
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: EntryId,
    /// Capture-time wall clock, already formatted for display
    pub timestamp: String,
    pub message: String,
    pub kind: LogKind,
}

impl LogEntry {
    pub fn new(message: impl Into<String>, kind: LogKind) -> Self {
        Self {
            id: EntryId::new(),
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
            message: message.into(),
            kind,
        }
    }
}

/// Ordered sequence of log entries; insertion order is display order
///
/// Unbounded: there is no eviction. Growth is bounded in practice by the
/// session's lifetime, and "clear" resets it.
#[derive(Debug, Default)]
pub struct ConsoleLog {
    entries: Vec<LogEntry>,
}

impl ConsoleLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry; entries are never reordered afterwards
    pub fn push(&mut self, message: impl Into<String>, kind: LogKind) {
        self.entries.push(LogEntry::new(message, kind));
    }

    /// Empty the log (the "clear" command)
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut log = ConsoleLog::new();
        log.push("first", LogKind::Info);
        log.push("second", LogKind::Error);

        let messages: Vec<&str> = log.entries().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn test_entry_ids_are_unique() {
        let mut log = ConsoleLog::new();
        log.push("a", LogKind::Info);
        log.push("a", LogKind::Info);
        assert_ne!(log.entries()[0].id, log.entries()[1].id);
    }

    #[test]
    fn test_clear_empties() {
        let mut log = ConsoleLog::new();
        log.push("a", LogKind::Info);
        log.clear();
        assert!(log.is_empty());
    }
}
