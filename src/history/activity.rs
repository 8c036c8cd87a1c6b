//! Append-only trail of catalog activity.

use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    entries: Vec<String>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry: impl Into<String>) {
        let entry = entry.into();
        debug!(%entry, "Activity");
        self.entries.push(entry);
    }

    /// Copies all entries, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.entries.clone()
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
    fn test_record_preserves_order() {
        let mut log = ActivityLog::new();
        log.record("Search query: lap");
        log.record(format!("Deleted item ID: {}", 3));
        assert_eq!(log.entries(), vec!["Search query: lap", "Deleted item ID: 3"]);
        assert_eq!(log.len(), 2);
    }
}
