//! Scrolling status log shown beside the board.

use std::collections::VecDeque;

/// Newest-first list of status lines with a fixed capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLog {
    entries: VecDeque<String>,
    capacity: usize,
}

impl StatusLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Add a line at the top. Empty lines are dropped; the oldest line falls
    /// off once the log is full.
    pub fn push(&mut self, line: impl Into<String>) {
        let line = line.into();
        if line.is_empty() {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_back();
        }
        self.entries.push_front(line);
    }

    /// Lines, newest first
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(String::as_str)
    }

    pub fn newest(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
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
    fn newest_first() {
        let mut log = StatusLog::new(8);
        log.push("one");
        log.push("two");
        assert_eq!(log.iter().collect::<Vec<_>>(), vec!["two", "one"]);
        assert_eq!(log.newest(), Some("two"));
    }

    #[test]
    fn drops_empty_and_oldest() {
        let mut log = StatusLog::new(2);
        log.push("");
        assert!(log.is_empty());
        log.push("a");
        log.push("b");
        log.push("c");
        assert_eq!(log.len(), 2);
        assert_eq!(log.iter().collect::<Vec<_>>(), vec!["c", "b"]);
    }

    #[test]
    fn zero_capacity_keeps_one() {
        let mut log = StatusLog::new(0);
        log.push("x");
        log.push("y");
        assert_eq!(log.iter().collect::<Vec<_>>(), vec!["y"]);
    }
}
