use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

use crate::player::{Outcome, OutcomeKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub elapsed: Duration,
    pub kind: OutcomeKind,
    pub message: String,
}

impl LogEntry {
    /// `[mm:ss]` since the log was created.
    pub fn timestamp(&self) -> String {
        let secs = self.elapsed.as_secs();
        format!("[{:02}:{:02}]", secs / 60, secs % 60)
    }
}

/// Append-only record of operation results for the current session.
#[derive(Debug)]
pub struct ActionLog {
    started: Instant,
    capacity: usize,
    entries: VecDeque<LogEntry>,
}

impl ActionLog {
    /// `capacity` of 0 keeps every entry.
    pub fn new(capacity: usize) -> Self {
        Self {
            started: Instant::now(),
            capacity,
            entries: VecDeque::new(),
        }
    }

    pub fn push(&mut self, kind: OutcomeKind, message: impl Into<String>) {
        if self.capacity > 0 && self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            elapsed: self.started.elapsed(),
            kind,
            message: message.into(),
        });
    }

    pub fn record(&mut self, outcome: &Outcome) {
        self.push(outcome.kind(), outcome.message());
    }

    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &LogEntry> + ExactSizeIterator {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for ActionLog {
    fn default() -> Self {
        Self::new(0)
    }
}
