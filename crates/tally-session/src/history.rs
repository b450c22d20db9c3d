//! Bounded, newest-first log of committed calculations.

use std::collections::VecDeque;

use chrono::Local;
use serde::Serialize;

/// One committed calculation: the raw expression text, the formatted result
/// string, and the wall-clock time it was committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub expression: String,
    pub result: String,
    pub time: String,
}

/// Append-only ledger with a fixed capacity; index 0 is the most recent
/// entry, and the oldest entry is dropped once the capacity is exceeded.
#[derive(Debug, Clone)]
pub struct HistoryLedger {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl HistoryLedger {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(64)),
            capacity,
        }
    }

    /// Prepend a committed calculation, stamped with the current local time.
    pub fn record(&mut self, expression: String, result: String) {
        self.entries.push_front(HistoryEntry {
            expression,
            result,
            time: Local::now().format("%H:%M:%S").to_string(),
        });
        while self.entries.len() > self.capacity {
            self.entries.pop_back();
        }
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
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
