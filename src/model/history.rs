use super::{Amount, TransactionKind};

use chrono::{DateTime, Local};

// One successful balance mutation, as recorded at the moment it happened.
// Entries are never edited once recorded.
#[derive(Debug, PartialEq, Clone)]
pub struct HistoryEntry {
    kind: TransactionKind,
    amount: Amount,
    timestamp: DateTime<Local>,
}

impl HistoryEntry {
    pub fn new(kind: TransactionKind, amount: Amount, timestamp: DateTime<Local>) -> Self {
        Self {
            kind,
            amount,
            timestamp,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }
}

// Append-only log of an account's successful transactions, oldest first.
// Unbounded for the session lifetime; entries are never removed or
// reordered.
#[derive(Debug, PartialEq, Clone)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn count_of_kind(&self, kind: TransactionKind) -> usize {
        self.entries.iter().filter(|e| e.kind() == kind).count()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
