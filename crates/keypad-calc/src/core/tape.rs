//! Committed-calculation tape
//!
//! Records every committed evaluation (a second operator press or an equals
//! press), not raw keystrokes. Bounded so a long-lived widget cannot grow
//! without limit.

use crate::core::operator::Operator;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// One committed evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TapeEntry {
    /// Left operand (the accumulator at commit time)
    pub lhs: f64,
    /// The operator that was pending
    pub op: Operator,
    /// Right operand (the display at commit time)
    pub rhs: f64,
    /// The committed result
    pub result: f64,
}

impl TapeEntry {
    /// Creates a new tape entry
    #[must_use]
    pub fn new(lhs: f64, op: Operator, rhs: f64, result: f64) -> Self {
        Self {
            lhs,
            op,
            rhs,
            result,
        }
    }

    /// Renders the entry the way the widget would show it, e.g. `5 + 3 = 8`
    #[must_use]
    pub fn render(&self) -> String {
        format!("{} {} {} = {}", self.lhs, self.op, self.rhs, self.result)
    }
}

/// Bounded tape of committed evaluations
#[derive(Debug, Clone, PartialEq)]
pub struct Tape {
    entries: VecDeque<TapeEntry>,
    max_entries: usize,
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

impl Tape {
    /// Default maximum tape length
    pub const DEFAULT_MAX_ENTRIES: usize = 100;

    /// Creates an empty tape with the default capacity
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries: Self::DEFAULT_MAX_ENTRIES,
        }
    }

    /// Creates an empty tape with a custom maximum length
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    /// Appends an entry, evicting the oldest when full
    pub fn push(&mut self, entry: TapeEntry) {
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Records a committed evaluation
    pub fn record(&mut self, lhs: f64, op: Operator, rhs: f64, result: f64) {
        self.push(TapeEntry::new(lhs, op, rhs, result));
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the tape is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of entries
    #[must_use]
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Removes all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates oldest first
    pub fn iter(&self) -> impl Iterator<Item = &TapeEntry> {
        self.entries.iter()
    }

    /// Iterates newest first
    pub fn iter_rev(&self) -> impl Iterator<Item = &TapeEntry> {
        self.entries.iter().rev()
    }

    /// Returns the most recent entry
    #[must_use]
    pub fn last(&self) -> Option<&TapeEntry> {
        self.entries.back()
    }

    /// Returns the entry at the given index (0 = oldest)
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TapeEntry> {
        self.entries.get(index)
    }

    /// Serializes the tape entries to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries.iter().collect::<Vec<_>>())
    }

    /// Rebuilds a tape from JSON produced by [`Tape::to_json`]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<TapeEntry> = serde_json::from_str(json)?;
        let mut tape = Self::new();
        for entry in entries {
            tape.push(entry);
        }
        Ok(tape)
    }

    /// Renders the whole tape, one entry per line
    #[must_use]
    pub fn render_all(&self) -> String {
        self.entries
            .iter()
            .map(TapeEntry::render)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
