use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;

/// A committed state transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionRecord<S, E> {
    /// Monotonic position of this transition within its workflow, from 1
    pub sort_key: u64,
    pub from_state: S,
    pub to_state: S,
    pub event: E,
    pub created_at: DateTime<Utc>,
}

impl<S: Serialize, E: Serialize> TransitionRecord<S, E> {
    /// Render the record as JSON for structured logging
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// Bounded in-memory log of committed transitions
///
/// Only transitions that changed state are recorded; no-ops and rejected
/// calls leave the history untouched. When `limit` records are held the
/// oldest one is dropped first. A limit of zero disables recording, though
/// sort keys keep advancing.
#[derive(Debug, Clone)]
pub struct TransitionHistory<S, E> {
    records: VecDeque<TransitionRecord<S, E>>,
    limit: usize,
    next_sort_key: u64,
}

impl<S: Clone, E: Clone> TransitionHistory<S, E> {
    pub fn new(limit: usize) -> Self {
        Self {
            records: VecDeque::new(),
            limit,
            next_sort_key: 1,
        }
    }

    /// Record a transition and return the stored record
    pub fn record(&mut self, from_state: S, to_state: S, event: E) -> TransitionRecord<S, E> {
        let record = TransitionRecord {
            sort_key: self.next_sort_key,
            from_state,
            to_state,
            event,
            created_at: Utc::now(),
        };
        self.next_sort_key += 1;

        if self.limit > 0 {
            if self.records.len() == self.limit {
                self.records.pop_front();
            }
            self.records.push_back(record.clone());
        }

        record
    }

    /// Most recent transition still held
    pub fn latest(&self) -> Option<&TransitionRecord<S, E>> {
        self.records.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TransitionRecord<S, E>> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Total number of transitions ever recorded, including evicted ones
    pub fn total_recorded(&self) -> u64 {
        self.next_sort_key - 1
    }
}
