//! Transition history tracking.
//!
//! Each live instance keeps an immutable log of the transitions it has
//! performed. Internal and self-transitions are recorded with `from == to`.

use super::event::Event;
use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single fired transition.
///
/// # Example
///
/// ```rust
/// use cascade::TransitionRecord;
/// use chrono::Utc;
///
/// let record = TransitionRecord {
///     from: "red".to_string(),
///     to: "green".to_string(),
///     event: "go".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.event, "go");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<S: State, E: Event> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// The event that triggered the transition
    pub event: E,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of fired transitions.
///
/// History is immutable - the `record` method returns a new history with the
/// record appended, leaving the original untouched.
///
/// # Example
///
/// ```rust
/// use cascade::{TransitionHistory, TransitionRecord};
/// use chrono::Utc;
///
/// let history: TransitionHistory<String, String> = TransitionHistory::new();
/// let history = history.record(TransitionRecord {
///     from: "state1".to_string(),
///     to: "state2".to_string(),
///     event: "event1".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.records().len(), 1);
/// assert_eq!(history.get_path(), vec!["state1", "state2"]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionHistory<S: State, E: Event> {
    records: Vec<TransitionRecord<S, E>>,
}

impl<S: State, E: Event> Default for TransitionHistory<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event> TransitionHistory<S, E> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, record: TransitionRecord<S, E>) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Get all records in firing order.
    pub fn records(&self) -> &[TransitionRecord<S, E>] {
        &self.records
    }

    /// Get the path of states traversed: the first record's `from` state,
    /// then the `to` state of every record.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Duration between the first and last recorded transition.
    ///
    /// Returns `None` if no transitions have been recorded.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            last.timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok()
        } else {
            None
        }
    }

    /// Serialize the history to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
