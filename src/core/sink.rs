//! Event sink handed to hooks and actions.

use super::event::Event;
use std::collections::VecDeque;

/// FIFO buffer through which hooks raise events mid-transition.
///
/// Every hook and action receives `&mut EventSink<E>` as its final argument.
/// Events posted to the sink are not handled synchronously: when the current
/// hook sequence finishes, the owning instance appends them to its event
/// queue and drains them strictly after the in-flight transition completes,
/// before the top-level `handle` or `start` call returns.
///
/// # Example
///
/// ```rust
/// use cascade::EventSink;
///
/// let mut sink: EventSink<String> = EventSink::new();
/// sink.post("event2".to_string());
/// sink.post("event3".to_string());
/// assert_eq!(sink.len(), 2);
/// ```
#[derive(Debug)]
pub struct EventSink<E: Event> {
    events: VecDeque<E>,
}

impl<E: Event> EventSink<E> {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }

    /// Post an event for deferred dispatch on the owning instance.
    pub fn post(&mut self, event: E) {
        self.events.push_back(event);
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True if no events have been posted.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub(crate) fn take(&mut self) -> VecDeque<E> {
        std::mem::take(&mut self.events)
    }
}

impl<E: Event> Default for EventSink<E> {
    fn default() -> Self {
        Self::new()
    }
}
