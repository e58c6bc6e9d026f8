//! Single-owner event queue feeding a session.

use std::collections::VecDeque;

use rand::Rng;

use super::session::GameSession;
use super::types::{SessionEvent, SessionUpdate};

/// Serializes input, frame ticks and second ticks into one ordered stream.
///
/// The host pushes events as it observes them and drains the queue once per
/// loop iteration, so the session is only ever mutated from one place.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<SessionEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: SessionEvent) {
        self.events.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Feed queued events to `session` in order. Once the session stops
    /// being active (time up or cancelled) the rest of the queue is dropped.
    pub fn dispatch<R: Rng>(&mut self, session: &mut GameSession<R>) -> Vec<SessionUpdate> {
        let mut updates = Vec::new();
        while let Some(event) = self.events.pop_front() {
            if let Some(update) = session.handle(event) {
                updates.push(update);
            }
            if !session.is_active() {
                if !self.events.is_empty() {
                    log::debug!("discarding {} queued events", self.events.len());
                }
                self.events.clear();
                break;
            }
        }
        updates
    }
}
