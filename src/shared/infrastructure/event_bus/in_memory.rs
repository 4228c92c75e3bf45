// In memory implementation of the EventPublisher port.
//
// Purpose
// - Support tests that need to inspect exactly which events a write produced.
//
// Responsibilities
// - Record published events in order.
// - Simulate a failing subscriber when toggled offline.

use crate::shared::infrastructure::event_bus::{EventPublisher, PublishError};
use std::sync::{Mutex, PoisonError};

#[derive(Default)]
pub struct InMemoryEventLog<Event> {
    events: Mutex<Vec<Event>>,
    is_offline: bool,
}

impl<Event: Clone> InMemoryEventLog<Event> {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn events(&self) -> Vec<Event> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl<Event> EventPublisher<Event> for InMemoryEventLog<Event>
where
    Event: Clone + Send + Sync + 'static,
{
    fn publish(&self, event: &Event) -> Result<(), PublishError> {
        if self.is_offline {
            return Err(PublishError::Backend("Event log offline".into()));
        }
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
        Ok(())
    }
}
