// Event feed port.
//
// Purpose
// - Describe how committed domain events leave the core, without tying the core to a transport.
//
// Boundaries
// - Publishing is synchronous and must not block. Implementations buffer, never wait and never drop an event for a live subscriber.
// - A failed publish never undoes the state change that produced the event.

pub mod fan_out;
pub mod in_memory;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PublishError {
    #[error("backend error: {0}")]
    Backend(String),
}

pub trait EventPublisher<Event: Clone + Send + Sync + 'static>: Send + Sync {
    fn publish(&self, event: &Event) -> Result<(), PublishError>;
}
