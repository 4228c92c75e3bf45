use crate::shared::infrastructure::event_bus::{EventPublisher, PublishError};
use std::sync::{Mutex, PoisonError};
use tokio::sync::mpsc;

/// Fan-out event feed with one unbounded queue per subscriber.
///
/// Every receiver obtained from [`FanOutEventBus::subscribe`] gets each event
/// published after it attached, in publish order. Sending never waits on a slow
/// receiver and never drops an event for a live one. Receivers that were
/// dropped are pruned on the next publish.
pub struct FanOutEventBus<Event: Clone + Send + Sync + 'static> {
    subscribers: Mutex<Vec<mpsc::UnboundedSender<Event>>>,
}

impl<Event: Clone + Send + Sync + 'static> FanOutEventBus<Event> {
    pub fn new() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
        }
    }

    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<Event> {
        let (sender, receiver) = mpsc::unbounded_channel();
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(sender);
        receiver
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|sender| !sender.is_closed())
            .count()
    }
}

impl<Event: Clone + Send + Sync + 'static> Default for FanOutEventBus<Event> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Event> EventPublisher<Event> for FanOutEventBus<Event>
where
    Event: Clone + Send + Sync + 'static,
{
    fn publish(&self, event: &Event) -> Result<(), PublishError> {
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        // A failed send means the receiver is gone; forget it.
        subscribers.retain(|sender| sender.send(event.clone()).is_ok());
        tracing::trace!(subscribers = subscribers.len(), "event fanned out");
        Ok(())
    }
}
