use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::modules::greetings::core::events::GreetingEvent;

/// Logs every greeting change seen on the event feed.
///
/// Runs until the feed closes and yields the number of events it logged.
pub fn spawn_event_logger(mut receiver: mpsc::UnboundedReceiver<GreetingEvent>) -> JoinHandle<u64> {
    tokio::spawn(async move {
        let mut logged = 0u64;
        while let Some(GreetingEvent::GreetingUpdatedV1(event)) = receiver.recv().await {
            logged += 1;
            tracing::info!(
                new_greeting = %event.new_greeting,
                updated_by = %event.updated_by,
                updated_at = event.updated_at,
                "greeting changed"
            );
        }
        tracing::debug!(logged, "event feed closed");
        logged
    })
}
