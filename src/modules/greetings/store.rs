//! The owner-gated greeting store.
//!
//! [`OwnedGreetingStore`] holds one greeting and the identity allowed to change it.
//! Anyone may read. A write runs the pure decision, applies the resulting events
//! and hands them to the event feed, all under one write lock, so concurrent
//! writes are linearized and events leave in commit order.

use crate::modules::greetings::core::events::GreetingEvent;
use crate::modules::greetings::core::evolve::evolve;
use crate::modules::greetings::core::state::GreetingState;
use crate::modules::greetings::use_cases::set_greeting::command::SetGreeting;
use crate::modules::greetings::use_cases::set_greeting::decide::decide_set_greeting;
use crate::modules::greetings::use_cases::set_greeting::decision::{DecideError, Decision};
use crate::shared::core::identity::Identity;
use crate::shared::infrastructure::event_bus::EventPublisher;
use crate::shared::infrastructure::event_bus::fan_out::FanOutEventBus;
use chrono::Utc;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};
use tokio::sync::mpsc;
use uuid::Uuid;

/// The only way a write can fail: the caller is not the owner.
pub type PermissionError = DecideError;

pub struct OwnedGreetingStore<TPublisher>
where
    TPublisher: EventPublisher<GreetingEvent> + 'static,
{
    store_id: Uuid,
    owner: Identity,
    state: RwLock<GreetingState>,
    publisher: Arc<TPublisher>,
}

impl<TPublisher> OwnedGreetingStore<TPublisher>
where
    TPublisher: EventPublisher<GreetingEvent> + 'static,
{
    pub fn new(
        initial_greeting: impl Into<String>,
        owner: Identity,
        publisher: Arc<TPublisher>,
    ) -> Self {
        let store_id = Uuid::now_v7();
        tracing::debug!(%store_id, %owner, "greeting store created");
        Self {
            store_id,
            state: RwLock::new(GreetingState::new(initial_greeting, owner.clone())),
            owner,
            publisher,
        }
    }

    pub fn id(&self) -> Uuid {
        self.store_id
    }

    pub fn owner(&self) -> &Identity {
        &self.owner
    }

    /// Current greeting. Open to every caller and never fails.
    pub fn greeting(&self) -> String {
        let greeting = self.read_state().greeting.clone();
        tracing::debug!(store_id = %self.store_id, "greeting read");
        greeting
    }

    /// Replace the greeting when `caller` is the owner.
    ///
    /// On success exactly one [`GreetingEvent`] has been handed to the publisher
    /// before this returns. A rejected call changes nothing and publishes nothing.
    /// Publisher failures are logged and do not undo the write.
    pub fn set_greeting(
        &self,
        caller: &Identity,
        new_greeting: impl Into<String>,
    ) -> Result<(), PermissionError> {
        let new_greeting = new_greeting.into();
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

        // Stamped under the lock so timestamps never go backwards in commit order.
        let command = SetGreeting {
            caller: caller.clone(),
            new_greeting,
            updated_at: Utc::now().timestamp_millis(),
        };

        match decide_set_greeting(&state, command) {
            Decision::Accepted { events } => {
                *state = events.iter().cloned().fold(state.clone(), evolve);
                tracing::info!(store_id = %self.store_id, %caller, "greeting updated");

                for event in &events {
                    if let Err(error) = self.publisher.publish(event) {
                        tracing::warn!(
                            store_id = %self.store_id,
                            %error,
                            "greeting event could not be published"
                        );
                    }
                }
                Ok(())
            }
            Decision::Rejected { reason } => {
                tracing::warn!(store_id = %self.store_id, %caller, %reason, "greeting update rejected");
                Err(reason)
            }
        }
    }

    fn read_state(&self) -> RwLockReadGuard<'_, GreetingState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl OwnedGreetingStore<FanOutEventBus<GreetingEvent>> {
    /// Attach to the event feed. The receiver sees every event published from now on.
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<GreetingEvent> {
        self.publisher.subscribe()
    }
}
