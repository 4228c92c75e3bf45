use crate::modules::greetings::core::events::GreetingEvent;
use crate::modules::greetings::store::OwnedGreetingStore;
use crate::shared::infrastructure::event_bus::fan_out::FanOutEventBus;
use std::sync::Arc;

pub type GreetingStore = OwnedGreetingStore<FanOutEventBus<GreetingEvent>>;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<GreetingStore>,
}

impl AppState {
    pub fn new(store: GreetingStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
