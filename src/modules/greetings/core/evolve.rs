use crate::modules::greetings::core::events::GreetingEvent;
use crate::modules::greetings::core::state::GreetingState;

pub fn evolve(state: GreetingState, event: GreetingEvent) -> GreetingState {
    match event {
        GreetingEvent::GreetingUpdatedV1(e) => GreetingState {
            greeting: e.new_greeting,
            ..state
        },
    }
}
