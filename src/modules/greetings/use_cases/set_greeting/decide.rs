// Pure decision function for replacing the greeting.
//
// - Only the owner may write. The comparison is exact equality on Identity.
// - Any greeting is accepted, including the empty string and the value already stored.
// - Never performs input or output.

use crate::modules::greetings::core::events::GreetingEvent;
use crate::modules::greetings::core::events::v1::greeting_updated::GreetingUpdatedV1;
use crate::modules::greetings::core::state::GreetingState;
use crate::modules::greetings::use_cases::set_greeting::command::SetGreeting;
use crate::modules::greetings::use_cases::set_greeting::decision::{DecideError, Decision};

pub fn decide_set_greeting(state: &GreetingState, command: SetGreeting) -> Decision {
    if command.caller != state.owner {
        return Decision::Rejected {
            reason: DecideError::NotOwner,
        };
    }
    Decision::Accepted {
        events: vec![GreetingEvent::GreetingUpdatedV1(GreetingUpdatedV1 {
            new_greeting: command.new_greeting,
            updated_by: command.caller,
            updated_at: command.updated_at,
        })],
    }
}
