use crate::modules::greetings::core::events::v1::greeting_updated::GreetingUpdatedV1;
use crate::shared::core::identity::Identity;

pub fn make_greeting_updated_v1_event() -> GreetingUpdatedV1 {
    GreetingUpdatedV1 {
        new_greeting: "Updated Greeting".to_string(),
        updated_by: Identity::from("owner-fixed-0001"),
        updated_at: 1_700_000_000_000,
    }
}
