// Root event enumeration for the greeting store.
//
// Versioning and evolution
// - Prefer additive changes. If a breaking change is needed, add a new version and a new variant.

pub mod v1 {
    pub mod greeting_updated;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum GreetingEvent {
    GreetingUpdatedV1(v1::greeting_updated::GreetingUpdatedV1),
}

impl GreetingEvent {
    pub fn new_greeting(&self) -> &str {
        match self {
            GreetingEvent::GreetingUpdatedV1(e) => &e.new_greeting,
        }
    }
}
