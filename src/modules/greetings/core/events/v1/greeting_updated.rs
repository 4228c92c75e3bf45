// Event payload: GreetingUpdatedV1.
//
// Emitted exactly once per accepted write, including writes that store the value already held.
//
// Timestamps
// - updated_at is epoch milliseconds.

use crate::shared::core::identity::Identity;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct GreetingUpdatedV1 {
    pub new_greeting: String,
    pub updated_by: Identity,
    pub updated_at: i64,
}
