// Command data type for replacing the greeting.
//
// - caller is supplied by the host on every call; the core never infers it.
// - updated_at is stamped by the store, in epoch milliseconds.

use crate::shared::core::identity::Identity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetGreeting {
    pub caller: Identity,
    pub new_greeting: String,
    pub updated_at: i64,
}
