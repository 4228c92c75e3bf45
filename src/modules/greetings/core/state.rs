use crate::shared::core::identity::Identity;

/// Folded state of a greeting store.
///
/// `owner` is fixed when the state is created. Only `greeting` moves as events are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingState {
    pub greeting: String,
    pub owner: Identity,
}

impl GreetingState {
    pub fn new(greeting: impl Into<String>, owner: Identity) -> Self {
        Self {
            greeting: greeting.into(),
            owner,
        }
    }
}
