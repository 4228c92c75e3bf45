use crate::modules::greetings::core::events::GreetingEvent;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Ownable: caller is not the owner")]
    NotOwner,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { events: Vec<GreetingEvent> },
    Rejected { reason: DecideError },
}
