// Shared test fixtures: command builders and canned events.

pub mod commands {
    pub mod set_greeting;
}

pub mod events {
    pub mod greeting_updated_v1;
}

pub const OWNER: &str = "owner-fixed-0001";
pub const NON_OWNER: &str = "addr1";
pub const INITIAL_GREETING: &str = "Hello, World!";
