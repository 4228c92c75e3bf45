// Composition root for the greetings service.
//
// Responsibilities:
// - Read config from environment.
// - Map transport details (headers) onto explicit caller identities.
// - Wire the store and its event feed into the HTTP and GraphQL surfaces.
// - Spawn background workers that consume the event feed.

pub mod caller;
pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
pub mod workers;
