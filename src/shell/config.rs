use std::net::SocketAddr;
use thiserror::Error;

use crate::shared::core::identity::Identity;

pub const ADDR_VAR: &str = "GREETINGS_ADDR";
pub const INITIAL_GREETING_VAR: &str = "GREETINGS_INITIAL";
pub const OWNER_VAR: &str = "GREETINGS_OWNER";

const DEFAULT_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_INITIAL_GREETING: &str = "Hello, World!";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    pub initial_greeting: String,
    pub owner: Identity,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr: SocketAddr = raw_addr.parse().map_err(|_| ConfigError::Invalid {
            name: ADDR_VAR,
            value: raw_addr.clone(),
        })?;

        // An empty initial greeting is a legitimate value, so only absence falls back.
        let initial_greeting =
            lookup(INITIAL_GREETING_VAR).unwrap_or_else(|| DEFAULT_INITIAL_GREETING.to_string());

        let owner = match lookup(OWNER_VAR) {
            Some(owner) if !owner.trim().is_empty() => Identity::from(owner.trim()),
            Some(owner) => {
                return Err(ConfigError::Invalid {
                    name: OWNER_VAR,
                    value: owner,
                });
            }
            None => return Err(ConfigError::Missing(OWNER_VAR)),
        };

        Ok(Self {
            addr,
            initial_greeting,
            owner,
        })
    }
}
