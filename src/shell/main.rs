use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use greetings::modules::greetings::core::events::GreetingEvent;
use greetings::modules::greetings::store::OwnedGreetingStore;
use greetings::shared::infrastructure::event_bus::fan_out::FanOutEventBus;
use greetings::shell::config::Config;
use greetings::shell::http::router;
use greetings::shell::state::AppState;
use greetings::shell::workers::spawn_event_logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;

    let event_bus = Arc::new(FanOutEventBus::<GreetingEvent>::new());
    let store = OwnedGreetingStore::new(config.initial_greeting, config.owner, event_bus);
    let _event_logger = spawn_event_logger(store.subscribe());

    let app = router(AppState::new(store));

    tracing::info!("HTTP endpoint: http://{}/greeting", config.addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.addr);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
