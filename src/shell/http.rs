use axum::{Extension, Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::modules::greetings::use_cases::get_greeting::inbound::http as get_http;
use crate::modules::greetings::use_cases::set_greeting::inbound::http as set_http;
use crate::shell::graphql;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = graphql::schema(state.clone());
    Router::new()
        .route("/greeting", get(get_http::handle).put(set_http::handle))
        .route("/gql", get(graphql::graphiql).post(graphql::graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
