use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;

use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct GreetingResponse {
    pub greeting: String,
}

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    Json(GreetingResponse {
        greeting: state.store.greeting(),
    })
}
