use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shell::caller::caller_from_headers;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SetGreetingBody {
    pub greeting: String,
}

pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<SetGreetingBody>, JsonRejection>,
) -> impl IntoResponse {
    let Some(caller) = caller_from_headers(&headers) else {
        return StatusCode::UNAUTHORIZED.into_response();
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.store.set_greeting(&caller, body.greeting) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(reason) => (
            StatusCode::FORBIDDEN,
            Json(serde_json::json!({ "error": reason.to_string() })),
        )
            .into_response(),
    }
}
