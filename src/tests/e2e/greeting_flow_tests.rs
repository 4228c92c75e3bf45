// End to end tests through the assembled router.
//
// - Build the store with a fan-out event feed, exactly as the binary does.
// - Drive it over HTTP and GraphQL with explicit caller identities.
// - Assert on the read surface and on what a subscriber observed.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use std::sync::Arc;
use tokio::sync::mpsc;
use tower::ServiceExt;

use crate::modules::greetings::core::events::GreetingEvent;
use crate::modules::greetings::store::OwnedGreetingStore;
use crate::shared::core::identity::Identity;
use crate::shared::infrastructure::event_bus::fan_out::FanOutEventBus;
use crate::shell::caller::CALLER_IDENTITY_HEADER;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::{INITIAL_GREETING, NON_OWNER, OWNER};

struct Harness {
    app: Router,
    events: mpsc::UnboundedReceiver<GreetingEvent>,
}

fn make_harness(initial: &str) -> Harness {
    let store = OwnedGreetingStore::new(
        initial,
        Identity::from(OWNER),
        Arc::new(FanOutEventBus::<GreetingEvent>::default()),
    );
    let events = store.subscribe();
    Harness {
        app: router(AppState::new(store)),
        events,
    }
}

#[fixture]
fn harness() -> Harness {
    make_harness(INITIAL_GREETING)
}

async fn get_greeting(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(Request::get("/greeting").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    json["greeting"].as_str().unwrap().to_string()
}

async fn set_greeting(app: &Router, caller: &str, greeting: &str) -> StatusCode {
    let body = serde_json::json!({ "greeting": greeting }).to_string();
    app.clone()
        .oneshot(
            Request::put("/greeting")
                .header("content-type", "application/json")
                .header(CALLER_IDENTITY_HEADER, caller)
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
        .status()
}

fn drain(events: &mut mpsc::UnboundedReceiver<GreetingEvent>) -> Vec<String> {
    let mut seen = Vec::new();
    while let Ok(event) = events.try_recv() {
        seen.push(event.new_greeting().to_string());
    }
    seen
}

#[rstest]
#[tokio::test]
async fn it_should_set_the_initial_greeting(harness: Harness) {
    assert_eq!(get_greeting(&harness.app).await, "Hello, World!");
}

#[rstest]
#[tokio::test]
async fn it_should_allow_the_owner_to_set_a_new_greeting(harness: Harness) {
    assert_eq!(
        set_greeting(&harness.app, OWNER, "New Greeting").await,
        StatusCode::NO_CONTENT
    );
    assert_eq!(get_greeting(&harness.app).await, "New Greeting");
}

#[rstest]
#[tokio::test]
async fn it_should_not_allow_non_owners_to_set_a_new_greeting(mut harness: Harness) {
    assert_eq!(
        set_greeting(&harness.app, NON_OWNER, "Non-owner Greeting").await,
        StatusCode::FORBIDDEN
    );
    assert_eq!(get_greeting(&harness.app).await, "Hello, World!");
    assert!(drain(&mut harness.events).is_empty());
}

#[rstest]
#[tokio::test]
async fn it_should_emit_an_event_when_the_greeting_is_updated() {
    let mut harness = make_harness("x");
    set_greeting(&harness.app, OWNER, "Updated Greeting").await;
    assert_eq!(drain(&mut harness.events), vec!["Updated Greeting"]);
}

#[rstest]
#[tokio::test]
async fn it_should_allow_the_owner_to_set_a_greeting_after_other_changes() {
    let mut harness = make_harness("x");

    set_greeting(&harness.app, OWNER, "Second Greeting").await;
    assert_eq!(get_greeting(&harness.app).await, "Second Greeting");

    set_greeting(&harness.app, OWNER, "Final Greeting").await;
    assert_eq!(get_greeting(&harness.app).await, "Final Greeting");

    assert_eq!(
        drain(&mut harness.events),
        vec!["Second Greeting", "Final Greeting"]
    );
}

#[rstest]
#[tokio::test]
async fn it_should_share_one_store_between_http_and_graphql(mut harness: Harness) {
    let query = serde_json::json!({
        "query": r#"mutation { setGreeting(greeting: "From GraphQL") }"#
    })
    .to_string();
    let response = harness
        .app
        .clone()
        .oneshot(
            Request::post("/gql")
                .header("content-type", "application/json")
                .header(CALLER_IDENTITY_HEADER, OWNER)
                .body(Body::from(query))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["data"]["setGreeting"], "From GraphQL");

    assert_eq!(get_greeting(&harness.app).await, "From GraphQL");
    assert_eq!(drain(&mut harness.events), vec!["From GraphQL"]);
}
