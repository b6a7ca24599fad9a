use std::{sync::Arc, time::Duration};

use crate::{
    model::sport::{Schedule, Sport},
    server::{
        controller::sport::{
            SCHEDULE_NOT_ADDED, SCHEDULE_NOT_REMOVED, SPORT_ALREADY_REGISTERED,
            SPORT_NOT_REGISTERED,
        },
        data::sport::{SportRepository, SportsRepository},
        error::{auth::BASIC_CHALLENGE, AppError},
        model::sport::ScheduleLookup,
        router::router,
        service::{
            auth::CredentialStore,
            dispatch::{DispatchLimits, TaskDispatcher},
            sport::SportsService,
        },
        state::AppState,
    },
};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde_json::{json, Value};
use test_utils::builder::TestBuilder;
use tower::ServiceExt;

mod auth;
mod schedules;

const SOCCER: &str = r#"{"sportName":"soccer","schedules":[]}"#;
const MONDAY_MORNING: &str =
    r#"{"fromHour":{"hour":10,"min":0},"toHour":{"hour":12,"min":0},"day":"MONDAY"}"#;
const FRIDAY_EVENING: &str =
    r#"{"fromHour":{"hour":18,"min":30},"toHour":{"hour":20,"min":0},"day":"FRIDAY"}"#;

/// Response parts the tests assert on.
struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: String,
}

impl TestResponse {
    fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

fn credentials() -> Arc<CredentialStore> {
    Arc::new(CredentialStore::parse("user.alice = secret,admin\nuser.bob = hunter2").unwrap())
}

/// Builds the router over the given repository, wrapped in a session layer on
/// a fresh in-memory database.
async fn build_app(repository: Option<Arc<dyn SportsRepository>>, dispatcher: TaskDispatcher) -> Router {
    let mut test = TestBuilder::new().with_sport_tables().build().await.unwrap();
    let session = test.session_layer().await.unwrap();
    let db = test.db.clone().unwrap();

    let repository =
        repository.unwrap_or_else(|| Arc::new(SportRepository::new(db)) as Arc<dyn SportsRepository>);
    let state = AppState::new(SportsService::new(repository, dispatcher), credentials());

    router(state).layer(session)
}

/// Router backed by the database repository with default dispatch limits.
async fn app() -> Router {
    build_app(None, TaskDispatcher::new(DispatchLimits::default())).await
}

fn basic_auth(user: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:{}", user, password)))
}

/// Request authenticated as alice, with a JSON body when given.
fn request(method: &str, uri: &str, body: Option<&str>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, basic_auth("alice", "secret"));

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}
