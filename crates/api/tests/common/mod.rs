#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use onboard_api::config::ServerConfig;
use onboard_api::router::build_app_router;
use onboard_api::state::AppState;
use onboard_core::onboarding::ValidationClock;
use onboard_delivery::OnboardingSubmitter;

/// Clock used by every test app; fixed to UTC so tests can compute "today"
/// the same way the server does.
pub const TEST_CLOCK: ValidationClock = ValidationClock::Utc;

/// Build a test `ServerConfig` with safe defaults pointing at `onboard_url`.
pub fn test_config(onboard_url: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        onboard_url: onboard_url.to_string(),
        submit_timeout_secs: 5,
        validation_clock: TEST_CLOCK,
    }
}

/// Build the full application router, with the production middleware stack,
/// submitting to `onboard_url`.
pub fn build_test_app(onboard_url: &str) -> Router {
    let config = test_config(onboard_url);
    let submitter = OnboardingSubmitter::new(&config.onboard_url, std::time::Duration::from_secs(5))
        .expect("test endpoint should be a valid URL");

    let state = AppState {
        config: Arc::new(config.clone()),
        submitter: Arc::new(submitter),
    };
    build_app_router(state, &config)
}

/// A fake intake endpoint running on an ephemeral port.
pub struct Intake {
    pub url: String,
    pub received: Arc<Mutex<Vec<Value>>>,
}

impl Intake {
    pub fn received(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }
}

/// Start a fake intake endpoint that answers every POST with `status`.
pub async fn spawn_intake(status: StatusCode) -> Intake {
    let received: Arc<Mutex<Vec<Value>>> = Arc::default();
    let app = Router::new()
        .route(
            "/intake",
            post(
                move |State(seen): State<Arc<Mutex<Vec<Value>>>>, Json(body): Json<Value>| async move {
                    seen.lock().unwrap().push(body);
                    status
                },
            ),
        )
        .with_state(Arc::clone(&received));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Intake {
        url: format!("http://{addr}/intake"),
        received,
    }
}

/// An address nothing listens on.
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/intake")
}

/// Today's date as the test app sees it.
pub fn today() -> NaiveDate {
    TEST_CLOCK.today()
}

/// The canonical valid submission, starting today.
pub fn valid_payload() -> Value {
    json!({
        "fullName": "Ada Lovelace",
        "email": "ada@example.com",
        "companyName": "Analytical Engines Ltd",
        "services": ["UI/UX", "Web Dev"],
        "budgetUsd": 50000,
        "projectStartDate": today().format("%Y-%m-%d").to_string(),
        "acceptTerms": true,
    })
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: String) -> Response<Body> {
    app.oneshot(
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
