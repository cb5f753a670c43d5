//! Shared helpers for API integration tests.
//!
//! Rebuilds the production middleware stack around in-memory store and
//! notifier fakes, so the full request flow (routing, extraction, handler,
//! error mapping) runs without a live MongoDB or SMTP server.

use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, Request, Response};
use axum::Router;
use bson::oid::ObjectId;
use http_body_util::BodyExt;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use intake_api::routes;
use intake_api::state::AppState;
use intake_db::models::project::{ProjectSubmission, StoredProject};
use intake_db::{ProjectStore, StoreError};
use intake_mailer::{AdminNotifier, EmailError};

// ---------------------------------------------------------------------------
// Fakes
// ---------------------------------------------------------------------------

/// In-memory `ProjectStore` that records every stored submission.
#[derive(Default)]
pub struct InMemoryStore {
    pub projects: Mutex<Vec<StoredProject>>,
}

#[async_trait::async_trait]
impl ProjectStore for InMemoryStore {
    async fn create_project(
        &self,
        submission: &ProjectSubmission,
    ) -> Result<ObjectId, StoreError> {
        let id = ObjectId::new();
        self.projects.lock().unwrap().push(StoredProject {
            id,
            submission: submission.clone(),
        });
        Ok(id)
    }

    async fn list_projects(&self, limit: i64) -> Result<Vec<StoredProject>, StoreError> {
        let projects = self.projects.lock().unwrap();
        Ok(projects.iter().take(limit as usize).cloned().collect())
    }
}

/// `ProjectStore` whose operations always fail.
pub struct FailingStore;

#[async_trait::async_trait]
impl ProjectStore for FailingStore {
    async fn create_project(
        &self,
        _submission: &ProjectSubmission,
    ) -> Result<ObjectId, StoreError> {
        Err(StoreError::Internal("simulated store outage".into()))
    }

    async fn list_projects(&self, _limit: i64) -> Result<Vec<StoredProject>, StoreError> {
        Err(StoreError::Internal("simulated store outage".into()))
    }
}

/// `AdminNotifier` that records each notified submission.
#[derive(Default)]
pub struct RecordingNotifier {
    pub notified: Mutex<Vec<ProjectSubmission>>,
}

#[async_trait::async_trait]
impl AdminNotifier for RecordingNotifier {
    async fn notify_admin(&self, project: &ProjectSubmission) -> Result<(), EmailError> {
        self.notified.lock().unwrap().push(project.clone());
        Ok(())
    }
}

/// `AdminNotifier` whose sends always fail.
pub struct FailingNotifier;

#[async_trait::async_trait]
impl AdminNotifier for FailingNotifier {
    async fn notify_admin(&self, _project: &ProjectSubmission) -> Result<(), EmailError> {
        Err(EmailError::Build("simulated SMTP outage".into()))
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build the full application router with all middleware layers, using the
/// given store and notifier.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, tracing, panic
/// recovery) that production uses.
pub fn build_test_app(store: Arc<dyn ProjectStore>, notifier: Arc<dyn AdminNotifier>) -> Router {
    let state = AppState { store, notifier };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .merge(routes::project::router())
        .layer(CatchPanicLayer::new())
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request to the app and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Send a POST request with a JSON body and return the raw response.
pub async fn post_json(app: Router, uri: &str, body: &serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// The canonical valid submission payload used across tests.
pub fn sample_payload() -> serde_json::Value {
    serde_json::json!({
        "clientName": "Acme",
        "projectName": "Website",
        "budget": "5000",
        "deadline": "2024-12-01",
        "email": "a@x.com",
        "phone": "555-0100",
        "address": "1 Main St",
        "description": "New site",
        "requirements": "React frontend",
        "status": "new"
    })
}

/// The typed submission matching [`sample_payload`].
pub fn sample_submission() -> ProjectSubmission {
    serde_json::from_value(sample_payload()).unwrap()
}
