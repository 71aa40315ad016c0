// tests/support/helpers.rs
use std::sync::Arc;
use std::time::Duration;

use articles_core::application::ports::events::DomainEventPublisher;
use articles_core::application::services::ApplicationServices;
use articles_core::domain::article::ArticleRepository;
use articles_core::infrastructure::events::EventDispatcher;
use articles_core::infrastructure::repositories::InMemoryArticleRepository;
use articles_core::presentation::http::{routes::build_router, state::HttpState};
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::util::ServiceExt as _;

use super::mocks::{CapturingPublisher, FixedClock};

pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// In-memory wiring with a capturing event sink and a controllable clock.
pub struct TestContext {
    pub repo: Arc<InMemoryArticleRepository>,
    pub publisher: Arc<CapturingPublisher>,
    pub clock: Arc<FixedClock>,
    pub services: Arc<ApplicationServices>,
}

impl TestContext {
    pub fn new() -> Self {
        let publisher = Arc::new(CapturingPublisher::default());
        let sink: Arc<dyn DomainEventPublisher> = publisher.clone();
        let repo = Arc::new(InMemoryArticleRepository::new(EventDispatcher::new(sink)));
        let clock = Arc::new(FixedClock::new());

        let services = Arc::new(ApplicationServices::new(repo.clone(), clock.clone()));

        Self {
            repo,
            publisher,
            clock,
            services,
        }
    }

    pub fn router(&self) -> Router {
        router_for(Arc::clone(&self.services), TEST_TIMEOUT)
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn services_over(repo: Arc<dyn ArticleRepository>) -> Arc<ApplicationServices> {
    Arc::new(ApplicationServices::new(repo, Arc::new(FixedClock::new())))
}

pub fn router_for(services: Arc<ApplicationServices>, request_timeout: Duration) -> Router {
    build_router(HttpState {
        services,
        request_timeout,
        allowed_origins: vec!["http://localhost:3000".into()],
    })
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Sends one request and returns the status with the body parsed as JSON
/// (`Value::Null` for an empty body).
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
