// tests/support/helpers.rs
use super::mocks::{FixedClock, InMemoryCatalog, InMemoryFeed, InMemoryFlats, InMemoryInbox};
use axum::body;
use axum::body::Body;
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use serde_json::Value;
use shelf::application::ports::{time::Clock, util::SlugGenerator};
use shelf::application::services::{ApplicationServices, Repositories};
use shelf::domain::slug::SlugRepository;
use shelf::infrastructure::util::DefaultSlugGenerator;
use shelf::presentation::http::state::HttpState;
use std::sync::Arc;

/// Every in-memory store behind a test `ApplicationServices`, kept so tests
/// can seed and inspect them directly.
#[derive(Clone)]
pub struct TestStores {
    pub catalog: Arc<InMemoryCatalog>,
    pub flats: Arc<InMemoryFlats>,
    pub feed: Arc<InMemoryFeed>,
    pub inbox: Arc<InMemoryInbox>,
}

impl TestStores {
    pub fn new() -> Self {
        Self {
            catalog: Arc::new(InMemoryCatalog::new()),
            flats: Arc::new(InMemoryFlats::default()),
            feed: Arc::new(InMemoryFeed::default()),
            inbox: Arc::new(InMemoryInbox::default()),
        }
    }

    pub fn repositories(&self) -> Repositories {
        self.repositories_with_slugs(self.catalog.clone())
    }

    /// Same stores, but slug snapshots come from `slugs`.
    pub fn repositories_with_slugs(&self, slugs: Arc<dyn SlugRepository>) -> Repositories {
        Repositories {
            movies: self.catalog.clone(),
            books: self.catalog.clone(),
            trips: self.catalog.clone(),
            restaurants: self.catalog.clone(),
            flats: self.flats.clone(),
            feed: self.feed.clone(),
            suggestions: self.inbox.clone(),
            contact_messages: self.inbox.clone(),
            slugs,
        }
    }

    pub fn services(&self) -> Arc<ApplicationServices> {
        Arc::new(build_services(self.repositories()))
    }
}

pub fn build_services(repos: Repositories) -> ApplicationServices {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    ApplicationServices::new(repos, clock, slugger)
}

pub fn make_test_router_with(stores: &TestStores) -> axum::Router {
    let state = HttpState {
        services: stores.services(),
    };
    shelf::presentation::http::routes::build_router_with_rate_limiter(state, false)
}

pub fn make_test_router() -> axum::Router {
    make_test_router_with(&TestStores::new())
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
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

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected a JSON body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(
        !msg_field.is_empty(),
        "expected non-empty message field in ErrorResponse"
    );
}
