// tests/e2e_error_statuses.rs
use axum::http::StatusCode;
use serde_json::json;
use shelf::presentation::http::{routes::build_router_with_rate_limiter, state::HttpState};
use std::sync::Arc;
use tower::util::ServiceExt;

mod support;

use support::{StaleSlugs, TestStores};

#[tokio::test]
async fn unknown_slug_is_not_found() {
    let app = support::make_test_router();

    let resp = app
        .oneshot(support::empty_request("GET", "/api/v1/movies/no-such-movie"))
        .await
        .unwrap();

    support::assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn slug_lookup_is_case_sensitive() {
    let app = support::make_test_router();
    let resp = app
        .clone()
        .oneshot(support::json_request(
            "POST",
            "/api/v1/books",
            &json!({ "title": "Emma" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app
        .oneshot(support::empty_request("GET", "/api/v1/books/Emma"))
        .await
        .unwrap();

    support::assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn blank_title_is_rejected() {
    let app = support::make_test_router();

    let resp = app
        .oneshot(support::json_request(
            "POST",
            "/api/v1/movies",
            &json!({ "title": "   " }),
        ))
        .await
        .unwrap();

    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn title_without_slug_characters_is_rejected() {
    let app = support::make_test_router();

    let resp = app
        .oneshot(support::json_request(
            "POST",
            "/api/v1/restaurants",
            &json!({ "name": "???" }),
        ))
        .await
        .unwrap();

    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn out_of_range_rating_is_rejected() {
    let app = support::make_test_router();

    let resp = app
        .oneshot(support::json_request(
            "POST",
            "/api/v1/books",
            &json!({ "title": "Ulysses", "rating": 11 }),
        ))
        .await
        .unwrap();

    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn trip_ending_before_it_starts_is_rejected() {
    let app = support::make_test_router();

    let resp = app
        .oneshot(support::json_request(
            "POST",
            "/api/v1/trips",
            &json!({ "name": "Backwards", "started_on": "2024-06-10", "ended_on": "2024-06-01" }),
        ))
        .await
        .unwrap();

    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn non_positive_id_is_rejected() {
    let app = support::make_test_router();

    let resp = app
        .oneshot(support::empty_request("GET", "/api/v1/movies/id/0"))
        .await
        .unwrap();

    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn updating_missing_record_is_not_found() {
    let app = support::make_test_router();

    let resp = app
        .oneshot(support::json_request(
            "PUT",
            "/api/v1/trips/id/999",
            &json!({ "name": "Nowhere" }),
        ))
        .await
        .unwrap();

    support::assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn deleting_missing_flat_is_not_found() {
    let app = support::make_test_router();

    let resp = app
        .oneshot(support::empty_request("DELETE", "/api/v1/flats/42"))
        .await
        .unwrap();

    support::assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn unknown_flat_status_filter_is_rejected() {
    let app = support::make_test_router();

    let resp = app
        .oneshot(support::empty_request("GET", "/api/v1/flats?status=maybe"))
        .await
        .unwrap();

    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn malformed_feed_cursor_is_rejected() {
    let app = support::make_test_router();

    let resp = app
        .oneshot(support::empty_request("GET", "/api/v1/feed?cursor=not-a-cursor"))
        .await
        .unwrap();

    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn invalid_contact_email_is_rejected() {
    let app = support::make_test_router();

    let resp = app
        .oneshot(support::json_request(
            "POST",
            "/api/v1/contact-messages",
            &json!({ "name": "Ann", "email": "ann.example.com", "message": "hi" }),
        ))
        .await
        .unwrap();

    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn repeated_slug_race_is_a_conflict() {
    let stores = TestStores::new();
    let taken = stores.catalog.clone();
    taken.seed_slugged(
        shelf::domain::slug::EntityKind::Movie,
        "Heat",
        "heat",
        support::fixed_now(),
    );
    // Both snapshots miss the stored slug, so both inserts collide.
    let slugs = Arc::new(StaleSlugs::new(stores.catalog.clone(), 2));
    let services = support::build_services(stores.repositories_with_slugs(slugs));
    let app = build_router_with_rate_limiter(
        HttpState {
            services: Arc::new(services),
        },
        false,
    );

    let resp = app
        .oneshot(support::json_request(
            "POST",
            "/api/v1/movies",
            &json!({ "title": "Heat" }),
        ))
        .await
        .unwrap();

    support::assert_error_response(resp, StatusCode::CONFLICT, "Conflict").await;
}
