// src/presentation/http/routes.rs
use crate::config::{AppConfig, RateLimitConfig};
use crate::presentation::http::middleware::rate_limit::{RateLimitLayer, rate_limit_layer};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{books, feed, flats, inbox, movies, restaurants, trips},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    handler::Handler,
    http::{HeaderValue, Method},
    routing::{MethodRouter, get, post},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState, config: &AppConfig) -> Router {
    let limiter = rate_limit_layer(config.rate_limit());
    assemble(state, cors_layer(config.allowed_origins()), limiter.as_ref())
}

/// Router with permissive CORS and the inbox limiter optionally switched off.
/// The limiter keys on the peer address, which `oneshot` requests lack.
pub fn build_router_with_rate_limiter(state: HttpState, enable_rate_limiter: bool) -> Router {
    let limiter = if enable_rate_limiter {
        rate_limit_layer(RateLimitConfig::default())
    } else {
        None
    };
    assemble(state, cors_layer(&[]), limiter.as_ref())
}

fn assemble(state: HttpState, cors: CorsLayer, limiter: Option<&RateLimitLayer>) -> Router {
    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route(
            "/api/v1/movies",
            get(movies::list_movies).post(movies::create_movie),
        )
        .route("/api/v1/movies/{slug}", get(movies::get_movie_by_slug))
        .route(
            "/api/v1/movies/id/{id}",
            get(movies::get_movie)
                .put(movies::update_movie)
                .delete(movies::delete_movie),
        )
        .route(
            "/api/v1/books",
            get(books::list_books).post(books::create_book),
        )
        .route("/api/v1/books/{slug}", get(books::get_book_by_slug))
        .route(
            "/api/v1/books/id/{id}",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .route(
            "/api/v1/trips",
            get(trips::list_trips).post(trips::create_trip),
        )
        .route("/api/v1/trips/{slug}", get(trips::get_trip_by_slug))
        .route(
            "/api/v1/trips/id/{id}",
            get(trips::get_trip)
                .put(trips::update_trip)
                .delete(trips::delete_trip),
        )
        .route(
            "/api/v1/restaurants",
            get(restaurants::list_restaurants).post(restaurants::create_restaurant),
        )
        .route(
            "/api/v1/restaurants/{slug}",
            get(restaurants::get_restaurant_by_slug),
        )
        .route(
            "/api/v1/restaurants/id/{id}",
            get(restaurants::get_restaurant)
                .put(restaurants::update_restaurant)
                .delete(restaurants::delete_restaurant),
        )
        .route(
            "/api/v1/flats",
            get(flats::list_flats).post(flats::create_flat),
        )
        .route(
            "/api/v1/flats/{id}",
            get(flats::get_flat)
                .put(flats::update_flat)
                .delete(flats::delete_flat),
        )
        .route("/api/v1/feed", get(feed::list_feed).post(feed::create_post))
        .route(
            "/api/v1/feed/{id}",
            get(feed::get_post)
                .put(feed::update_post)
                .delete(feed::delete_post),
        )
        .route(
            "/api/v1/suggestions",
            get(inbox::list_suggestions).merge(public_post(inbox::submit_suggestion, limiter)),
        )
        .route(
            "/api/v1/suggestions/{id}/handled",
            post(inbox::mark_suggestion_handled),
        )
        .route(
            "/api/v1/suggestions/{id}",
            axum::routing::delete(inbox::delete_suggestion),
        )
        .route(
            "/api/v1/contact-messages",
            get(inbox::list_contact_messages)
                .merge(public_post(inbox::submit_contact_message, limiter)),
        )
        .route(
            "/api/v1/contact-messages/{id}/read",
            post(inbox::mark_contact_message_read),
        )
        .route(
            "/api/v1/contact-messages/{id}",
            axum::routing::delete(inbox::delete_contact_message),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(Extension(state))
}

/// POST route open to anonymous visitors, throttled per client when a limiter is given.
fn public_post<H, T>(handler: H, limiter: Option<&RateLimitLayer>) -> MethodRouter
where
    H: Handler<T, ()>,
    T: 'static,
{
    let route = post(handler);
    match limiter {
        Some(layer) => route.layer(layer.clone()),
        None => route,
    }
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse::ok())
}
