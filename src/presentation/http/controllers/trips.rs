// src/presentation/http/controllers/trips.rs
use crate::application::{
    commands::trips::{CreateTripCommand, DeleteTripCommand, UpdateTripCommand},
    dto::{TripDto, TripInput},
    queries::trips::GetTripBySlugQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};

#[utoipa::path(
    get,
    path = "/api/v1/trips",
    responses(
        (status = 200, description = "All trips, newest first.", body = [TripDto]),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Trips"
)]
pub async fn list_trips(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<TripDto>>> {
    state
        .services
        .trip_queries
        .list_trips()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/trips",
    request_body = TripInput,
    responses(
        (status = 201, description = "Trip created with a unique slug.", body = TripDto),
        (status = 400, description = "Invalid trip.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug allocation lost a race twice.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Trips"
)]
pub async fn create_trip(
    Extension(state): Extension<HttpState>,
    Json(input): Json<TripInput>,
) -> HttpResult<(StatusCode, Json<TripDto>)> {
    state
        .services
        .trip_commands
        .create_trip(CreateTripCommand { input })
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/api/v1/trips/{slug}",
    params(("slug" = String, Path, description = "Exact slug, matched case-sensitively")),
    responses(
        (status = 200, description = "Trip with this slug.", body = TripDto),
        (status = 404, description = "No trip has this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Trips"
)]
pub async fn get_trip_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<TripDto>> {
    state
        .services
        .trip_queries
        .get_trip_by_slug(GetTripBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/trips/id/{id}",
    params(("id" = i64, Path, description = "Trip identifier")),
    responses(
        (status = 200, description = "Trip.", body = TripDto),
        (status = 404, description = "Trip not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Trips"
)]
pub async fn get_trip(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<TripDto>> {
    state
        .services
        .trip_queries
        .get_trip(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/trips/id/{id}",
    params(("id" = i64, Path, description = "Trip identifier")),
    request_body = TripInput,
    responses(
        (status = 200, description = "Trip updated; the slug is unchanged.", body = TripDto),
        (status = 400, description = "Invalid trip.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Trip not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Trips"
)]
pub async fn update_trip(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(input): Json<TripInput>,
) -> HttpResult<Json<TripDto>> {
    state
        .services
        .trip_commands
        .update_trip(UpdateTripCommand { id, input })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/trips/id/{id}",
    params(("id" = i64, Path, description = "Trip identifier")),
    responses(
        (status = 200, description = "Trip deleted.", body = StatusResponse),
        (status = 404, description = "Trip not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Trips"
)]
pub async fn delete_trip(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .trip_commands
        .delete_trip(DeleteTripCommand { id })
        .await
        .into_http()?;
    Ok(Json(StatusResponse::deleted()))
}
