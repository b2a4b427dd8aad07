// src/presentation/http/controllers/flats.rs
use crate::application::{
    commands::flats::{CreateFlatCommand, DeleteFlatCommand, UpdateFlatCommand},
    dto::{FlatDto, FlatInput},
    queries::flats::ListFlatsQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FlatListParams {
    /// One of `interested`, `viewing_scheduled`, `applied`, `rejected`, `accepted`.
    #[serde(default)]
    pub status: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/flats",
    params(FlatListParams),
    responses(
        (status = 200, description = "Flats, newest first.", body = [FlatDto]),
        (status = 400, description = "Unknown status filter.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Flats"
)]
pub async fn list_flats(
    Extension(state): Extension<HttpState>,
    Query(params): Query<FlatListParams>,
) -> HttpResult<Json<Vec<FlatDto>>> {
    state
        .services
        .flat_queries
        .list_flats(ListFlatsQuery {
            status: params.status,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/flats",
    request_body = FlatInput,
    responses(
        (status = 201, description = "Flat recorded.", body = FlatDto),
        (status = 400, description = "Invalid flat.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Flats"
)]
pub async fn create_flat(
    Extension(state): Extension<HttpState>,
    Json(input): Json<FlatInput>,
) -> HttpResult<(StatusCode, Json<FlatDto>)> {
    state
        .services
        .flat_commands
        .create_flat(CreateFlatCommand { input })
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/api/v1/flats/{id}",
    params(("id" = i64, Path, description = "Flat identifier")),
    responses(
        (status = 200, description = "Flat.", body = FlatDto),
        (status = 404, description = "Flat not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Flats"
)]
pub async fn get_flat(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<FlatDto>> {
    state
        .services
        .flat_queries
        .get_flat(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/flats/{id}",
    params(("id" = i64, Path, description = "Flat identifier")),
    request_body = FlatInput,
    responses(
        (status = 200, description = "Flat updated.", body = FlatDto),
        (status = 400, description = "Invalid flat.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Flat not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Flats"
)]
pub async fn update_flat(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(input): Json<FlatInput>,
) -> HttpResult<Json<FlatDto>> {
    state
        .services
        .flat_commands
        .update_flat(UpdateFlatCommand { id, input })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/flats/{id}",
    params(("id" = i64, Path, description = "Flat identifier")),
    responses(
        (status = 200, description = "Flat deleted.", body = StatusResponse),
        (status = 404, description = "Flat not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Flats"
)]
pub async fn delete_flat(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .flat_commands
        .delete_flat(DeleteFlatCommand { id })
        .await
        .into_http()?;
    Ok(Json(StatusResponse::deleted()))
}
