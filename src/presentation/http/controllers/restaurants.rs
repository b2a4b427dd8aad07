// src/presentation/http/controllers/restaurants.rs
use crate::application::{
    commands::restaurants::{CreateRestaurantCommand, DeleteRestaurantCommand, UpdateRestaurantCommand},
    dto::{RestaurantDto, RestaurantInput},
    queries::restaurants::GetRestaurantBySlugQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};

#[utoipa::path(
    get,
    path = "/api/v1/restaurants",
    responses(
        (status = 200, description = "All restaurants, newest first.", body = [RestaurantDto]),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Restaurants"
)]
pub async fn list_restaurants(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<RestaurantDto>>> {
    state
        .services
        .restaurant_queries
        .list_restaurants()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/restaurants",
    request_body = RestaurantInput,
    responses(
        (status = 201, description = "Restaurant created with a unique slug.", body = RestaurantDto),
        (status = 400, description = "Invalid restaurant.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug allocation lost a race twice.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Restaurants"
)]
pub async fn create_restaurant(
    Extension(state): Extension<HttpState>,
    Json(input): Json<RestaurantInput>,
) -> HttpResult<(StatusCode, Json<RestaurantDto>)> {
    state
        .services
        .restaurant_commands
        .create_restaurant(CreateRestaurantCommand { input })
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/api/v1/restaurants/{slug}",
    params(("slug" = String, Path, description = "Exact slug, matched case-sensitively")),
    responses(
        (status = 200, description = "Restaurant with this slug.", body = RestaurantDto),
        (status = 404, description = "No restaurant has this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Restaurants"
)]
pub async fn get_restaurant_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<RestaurantDto>> {
    state
        .services
        .restaurant_queries
        .get_restaurant_by_slug(GetRestaurantBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/restaurants/id/{id}",
    params(("id" = i64, Path, description = "Restaurant identifier")),
    responses(
        (status = 200, description = "Restaurant.", body = RestaurantDto),
        (status = 404, description = "Restaurant not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Restaurants"
)]
pub async fn get_restaurant(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<RestaurantDto>> {
    state
        .services
        .restaurant_queries
        .get_restaurant(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/restaurants/id/{id}",
    params(("id" = i64, Path, description = "Restaurant identifier")),
    request_body = RestaurantInput,
    responses(
        (status = 200, description = "Restaurant updated; the slug is unchanged.", body = RestaurantDto),
        (status = 400, description = "Invalid restaurant.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Restaurant not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Restaurants"
)]
pub async fn update_restaurant(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(input): Json<RestaurantInput>,
) -> HttpResult<Json<RestaurantDto>> {
    state
        .services
        .restaurant_commands
        .update_restaurant(UpdateRestaurantCommand { id, input })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/restaurants/id/{id}",
    params(("id" = i64, Path, description = "Restaurant identifier")),
    responses(
        (status = 200, description = "Restaurant deleted.", body = StatusResponse),
        (status = 404, description = "Restaurant not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Restaurants"
)]
pub async fn delete_restaurant(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .restaurant_commands
        .delete_restaurant(DeleteRestaurantCommand { id })
        .await
        .into_http()?;
    Ok(Json(StatusResponse::deleted()))
}
