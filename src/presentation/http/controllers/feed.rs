// src/presentation/http/controllers/feed.rs
use crate::application::{
    commands::feed::{CreateFeedPostCommand, DeleteFeedPostCommand, UpdateFeedPostCommand},
    dto::{FeedPostDto, FeedPostInput},
    queries::feed::{DEFAULT_LIMIT, ListFeedQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::{FeedPageResponse, StatusResponse};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

const fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FeedListParams {
    /// Page size, capped at 100.
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Opaque token from the previous page's `next_cursor`.
    #[serde(default)]
    pub cursor: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/feed",
    params(FeedListParams),
    responses(
        (status = 200, description = "One page of posts, newest first.", body = FeedPageResponse),
        (status = 400, description = "Malformed cursor.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Feed"
)]
pub async fn list_feed(
    Extension(state): Extension<HttpState>,
    Query(params): Query<FeedListParams>,
) -> HttpResult<Json<FeedPageResponse>> {
    state
        .services
        .feed_queries
        .list_feed(ListFeedQuery {
            limit: params.limit,
            cursor: params.cursor,
        })
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/feed",
    request_body = FeedPostInput,
    responses(
        (status = 201, description = "Post published.", body = FeedPostDto),
        (status = 400, description = "Invalid post.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Feed"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Json(input): Json<FeedPostInput>,
) -> HttpResult<(StatusCode, Json<FeedPostDto>)> {
    state
        .services
        .feed_commands
        .create_post(CreateFeedPostCommand { input })
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/api/v1/feed/{id}",
    params(("id" = i64, Path, description = "Post identifier")),
    responses(
        (status = 200, description = "Post with this id.", body = FeedPostDto),
        (status = 404, description = "Post not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Feed"
)]
pub async fn get_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<FeedPostDto>> {
    state
        .services
        .feed_queries
        .get_post(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/feed/{id}",
    params(("id" = i64, Path, description = "Post identifier")),
    request_body = FeedPostInput,
    responses(
        (status = 200, description = "Post updated.", body = FeedPostDto),
        (status = 400, description = "Invalid post.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Post not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Feed"
)]
pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(input): Json<FeedPostInput>,
) -> HttpResult<Json<FeedPostDto>> {
    state
        .services
        .feed_commands
        .update_post(UpdateFeedPostCommand { id, input })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/feed/{id}",
    params(("id" = i64, Path, description = "Post identifier")),
    responses(
        (status = 200, description = "Post deleted.", body = StatusResponse),
        (status = 404, description = "Post not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Feed"
)]
pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .feed_commands
        .delete_post(DeleteFeedPostCommand { id })
        .await
        .into_http()?;
    Ok(Json(StatusResponse::deleted()))
}
