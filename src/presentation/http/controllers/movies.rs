// src/presentation/http/controllers/movies.rs
use crate::application::{
    commands::movies::{CreateMovieCommand, DeleteMovieCommand, UpdateMovieCommand},
    dto::{MovieDto, MovieInput},
    queries::movies::GetMovieBySlugQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};

#[utoipa::path(
    get,
    path = "/api/v1/movies",
    responses(
        (status = 200, description = "All movies, newest first.", body = [MovieDto]),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Movies"
)]
pub async fn list_movies(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<MovieDto>>> {
    state
        .services
        .movie_queries
        .list_movies()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/movies",
    request_body = MovieInput,
    responses(
        (status = 201, description = "Movie created with a unique slug.", body = MovieDto),
        (status = 400, description = "Invalid movie.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug allocation lost a race twice.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Movies"
)]
pub async fn create_movie(
    Extension(state): Extension<HttpState>,
    Json(input): Json<MovieInput>,
) -> HttpResult<(StatusCode, Json<MovieDto>)> {
    state
        .services
        .movie_commands
        .create_movie(CreateMovieCommand { input })
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/api/v1/movies/{slug}",
    params(("slug" = String, Path, description = "Exact slug, matched case-sensitively")),
    responses(
        (status = 200, description = "Movie with this slug.", body = MovieDto),
        (status = 404, description = "No movie has this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Movies"
)]
pub async fn get_movie_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<MovieDto>> {
    state
        .services
        .movie_queries
        .get_movie_by_slug(GetMovieBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/movies/id/{id}",
    params(("id" = i64, Path, description = "Movie identifier")),
    responses(
        (status = 200, description = "Movie.", body = MovieDto),
        (status = 404, description = "Movie not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Movies"
)]
pub async fn get_movie(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<MovieDto>> {
    state
        .services
        .movie_queries
        .get_movie(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/movies/id/{id}",
    params(("id" = i64, Path, description = "Movie identifier")),
    request_body = MovieInput,
    responses(
        (status = 200, description = "Movie updated; the slug is unchanged.", body = MovieDto),
        (status = 400, description = "Invalid movie.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Movie not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Movies"
)]
pub async fn update_movie(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(input): Json<MovieInput>,
) -> HttpResult<Json<MovieDto>> {
    state
        .services
        .movie_commands
        .update_movie(UpdateMovieCommand { id, input })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/movies/id/{id}",
    params(("id" = i64, Path, description = "Movie identifier")),
    responses(
        (status = 200, description = "Movie deleted.", body = StatusResponse),
        (status = 404, description = "Movie not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Movies"
)]
pub async fn delete_movie(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .movie_commands
        .delete_movie(DeleteMovieCommand { id })
        .await
        .into_http()?;
    Ok(Json(StatusResponse::deleted()))
}
