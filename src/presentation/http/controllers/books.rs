// src/presentation/http/controllers/books.rs
use crate::application::{
    commands::books::{CreateBookCommand, DeleteBookCommand, UpdateBookCommand},
    dto::{BookDto, BookInput},
    queries::books::GetBookBySlugQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};

#[utoipa::path(
    get,
    path = "/api/v1/books",
    responses(
        (status = 200, description = "All books, newest first.", body = [BookDto]),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Books"
)]
pub async fn list_books(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<BookDto>>> {
    state
        .services
        .book_queries
        .list_books()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/books",
    request_body = BookInput,
    responses(
        (status = 201, description = "Book created with a unique slug.", body = BookDto),
        (status = 400, description = "Invalid book.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug allocation lost a race twice.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Books"
)]
pub async fn create_book(
    Extension(state): Extension<HttpState>,
    Json(input): Json<BookInput>,
) -> HttpResult<(StatusCode, Json<BookDto>)> {
    state
        .services
        .book_commands
        .create_book(CreateBookCommand { input })
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/api/v1/books/{slug}",
    params(("slug" = String, Path, description = "Exact slug, matched case-sensitively")),
    responses(
        (status = 200, description = "Book with this slug.", body = BookDto),
        (status = 404, description = "No book has this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Books"
)]
pub async fn get_book_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<BookDto>> {
    state
        .services
        .book_queries
        .get_book_by_slug(GetBookBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/books/id/{id}",
    params(("id" = i64, Path, description = "Book identifier")),
    responses(
        (status = 200, description = "Book.", body = BookDto),
        (status = 404, description = "Book not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Books"
)]
pub async fn get_book(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<BookDto>> {
    state
        .services
        .book_queries
        .get_book(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/books/id/{id}",
    params(("id" = i64, Path, description = "Book identifier")),
    request_body = BookInput,
    responses(
        (status = 200, description = "Book updated; the slug is unchanged.", body = BookDto),
        (status = 400, description = "Invalid book.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Book not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Books"
)]
pub async fn update_book(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(input): Json<BookInput>,
) -> HttpResult<Json<BookDto>> {
    state
        .services
        .book_commands
        .update_book(UpdateBookCommand { id, input })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/books/id/{id}",
    params(("id" = i64, Path, description = "Book identifier")),
    responses(
        (status = 200, description = "Book deleted.", body = StatusResponse),
        (status = 404, description = "Book not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Books"
)]
pub async fn delete_book(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .book_commands
        .delete_book(DeleteBookCommand { id })
        .await
        .into_http()?;
    Ok(Json(StatusResponse::deleted()))
}
