// src/presentation/http/controllers/inbox.rs
use crate::application::dto::{
    ContactMessageDto, ContactMessageInput, SuggestionDto, SuggestionInput,
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
pub struct SuggestionListParams {
    /// Only suggestions not yet handled.
    #[serde(default)]
    pub pending: bool,
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ContactMessageListParams {
    /// Only messages not yet read.
    #[serde(default)]
    pub unread: bool,
}

#[utoipa::path(
    get,
    path = "/api/v1/suggestions",
    params(SuggestionListParams),
    responses(
        (status = 200, description = "Suggestions, newest first.", body = [SuggestionDto])
    ),
    tag = "Inbox"
)]
pub async fn list_suggestions(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SuggestionListParams>,
) -> HttpResult<Json<Vec<SuggestionDto>>> {
    state
        .services
        .inbox_queries
        .list_suggestions(params.pending)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/suggestions",
    request_body = SuggestionInput,
    responses(
        (status = 201, description = "Suggestion received.", body = SuggestionDto),
        (status = 400, description = "Invalid suggestion.", body = crate::presentation::http::error::ErrorResponse),
        (status = 429, description = "Too many submissions from this client.")
    ),
    tag = "Inbox"
)]
pub async fn submit_suggestion(
    Extension(state): Extension<HttpState>,
    Json(input): Json<SuggestionInput>,
) -> HttpResult<(StatusCode, Json<SuggestionDto>)> {
    state
        .services
        .inbox_commands
        .submit_suggestion(input)
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    post,
    path = "/api/v1/suggestions/{id}/handled",
    params(("id" = i64, Path, description = "Suggestion identifier")),
    responses(
        (status = 200, description = "Suggestion marked as handled.", body = SuggestionDto),
        (status = 404, description = "Suggestion not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Inbox"
)]
pub async fn mark_suggestion_handled(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<SuggestionDto>> {
    state
        .services
        .inbox_commands
        .mark_suggestion_handled(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/suggestions/{id}",
    params(("id" = i64, Path, description = "Suggestion identifier")),
    responses(
        (status = 200, description = "Suggestion deleted.", body = StatusResponse),
        (status = 404, description = "Suggestion not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Inbox"
)]
pub async fn delete_suggestion(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .inbox_commands
        .delete_suggestion(id)
        .await
        .into_http()?;
    Ok(Json(StatusResponse::deleted()))
}

#[utoipa::path(
    get,
    path = "/api/v1/contact-messages",
    params(ContactMessageListParams),
    responses(
        (status = 200, description = "Contact messages, newest first.", body = [ContactMessageDto])
    ),
    tag = "Inbox"
)]
pub async fn list_contact_messages(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ContactMessageListParams>,
) -> HttpResult<Json<Vec<ContactMessageDto>>> {
    state
        .services
        .inbox_queries
        .list_contact_messages(params.unread)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/contact-messages",
    request_body = ContactMessageInput,
    responses(
        (status = 201, description = "Message received.", body = ContactMessageDto),
        (status = 400, description = "Invalid message.", body = crate::presentation::http::error::ErrorResponse),
        (status = 429, description = "Too many submissions from this client.")
    ),
    tag = "Inbox"
)]
pub async fn submit_contact_message(
    Extension(state): Extension<HttpState>,
    Json(input): Json<ContactMessageInput>,
) -> HttpResult<(StatusCode, Json<ContactMessageDto>)> {
    state
        .services
        .inbox_commands
        .submit_contact_message(input)
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    post,
    path = "/api/v1/contact-messages/{id}/read",
    params(("id" = i64, Path, description = "Message identifier")),
    responses(
        (status = 200, description = "Message marked as read.", body = ContactMessageDto),
        (status = 404, description = "Message not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Inbox"
)]
pub async fn mark_contact_message_read(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ContactMessageDto>> {
    state
        .services
        .inbox_commands
        .mark_contact_message_read(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/contact-messages/{id}",
    params(("id" = i64, Path, description = "Message identifier")),
    responses(
        (status = 200, description = "Message deleted.", body = StatusResponse),
        (status = 404, description = "Message not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Inbox"
)]
pub async fn delete_contact_message(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .inbox_commands
        .delete_contact_message(id)
        .await
        .into_http()?;
    Ok(Json(StatusResponse::deleted()))
}
