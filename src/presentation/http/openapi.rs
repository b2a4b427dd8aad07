// src/presentation/http/openapi.rs
use crate::application::dto::{CursorPage, FeedPostDto};
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".into(),
        }
    }

    pub fn deleted() -> Self {
        Self {
            status: "deleted".into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FeedPageResponse {
    pub items: Vec<FeedPostDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

impl From<CursorPage<FeedPostDto>> for FeedPageResponse {
    fn from(page: CursorPage<FeedPostDto>) -> Self {
        Self {
            items: page.items,
            next_cursor: page.next_cursor,
            has_more: page.has_more,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::movies::list_movies,
        crate::presentation::http::controllers::movies::create_movie,
        crate::presentation::http::controllers::movies::get_movie_by_slug,
        crate::presentation::http::controllers::movies::get_movie,
        crate::presentation::http::controllers::movies::update_movie,
        crate::presentation::http::controllers::movies::delete_movie,
        crate::presentation::http::controllers::books::list_books,
        crate::presentation::http::controllers::books::create_book,
        crate::presentation::http::controllers::books::get_book_by_slug,
        crate::presentation::http::controllers::books::get_book,
        crate::presentation::http::controllers::books::update_book,
        crate::presentation::http::controllers::books::delete_book,
        crate::presentation::http::controllers::trips::list_trips,
        crate::presentation::http::controllers::trips::create_trip,
        crate::presentation::http::controllers::trips::get_trip_by_slug,
        crate::presentation::http::controllers::trips::get_trip,
        crate::presentation::http::controllers::trips::update_trip,
        crate::presentation::http::controllers::trips::delete_trip,
        crate::presentation::http::controllers::restaurants::list_restaurants,
        crate::presentation::http::controllers::restaurants::create_restaurant,
        crate::presentation::http::controllers::restaurants::get_restaurant_by_slug,
        crate::presentation::http::controllers::restaurants::get_restaurant,
        crate::presentation::http::controllers::restaurants::update_restaurant,
        crate::presentation::http::controllers::restaurants::delete_restaurant,
        crate::presentation::http::controllers::flats::list_flats,
        crate::presentation::http::controllers::flats::create_flat,
        crate::presentation::http::controllers::flats::get_flat,
        crate::presentation::http::controllers::flats::update_flat,
        crate::presentation::http::controllers::flats::delete_flat,
        crate::presentation::http::controllers::feed::list_feed,
        crate::presentation::http::controllers::feed::create_post,
        crate::presentation::http::controllers::feed::get_post,
        crate::presentation::http::controllers::feed::update_post,
        crate::presentation::http::controllers::feed::delete_post,
        crate::presentation::http::controllers::inbox::list_suggestions,
        crate::presentation::http::controllers::inbox::submit_suggestion,
        crate::presentation::http::controllers::inbox::mark_suggestion_handled,
        crate::presentation::http::controllers::inbox::delete_suggestion,
        crate::presentation::http::controllers::inbox::list_contact_messages,
        crate::presentation::http::controllers::inbox::submit_contact_message,
        crate::presentation::http::controllers::inbox::mark_contact_message_read,
        crate::presentation::http::controllers::inbox::delete_contact_message,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            FeedPageResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::flats::FlatListParams,
            crate::presentation::http::controllers::feed::FeedListParams,
            crate::presentation::http::controllers::inbox::SuggestionListParams,
            crate::presentation::http::controllers::inbox::ContactMessageListParams,
            crate::application::dto::MovieDto,
            crate::application::dto::MovieInput,
            crate::application::dto::BookDto,
            crate::application::dto::BookInput,
            crate::application::dto::TripDto,
            crate::application::dto::TripInput,
            crate::application::dto::RestaurantDto,
            crate::application::dto::RestaurantInput,
            crate::application::dto::FlatDto,
            crate::application::dto::FlatInput,
            crate::application::dto::FeedPostDto,
            crate::application::dto::FeedPostInput,
            crate::application::dto::SuggestionDto,
            crate::application::dto::SuggestionInput,
            crate::application::dto::ContactMessageDto,
            crate::application::dto::ContactMessageInput,
            crate::domain::flat::FlatStatus,
            crate::domain::inbox::SuggestionCategory
        )
    ),
    tags(
        (name = "Movies", description = "Watched movies"),
        (name = "Books", description = "Finished books"),
        (name = "Trips", description = "Trips taken"),
        (name = "Restaurants", description = "Restaurants visited"),
        (name = "Flats", description = "Flat hunting"),
        (name = "Feed", description = "Short posts"),
        (name = "Inbox", description = "Visitor suggestions and contact messages"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Shelf API",
        description = "Personal content tracker",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            urls.push("http://localhost:8080".to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "spec/openapi.json".to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
