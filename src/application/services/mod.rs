// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            books::BookCommandService, feed::FeedCommandService, flats::FlatCommandService,
            inbox::InboxCommandService, movies::MovieCommandService,
            restaurants::RestaurantCommandService, trips::TripCommandService,
        },
        ports::{time::Clock, util::SlugGenerator},
        queries::{
            books::BookQueryService, feed::FeedQueryService, flats::FlatQueryService,
            inbox::InboxQueryService, movies::MovieQueryService,
            restaurants::RestaurantQueryService, trips::TripQueryService,
        },
    },
    domain::{
        book::BookRepository,
        feed::FeedRepository,
        flat::FlatRepository,
        inbox::{ContactMessageRepository, SuggestionRepository},
        movie::MovieRepository,
        restaurant::RestaurantRepository,
        slug::{SlugRepository, SlugService},
        trip::TripRepository,
    },
};

/// Every repository the services are wired against.
#[derive(Clone)]
pub struct Repositories {
    pub movies: Arc<dyn MovieRepository>,
    pub books: Arc<dyn BookRepository>,
    pub trips: Arc<dyn TripRepository>,
    pub restaurants: Arc<dyn RestaurantRepository>,
    pub flats: Arc<dyn FlatRepository>,
    pub feed: Arc<dyn FeedRepository>,
    pub suggestions: Arc<dyn SuggestionRepository>,
    pub contact_messages: Arc<dyn ContactMessageRepository>,
    pub slugs: Arc<dyn SlugRepository>,
}

pub struct ApplicationServices {
    pub movie_commands: Arc<MovieCommandService>,
    pub movie_queries: Arc<MovieQueryService>,
    pub book_commands: Arc<BookCommandService>,
    pub book_queries: Arc<BookQueryService>,
    pub trip_commands: Arc<TripCommandService>,
    pub trip_queries: Arc<TripQueryService>,
    pub restaurant_commands: Arc<RestaurantCommandService>,
    pub restaurant_queries: Arc<RestaurantQueryService>,
    pub flat_commands: Arc<FlatCommandService>,
    pub flat_queries: Arc<FlatQueryService>,
    pub feed_commands: Arc<FeedCommandService>,
    pub feed_queries: Arc<FeedQueryService>,
    pub inbox_commands: Arc<InboxCommandService>,
    pub inbox_queries: Arc<InboxQueryService>,
}

impl ApplicationServices {
    pub fn new(
        repos: Repositories,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let slug_service = Arc::new(SlugService::new(Arc::clone(&repos.slugs), slugger));

        Self {
            movie_commands: Arc::new(MovieCommandService::new(
                Arc::clone(&repos.movies),
                Arc::clone(&slug_service),
                Arc::clone(&clock),
            )),
            movie_queries: Arc::new(MovieQueryService::new(Arc::clone(&repos.movies))),
            book_commands: Arc::new(BookCommandService::new(
                Arc::clone(&repos.books),
                Arc::clone(&slug_service),
                Arc::clone(&clock),
            )),
            book_queries: Arc::new(BookQueryService::new(Arc::clone(&repos.books))),
            trip_commands: Arc::new(TripCommandService::new(
                Arc::clone(&repos.trips),
                Arc::clone(&slug_service),
                Arc::clone(&clock),
            )),
            trip_queries: Arc::new(TripQueryService::new(Arc::clone(&repos.trips))),
            restaurant_commands: Arc::new(RestaurantCommandService::new(
                Arc::clone(&repos.restaurants),
                Arc::clone(&slug_service),
                Arc::clone(&clock),
            )),
            restaurant_queries: Arc::new(RestaurantQueryService::new(Arc::clone(
                &repos.restaurants,
            ))),
            flat_commands: Arc::new(FlatCommandService::new(
                Arc::clone(&repos.flats),
                Arc::clone(&clock),
            )),
            flat_queries: Arc::new(FlatQueryService::new(Arc::clone(&repos.flats))),
            feed_commands: Arc::new(FeedCommandService::new(
                Arc::clone(&repos.feed),
                Arc::clone(&clock),
            )),
            feed_queries: Arc::new(FeedQueryService::new(Arc::clone(&repos.feed))),
            inbox_commands: Arc::new(InboxCommandService::new(
                Arc::clone(&repos.suggestions),
                Arc::clone(&repos.contact_messages),
                Arc::clone(&clock),
            )),
            inbox_queries: Arc::new(InboxQueryService::new(
                Arc::clone(&repos.suggestions),
                Arc::clone(&repos.contact_messages),
            )),
        }
    }
}
