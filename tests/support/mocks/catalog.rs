// tests/support/mocks/catalog.rs
//! In-memory stand-in for the four sluggable tables. Slug uniqueness is
//! enforced per kind on insert and assignment, like the unique constraints.
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shelf::domain::book::{Book, BookDetails, BookRepository, NewBook};
use shelf::domain::errors::{DomainError, DomainResult};
use shelf::domain::movie::{Movie, MovieDetails, MovieRepository, NewMovie};
use shelf::domain::restaurant::{NewRestaurant, Restaurant, RestaurantDetails, RestaurantRepository};
use shelf::domain::slug::{EntityKind, Slug, SlugRepository, UnsluggedRecord};
use shelf::domain::trip::{NewTrip, Trip, TripDetails, TripRepository};
use shelf::domain::values::{RecordId, Title};
use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

#[derive(Default)]
pub struct InMemoryCatalog {
    next_id: AtomicI64,
    movies: Mutex<Vec<Movie>>,
    books: Mutex<Vec<Book>>,
    trips: Mutex<Vec<Trip>>,
    restaurants: Mutex<Vec<Restaurant>>,
}

trait Sluggable: Clone {
    fn id(&self) -> RecordId;
    fn slug(&self) -> Option<&Slug>;
    fn set_slug(&mut self, slug: Slug);
    fn title(&self) -> &str;
    fn created_at(&self) -> DateTime<Utc>;
}

macro_rules! sluggable {
    ($entity:ident, $title:ident) => {
        impl Sluggable for $entity {
            fn id(&self) -> RecordId {
                self.id
            }
            fn slug(&self) -> Option<&Slug> {
                self.slug.as_ref()
            }
            fn set_slug(&mut self, slug: Slug) {
                self.slug = Some(slug);
            }
            fn title(&self) -> &str {
                self.details.$title.as_str()
            }
            fn created_at(&self) -> DateTime<Utc> {
                self.created_at
            }
        }
    };
}

sluggable!(Movie, title);
sluggable!(Book, title);
sluggable!(Trip, name);
sluggable!(Restaurant, name);

fn slug_taken<E: Sluggable>(rows: &[E], slug: &Slug) -> bool {
    rows.iter().any(|row| row.slug() == Some(slug))
}

fn existing<E: Sluggable>(rows: &Mutex<Vec<E>>) -> HashSet<String> {
    rows.lock()
        .unwrap()
        .iter()
        .filter_map(|row| row.slug().map(|s| s.as_str().to_string()))
        .collect()
}

fn unslugged<E: Sluggable>(rows: &Mutex<Vec<E>>) -> Vec<UnsluggedRecord> {
    let mut pending: Vec<E> = rows
        .lock()
        .unwrap()
        .iter()
        .filter(|row| row.slug().is_none())
        .cloned()
        .collect();
    pending.sort_by_key(|row| (row.created_at(), row.id()));
    pending
        .into_iter()
        .map(|row| UnsluggedRecord {
            id: row.id(),
            title: row.title().to_string(),
        })
        .collect()
}

fn assign<E: Sluggable>(rows: &Mutex<Vec<E>>, id: RecordId, slug: &Slug) -> DomainResult<()> {
    let mut rows = rows.lock().unwrap();
    if slug_taken(&rows, slug) {
        return Err(DomainError::Conflict(format!("slug already exists: {slug}")));
    }
    let row = rows
        .iter_mut()
        .find(|row| row.id() == id && row.slug().is_none())
        .ok_or_else(|| DomainError::NotFound(format!("{id} not found or already has a slug")))?;
    row.set_slug(slug.clone());
    Ok(())
}

fn newest_first<E: Sluggable>(rows: &Mutex<Vec<E>>) -> Vec<E> {
    let mut all = rows.lock().unwrap().clone();
    all.sort_by_key(|row| std::cmp::Reverse((row.created_at(), row.id())));
    all
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&self) -> RecordId {
        RecordId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1).unwrap()
    }

    /// Insert a row the way it looked before slugs existed.
    pub fn seed_legacy(&self, kind: EntityKind, title: &str, created_at: DateTime<Utc>) -> RecordId {
        self.seed(kind, title, None, created_at)
    }

    /// Insert a row that already carries `slug`, stored verbatim.
    pub fn seed_slugged(
        &self,
        kind: EntityKind,
        title: &str,
        slug: &str,
        created_at: DateTime<Utc>,
    ) -> RecordId {
        self.seed(kind, title, Some(Slug::from_stored(slug)), created_at)
    }

    fn seed(
        &self,
        kind: EntityKind,
        title: &str,
        slug: Option<Slug>,
        created_at: DateTime<Utc>,
    ) -> RecordId {
        let id = self.allocate_id();
        match kind {
            EntityKind::Movie => self.movies.lock().unwrap().push(Movie {
                id,
                slug,
                details: MovieDetails {
                    title: Title::new("title", title).unwrap(),
                    director: None,
                    release_year: None,
                    rating: None,
                    watched_on: None,
                    poster_url: None,
                    notes: None,
                },
                created_at,
                updated_at: created_at,
            }),
            EntityKind::Book => self.books.lock().unwrap().push(Book {
                id,
                slug,
                details: BookDetails {
                    title: Title::new("title", title).unwrap(),
                    author: None,
                    rating: None,
                    finished_on: None,
                    cover_url: None,
                    notes: None,
                },
                created_at,
                updated_at: created_at,
            }),
            EntityKind::Trip => self.trips.lock().unwrap().push(Trip {
                id,
                slug,
                details: TripDetails {
                    name: Title::new("name", title).unwrap(),
                    destination: None,
                    started_on: None,
                    ended_on: None,
                    cover_url: None,
                    notes: None,
                },
                created_at,
                updated_at: created_at,
            }),
            EntityKind::Restaurant => self.restaurants.lock().unwrap().push(Restaurant {
                id,
                slug,
                details: RestaurantDetails {
                    name: Title::new("name", title).unwrap(),
                    city: None,
                    cuisine: None,
                    rating: None,
                    visited_on: None,
                    notes: None,
                },
                created_at,
                updated_at: created_at,
            }),
        }
        id
    }

    pub fn slug_of(&self, kind: EntityKind, id: RecordId) -> Option<String> {
        fn find<E: Sluggable>(rows: &Mutex<Vec<E>>, id: RecordId) -> Option<String> {
            rows.lock()
                .unwrap()
                .iter()
                .find(|row| row.id() == id)
                .and_then(|row| row.slug().map(|s| s.as_str().to_string()))
        }
        match kind {
            EntityKind::Movie => find(&self.movies, id),
            EntityKind::Book => find(&self.books, id),
            EntityKind::Trip => find(&self.trips, id),
            EntityKind::Restaurant => find(&self.restaurants, id),
        }
    }
}

macro_rules! sluggable_repository {
    ($repo:ident, $entity:ident, $new:ident, $details:ident, $rows:ident, $label:literal) => {
        #[async_trait]
        impl $repo for InMemoryCatalog {
            async fn insert(&self, record: $new) -> DomainResult<$entity> {
                let id = self.allocate_id();
                let mut rows = self.$rows.lock().unwrap();
                if slug_taken(&rows, &record.slug) {
                    return Err(DomainError::Conflict(format!(
                        "slug already exists ({}_slug_key)",
                        stringify!($rows)
                    )));
                }
                let entity = $entity {
                    id,
                    slug: Some(record.slug),
                    details: record.details,
                    created_at: record.created_at,
                    updated_at: record.created_at,
                };
                rows.push(entity.clone());
                Ok(entity)
            }

            async fn update(
                &self,
                id: RecordId,
                details: $details,
                updated_at: DateTime<Utc>,
            ) -> DomainResult<$entity> {
                let mut rows = self.$rows.lock().unwrap();
                let row = rows
                    .iter_mut()
                    .find(|row| row.id == id)
                    .ok_or_else(|| DomainError::NotFound(concat!($label, " not found").into()))?;
                row.details = details;
                row.updated_at = updated_at;
                Ok(row.clone())
            }

            async fn delete(&self, id: RecordId) -> DomainResult<()> {
                let mut rows = self.$rows.lock().unwrap();
                let before = rows.len();
                rows.retain(|row| row.id != id);
                if rows.len() == before {
                    return Err(DomainError::NotFound(concat!($label, " not found").into()));
                }
                Ok(())
            }

            async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<$entity>> {
                Ok(self
                    .$rows
                    .lock()
                    .unwrap()
                    .iter()
                    .find(|row| row.id == id)
                    .cloned())
            }

            async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<$entity>> {
                Ok(self
                    .$rows
                    .lock()
                    .unwrap()
                    .iter()
                    .find(|row| row.slug.as_ref().is_some_and(|s| s.as_str() == slug))
                    .cloned())
            }

            async fn list(&self) -> DomainResult<Vec<$entity>> {
                Ok(newest_first(&self.$rows))
            }
        }
    };
}

sluggable_repository!(MovieRepository, Movie, NewMovie, MovieDetails, movies, "movie");
sluggable_repository!(BookRepository, Book, NewBook, BookDetails, books, "book");
sluggable_repository!(TripRepository, Trip, NewTrip, TripDetails, trips, "trip");
sluggable_repository!(
    RestaurantRepository,
    Restaurant,
    NewRestaurant,
    RestaurantDetails,
    restaurants,
    "restaurant"
);

#[async_trait]
impl SlugRepository for InMemoryCatalog {
    async fn existing_slugs(&self, kind: EntityKind) -> DomainResult<HashSet<String>> {
        Ok(match kind {
            EntityKind::Movie => existing(&self.movies),
            EntityKind::Book => existing(&self.books),
            EntityKind::Trip => existing(&self.trips),
            EntityKind::Restaurant => existing(&self.restaurants),
        })
    }

    async fn list_unslugged(&self, kind: EntityKind) -> DomainResult<Vec<UnsluggedRecord>> {
        Ok(match kind {
            EntityKind::Movie => unslugged(&self.movies),
            EntityKind::Book => unslugged(&self.books),
            EntityKind::Trip => unslugged(&self.trips),
            EntityKind::Restaurant => unslugged(&self.restaurants),
        })
    }

    async fn assign_slug(&self, kind: EntityKind, id: RecordId, slug: &Slug) -> DomainResult<()> {
        match kind {
            EntityKind::Movie => assign(&self.movies, id, slug),
            EntityKind::Book => assign(&self.books, id, slug),
            EntityKind::Trip => assign(&self.trips, id, slug),
            EntityKind::Restaurant => assign(&self.restaurants, id, slug),
        }
    }
}
