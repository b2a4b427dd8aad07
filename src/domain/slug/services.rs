// src/domain/slug/services.rs
use std::{future::Future, sync::Arc};

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::allocator::allocate_unique_slug;
use crate::domain::slug::repository::SlugRepository;
use crate::domain::slug::value_objects::{EntityKind, Slug};

/// How many times a create is re-attempted after losing a slug race.
pub const CONFLICT_RETRIES: usize = 1;

/// Domain service that hands out per-kind unique slugs for new records.
pub struct SlugService {
    repo: Arc<dyn SlugRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl SlugService {
    pub fn new(repo: Arc<dyn SlugRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self { repo, generator }
    }

    /// Normalised base slug for `title`, rejecting titles with nothing sluggable in them.
    pub fn base_slug(&self, kind: EntityKind, title: &str) -> DomainResult<String> {
        let base = self.generator.slugify(title);
        if base.is_empty() {
            return Err(DomainError::Validation(format!(
                "{} must contain at least one ASCII letter or digit",
                kind.title_column()
            )));
        }
        Ok(base)
    }

    /// Allocate against a fresh snapshot of the slugs stored for `kind`.
    pub async fn allocate(&self, kind: EntityKind, base: &str) -> DomainResult<Slug> {
        let existing = self.repo.existing_slugs(kind).await?;
        let candidate = allocate_unique_slug(base, &existing);
        tracing::debug!(%kind, base, slug = %candidate, taken = existing.len(), "allocated slug");
        Slug::new(candidate)
    }

    /// Run `insert` with a freshly allocated slug.
    ///
    /// The snapshot read and the insert are not atomic, so a concurrent
    /// create can claim the same slug first. The storage unique constraint
    /// reports that as a conflict; allocation is then repeated against a
    /// re-read snapshot up to [`CONFLICT_RETRIES`] times.
    pub async fn insert_with_unique_slug<T, F, Fut>(
        &self,
        kind: EntityKind,
        title: &str,
        mut insert: F,
    ) -> DomainResult<T>
    where
        F: FnMut(Slug) -> Fut + Send,
        Fut: Future<Output = DomainResult<T>> + Send,
        T: Send,
    {
        let base = self.base_slug(kind, title)?;
        let mut attempt = 0;

        loop {
            let slug = self.allocate(kind, &base).await?;
            match insert(slug.clone()).await {
                Err(DomainError::Conflict(reason)) if attempt < CONFLICT_RETRIES => {
                    attempt += 1;
                    tracing::warn!(%kind, %slug, %reason, attempt, "slug taken concurrently, retrying");
                }
                other => return other,
            }
        }
    }
}
