// src/domain/slug/backfill.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::DomainResult;
use crate::domain::slug::allocator::allocate_unique_slug;
use crate::domain::slug::repository::{SlugRepository, UnsluggedRecord};
use crate::domain::slug::value_objects::{EntityKind, Slug};
use crate::domain::values::RecordId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackfillFailure {
    pub id: RecordId,
    pub reason: String,
}

/// Outcome of one pass over a single kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackfillReport {
    pub kind: EntityKind,
    pub assigned: Vec<(RecordId, Slug)>,
    pub failures: Vec<BackfillFailure>,
}

impl BackfillReport {
    fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            assigned: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// One-off migration that gives legacy rows a slug.
pub struct SlugBackfill {
    repo: Arc<dyn SlugRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl SlugBackfill {
    pub fn new(repo: Arc<dyn SlugRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self { repo, generator }
    }

    /// Backfill every kind. Kinds do not share state and run concurrently.
    pub async fn run_all(&self) -> Vec<DomainResult<BackfillReport>> {
        let (movies, books, trips, restaurants) = tokio::join!(
            self.run_kind(EntityKind::Movie),
            self.run_kind(EntityKind::Book),
            self.run_kind(EntityKind::Trip),
            self.run_kind(EntityKind::Restaurant),
        );
        vec![movies, books, trips, restaurants]
    }

    /// Backfill one kind sequentially, in creation order.
    ///
    /// Failing to load the working set aborts the kind. A failed row write
    /// is recorded and skipped, and its slug is not added to the working
    /// set since it was never stored.
    pub async fn run_kind(&self, kind: EntityKind) -> DomainResult<BackfillReport> {
        let mut taken = self.repo.existing_slugs(kind).await?;
        let pending = self.repo.list_unslugged(kind).await?;
        tracing::info!(%kind, pending = pending.len(), taken = taken.len(), "starting slug backfill");

        let mut report = BackfillReport::new(kind);
        for record in pending {
            let candidate = allocate_unique_slug(&self.base_slug(kind, &record), &taken);
            let outcome = match Slug::new(candidate) {
                Ok(slug) => self
                    .repo
                    .assign_slug(kind, record.id, &slug)
                    .await
                    .map(|()| slug),
                Err(err) => Err(err),
            };

            match outcome {
                Ok(slug) => {
                    tracing::info!(%kind, id = %record.id, %slug, "slug assigned");
                    taken.insert(slug.as_str().to_string());
                    report.assigned.push((record.id, slug));
                }
                Err(err) => {
                    tracing::error!(%kind, id = %record.id, error = %err, "failed to assign slug");
                    report.failures.push(BackfillFailure {
                        id: record.id,
                        reason: err.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            %kind,
            assigned = report.assigned.len(),
            failed = report.failures.len(),
            "slug backfill finished"
        );
        Ok(report)
    }

    // Legacy titles can normalise to nothing; fall back to `<kind>-<id>` so the row stays addressable.
    fn base_slug(&self, kind: EntityKind, record: &UnsluggedRecord) -> String {
        let base = self.generator.slugify(&record.title);
        if base.is_empty() {
            format!("{}-{}", kind.as_str(), record.id)
        } else {
            base
        }
    }
}
