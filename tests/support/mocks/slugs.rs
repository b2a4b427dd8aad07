// tests/support/mocks/slugs.rs
//! `SlugRepository` wrappers that inject the failures the slug core must survive.
use async_trait::async_trait;
use shelf::domain::errors::{DomainError, DomainResult};
use shelf::domain::slug::{EntityKind, Slug, SlugRepository, UnsluggedRecord};
use shelf::domain::values::RecordId;
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Reports no existing slugs for the first `stale_reads` snapshots, as if a
/// concurrent writer committed right after each read.
pub struct StaleSlugs {
    inner: Arc<dyn SlugRepository>,
    stale_reads: AtomicUsize,
    reads: AtomicUsize,
}

impl StaleSlugs {
    pub fn new(inner: Arc<dyn SlugRepository>, stale_reads: usize) -> Self {
        Self {
            inner,
            stale_reads: AtomicUsize::new(stale_reads),
            reads: AtomicUsize::new(0),
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SlugRepository for StaleSlugs {
    async fn existing_slugs(&self, kind: EntityKind) -> DomainResult<HashSet<String>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let stale = self
            .stale_reads
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .is_ok();
        if stale {
            return Ok(HashSet::new());
        }
        self.inner.existing_slugs(kind).await
    }

    async fn list_unslugged(&self, kind: EntityKind) -> DomainResult<Vec<UnsluggedRecord>> {
        self.inner.list_unslugged(kind).await
    }

    async fn assign_slug(&self, kind: EntityKind, id: RecordId, slug: &Slug) -> DomainResult<()> {
        self.inner.assign_slug(kind, id, slug).await
    }
}

/// Fails the write for chosen rows and passes everything else through.
pub struct FailingAssign {
    inner: Arc<dyn SlugRepository>,
    failing: HashSet<RecordId>,
}

impl FailingAssign {
    pub fn new(inner: Arc<dyn SlugRepository>, failing: impl IntoIterator<Item = RecordId>) -> Self {
        Self {
            inner,
            failing: failing.into_iter().collect(),
        }
    }
}

#[async_trait]
impl SlugRepository for FailingAssign {
    async fn existing_slugs(&self, kind: EntityKind) -> DomainResult<HashSet<String>> {
        self.inner.existing_slugs(kind).await
    }

    async fn list_unslugged(&self, kind: EntityKind) -> DomainResult<Vec<UnsluggedRecord>> {
        self.inner.list_unslugged(kind).await
    }

    async fn assign_slug(&self, kind: EntityKind, id: RecordId, slug: &Slug) -> DomainResult<()> {
        if self.failing.contains(&id) {
            return Err(DomainError::Persistence(format!(
                "simulated write failure for {kind} {id}"
            )));
        }
        self.inner.assign_slug(kind, id, slug).await
    }
}
