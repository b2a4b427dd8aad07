// src/domain/slug/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::slug::value_objects::{EntityKind, Slug};
use crate::domain::values::RecordId;
use async_trait::async_trait;
use std::collections::HashSet;

/// Legacy row that predates slug support.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsluggedRecord {
    pub id: RecordId,
    pub title: String,
}

#[async_trait]
pub trait SlugRepository: Send + Sync {
    /// Every non-null slug currently stored for `kind`.
    async fn existing_slugs(&self, kind: EntityKind) -> DomainResult<HashSet<String>>;

    /// Rows of `kind` without a slug, oldest first.
    async fn list_unslugged(&self, kind: EntityKind) -> DomainResult<Vec<UnsluggedRecord>>;

    /// Store `slug` on a row that still has none.
    async fn assign_slug(&self, kind: EntityKind, id: RecordId, slug: &Slug) -> DomainResult<()>;
}
