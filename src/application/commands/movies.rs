// src/application/commands/movies.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{MovieDto, MovieInput},
        error::ApplicationResult,
        ports::time::Clock,
    },
    domain::{
        movie::{MovieRepository, NewMovie},
        slug::{EntityKind, SlugService},
        values::RecordId,
    },
};

pub struct CreateMovieCommand {
    pub input: MovieInput,
}

pub struct UpdateMovieCommand {
    pub id: i64,
    pub input: MovieInput,
}

pub struct DeleteMovieCommand {
    pub id: i64,
}

pub struct MovieCommandService {
    repo: Arc<dyn MovieRepository>,
    slug_service: Arc<SlugService>,
    clock: Arc<dyn Clock>,
}

impl MovieCommandService {
    pub fn new(
        repo: Arc<dyn MovieRepository>,
        slug_service: Arc<SlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            slug_service,
            clock,
        }
    }

    pub async fn create_movie(&self, command: CreateMovieCommand) -> ApplicationResult<MovieDto> {
        let details = command.input.into_details()?;
        let now = self.clock.now();
        let repo = &self.repo;
        let draft = &details;

        let created = self
            .slug_service
            .insert_with_unique_slug(EntityKind::Movie, details.title.as_str(), move |slug| {
                repo.insert(NewMovie {
                    slug,
                    details: draft.clone(),
                    created_at: now,
                })
            })
            .await?;

        tracing::info!(id = %created.id, slug = ?created.slug, "movie created");
        Ok(created.into())
    }

    /// Replaces the editable fields. The slug stays as assigned at creation.
    pub async fn update_movie(&self, command: UpdateMovieCommand) -> ApplicationResult<MovieDto> {
        let id = RecordId::new(command.id)?;
        let details = command.input.into_details()?;
        let updated = self.repo.update(id, details, self.clock.now()).await?;
        Ok(updated.into())
    }

    pub async fn delete_movie(&self, command: DeleteMovieCommand) -> ApplicationResult<()> {
        let id = RecordId::new(command.id)?;
        self.repo.delete(id).await?;
        tracing::info!(%id, "movie deleted");
        Ok(())
    }
}
