// src/application/commands/books.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{BookDto, BookInput},
        error::ApplicationResult,
        ports::time::Clock,
    },
    domain::{
        book::{BookRepository, NewBook},
        slug::{EntityKind, SlugService},
        values::RecordId,
    },
};

pub struct CreateBookCommand {
    pub input: BookInput,
}

pub struct UpdateBookCommand {
    pub id: i64,
    pub input: BookInput,
}

pub struct DeleteBookCommand {
    pub id: i64,
}

pub struct BookCommandService {
    repo: Arc<dyn BookRepository>,
    slug_service: Arc<SlugService>,
    clock: Arc<dyn Clock>,
}

impl BookCommandService {
    pub fn new(
        repo: Arc<dyn BookRepository>,
        slug_service: Arc<SlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            slug_service,
            clock,
        }
    }

    pub async fn create_book(&self, command: CreateBookCommand) -> ApplicationResult<BookDto> {
        let details = command.input.into_details()?;
        let now = self.clock.now();
        let repo = &self.repo;
        let draft = &details;

        let created = self
            .slug_service
            .insert_with_unique_slug(EntityKind::Book, details.title.as_str(), move |slug| {
                repo.insert(NewBook {
                    slug,
                    details: draft.clone(),
                    created_at: now,
                })
            })
            .await?;

        tracing::info!(id = %created.id, slug = ?created.slug, "book created");
        Ok(created.into())
    }

    pub async fn update_book(&self, command: UpdateBookCommand) -> ApplicationResult<BookDto> {
        let id = RecordId::new(command.id)?;
        let details = command.input.into_details()?;
        let updated = self.repo.update(id, details, self.clock.now()).await?;
        Ok(updated.into())
    }

    pub async fn delete_book(&self, command: DeleteBookCommand) -> ApplicationResult<()> {
        let id = RecordId::new(command.id)?;
        self.repo.delete(id).await?;
        tracing::info!(%id, "book deleted");
        Ok(())
    }
}
