// src/application/commands/feed.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{FeedPostDto, FeedPostInput},
        error::ApplicationResult,
        ports::time::Clock,
    },
    domain::{
        feed::{FeedRepository, NewFeedPost},
        values::RecordId,
    },
};

pub struct CreateFeedPostCommand {
    pub input: FeedPostInput,
}

pub struct UpdateFeedPostCommand {
    pub id: i64,
    pub input: FeedPostInput,
}

pub struct DeleteFeedPostCommand {
    pub id: i64,
}

pub struct FeedCommandService {
    repo: Arc<dyn FeedRepository>,
    clock: Arc<dyn Clock>,
}

impl FeedCommandService {
    pub fn new(repo: Arc<dyn FeedRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn create_post(
        &self,
        command: CreateFeedPostCommand,
    ) -> ApplicationResult<FeedPostDto> {
        let content = command.input.into_content()?;
        let created = self
            .repo
            .insert(NewFeedPost {
                content,
                created_at: self.clock.now(),
            })
            .await?;
        tracing::info!(id = %created.id, "feed post created");
        Ok(created.into())
    }

    pub async fn update_post(
        &self,
        command: UpdateFeedPostCommand,
    ) -> ApplicationResult<FeedPostDto> {
        let id = RecordId::new(command.id)?;
        let content = command.input.into_content()?;
        let updated = self.repo.update(id, content, self.clock.now()).await?;
        Ok(updated.into())
    }

    pub async fn delete_post(&self, command: DeleteFeedPostCommand) -> ApplicationResult<()> {
        let id = RecordId::new(command.id)?;
        self.repo.delete(id).await?;
        Ok(())
    }
}
