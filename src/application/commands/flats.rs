// src/application/commands/flats.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{FlatDto, FlatInput},
        error::ApplicationResult,
        ports::time::Clock,
    },
    domain::{
        flat::{FlatRepository, NewFlat},
        values::RecordId,
    },
};

pub struct CreateFlatCommand {
    pub input: FlatInput,
}

pub struct UpdateFlatCommand {
    pub id: i64,
    pub input: FlatInput,
}

pub struct DeleteFlatCommand {
    pub id: i64,
}

pub struct FlatCommandService {
    repo: Arc<dyn FlatRepository>,
    clock: Arc<dyn Clock>,
}

impl FlatCommandService {
    pub fn new(repo: Arc<dyn FlatRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn create_flat(&self, command: CreateFlatCommand) -> ApplicationResult<FlatDto> {
        let details = command.input.into_details()?;
        let created = self
            .repo
            .insert(NewFlat {
                details,
                created_at: self.clock.now(),
            })
            .await?;
        tracing::info!(id = %created.id, "flat created");
        Ok(created.into())
    }

    pub async fn update_flat(&self, command: UpdateFlatCommand) -> ApplicationResult<FlatDto> {
        let id = RecordId::new(command.id)?;
        let details = command.input.into_details()?;
        let updated = self.repo.update(id, details, self.clock.now()).await?;
        Ok(updated.into())
    }

    pub async fn delete_flat(&self, command: DeleteFlatCommand) -> ApplicationResult<()> {
        let id = RecordId::new(command.id)?;
        self.repo.delete(id).await?;
        tracing::info!(%id, "flat deleted");
        Ok(())
    }
}
