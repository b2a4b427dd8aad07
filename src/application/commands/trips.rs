// src/application/commands/trips.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{TripDto, TripInput},
        error::ApplicationResult,
        ports::time::Clock,
    },
    domain::{
        slug::{EntityKind, SlugService},
        trip::{NewTrip, TripRepository},
        values::RecordId,
    },
};

pub struct CreateTripCommand {
    pub input: TripInput,
}

pub struct UpdateTripCommand {
    pub id: i64,
    pub input: TripInput,
}

pub struct DeleteTripCommand {
    pub id: i64,
}

pub struct TripCommandService {
    repo: Arc<dyn TripRepository>,
    slug_service: Arc<SlugService>,
    clock: Arc<dyn Clock>,
}

impl TripCommandService {
    pub fn new(
        repo: Arc<dyn TripRepository>,
        slug_service: Arc<SlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            slug_service,
            clock,
        }
    }

    pub async fn create_trip(&self, command: CreateTripCommand) -> ApplicationResult<TripDto> {
        let details = command.input.into_details()?;
        let now = self.clock.now();
        let repo = &self.repo;
        let draft = &details;

        let created = self
            .slug_service
            .insert_with_unique_slug(EntityKind::Trip, details.name.as_str(), move |slug| {
                repo.insert(NewTrip {
                    slug,
                    details: draft.clone(),
                    created_at: now,
                })
            })
            .await?;

        tracing::info!(id = %created.id, slug = ?created.slug, "trip created");
        Ok(created.into())
    }

    pub async fn update_trip(&self, command: UpdateTripCommand) -> ApplicationResult<TripDto> {
        let id = RecordId::new(command.id)?;
        let details = command.input.into_details()?;
        let updated = self.repo.update(id, details, self.clock.now()).await?;
        Ok(updated.into())
    }

    pub async fn delete_trip(&self, command: DeleteTripCommand) -> ApplicationResult<()> {
        let id = RecordId::new(command.id)?;
        self.repo.delete(id).await?;
        tracing::info!(%id, "trip deleted");
        Ok(())
    }
}
