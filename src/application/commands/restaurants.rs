// src/application/commands/restaurants.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{RestaurantDto, RestaurantInput},
        error::ApplicationResult,
        ports::time::Clock,
    },
    domain::{
        restaurant::{NewRestaurant, RestaurantRepository},
        slug::{EntityKind, SlugService},
        values::RecordId,
    },
};

pub struct CreateRestaurantCommand {
    pub input: RestaurantInput,
}

pub struct UpdateRestaurantCommand {
    pub id: i64,
    pub input: RestaurantInput,
}

pub struct DeleteRestaurantCommand {
    pub id: i64,
}

pub struct RestaurantCommandService {
    repo: Arc<dyn RestaurantRepository>,
    slug_service: Arc<SlugService>,
    clock: Arc<dyn Clock>,
}

impl RestaurantCommandService {
    pub fn new(
        repo: Arc<dyn RestaurantRepository>,
        slug_service: Arc<SlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            slug_service,
            clock,
        }
    }

    pub async fn create_restaurant(
        &self,
        command: CreateRestaurantCommand,
    ) -> ApplicationResult<RestaurantDto> {
        let details = command.input.into_details()?;
        let now = self.clock.now();
        let repo = &self.repo;
        let draft = &details;

        let created = self
            .slug_service
            .insert_with_unique_slug(EntityKind::Restaurant, details.name.as_str(), move |slug| {
                repo.insert(NewRestaurant {
                    slug,
                    details: draft.clone(),
                    created_at: now,
                })
            })
            .await?;

        tracing::info!(id = %created.id, slug = ?created.slug, "restaurant created");
        Ok(created.into())
    }

    pub async fn update_restaurant(
        &self,
        command: UpdateRestaurantCommand,
    ) -> ApplicationResult<RestaurantDto> {
        let id = RecordId::new(command.id)?;
        let details = command.input.into_details()?;
        let updated = self.repo.update(id, details, self.clock.now()).await?;
        Ok(updated.into())
    }

    pub async fn delete_restaurant(
        &self,
        command: DeleteRestaurantCommand,
    ) -> ApplicationResult<()> {
        let id = RecordId::new(command.id)?;
        self.repo.delete(id).await?;
        tracing::info!(%id, "restaurant deleted");
        Ok(())
    }
}
