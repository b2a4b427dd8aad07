// src/application/commands/inbox.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{ContactMessageDto, ContactMessageInput, SuggestionDto, SuggestionInput},
        error::ApplicationResult,
        ports::time::Clock,
    },
    domain::{
        inbox::{ContactMessageRepository, SuggestionRepository},
        values::RecordId,
    },
};

/// Writes to the two public inboxes: suggestions and contact messages.
pub struct InboxCommandService {
    suggestions: Arc<dyn SuggestionRepository>,
    contact_messages: Arc<dyn ContactMessageRepository>,
    clock: Arc<dyn Clock>,
}

impl InboxCommandService {
    pub fn new(
        suggestions: Arc<dyn SuggestionRepository>,
        contact_messages: Arc<dyn ContactMessageRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            suggestions,
            contact_messages,
            clock,
        }
    }

    pub async fn submit_suggestion(
        &self,
        input: SuggestionInput,
    ) -> ApplicationResult<SuggestionDto> {
        let suggestion = input.into_new(self.clock.now())?;
        let created = self.suggestions.insert(suggestion).await?;
        tracing::info!(id = %created.id, category = %created.category, "suggestion received");
        Ok(created.into())
    }

    pub async fn mark_suggestion_handled(&self, id: i64) -> ApplicationResult<SuggestionDto> {
        let id = RecordId::new(id)?;
        Ok(self.suggestions.mark_handled(id).await?.into())
    }

    pub async fn delete_suggestion(&self, id: i64) -> ApplicationResult<()> {
        let id = RecordId::new(id)?;
        self.suggestions.delete(id).await?;
        Ok(())
    }

    pub async fn submit_contact_message(
        &self,
        input: ContactMessageInput,
    ) -> ApplicationResult<ContactMessageDto> {
        let message = input.into_new(self.clock.now())?;
        let created = self.contact_messages.insert(message).await?;
        tracing::info!(id = %created.id, "contact message received");
        Ok(created.into())
    }

    pub async fn mark_contact_message_read(
        &self,
        id: i64,
    ) -> ApplicationResult<ContactMessageDto> {
        let id = RecordId::new(id)?;
        Ok(self.contact_messages.mark_read(id).await?.into())
    }

    pub async fn delete_contact_message(&self, id: i64) -> ApplicationResult<()> {
        let id = RecordId::new(id)?;
        self.contact_messages.delete(id).await?;
        Ok(())
    }
}
