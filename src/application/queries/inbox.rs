// src/application/queries/inbox.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{ContactMessageDto, SuggestionDto},
        error::ApplicationResult,
    },
    domain::inbox::{ContactMessageRepository, SuggestionRepository},
};

pub struct InboxQueryService {
    suggestions: Arc<dyn SuggestionRepository>,
    contact_messages: Arc<dyn ContactMessageRepository>,
}

impl InboxQueryService {
    pub fn new(
        suggestions: Arc<dyn SuggestionRepository>,
        contact_messages: Arc<dyn ContactMessageRepository>,
    ) -> Self {
        Self {
            suggestions,
            contact_messages,
        }
    }

    pub async fn list_suggestions(&self, pending_only: bool) -> ApplicationResult<Vec<SuggestionDto>> {
        let items = self.suggestions.list(pending_only).await?;
        Ok(items.into_iter().map(Into::into).collect())
    }

    pub async fn list_contact_messages(
        &self,
        unread_only: bool,
    ) -> ApplicationResult<Vec<ContactMessageDto>> {
        let items = self.contact_messages.list(unread_only).await?;
        Ok(items.into_iter().map(Into::into).collect())
    }
}
