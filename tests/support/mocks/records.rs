// tests/support/mocks/records.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shelf::domain::errors::{DomainError, DomainResult};
use shelf::domain::feed::{FeedCursor, FeedPost, FeedPostContent, FeedRepository, NewFeedPost};
use shelf::domain::flat::{Flat, FlatDetails, FlatRepository, FlatStatus, NewFlat};
use shelf::domain::inbox::{
    ContactMessage, ContactMessageRepository, NewContactMessage, NewSuggestion, Suggestion,
    SuggestionRepository,
};
use shelf::domain::values::RecordId;
use std::cmp::Reverse;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

fn next(counter: &AtomicI64) -> RecordId {
    RecordId::new(counter.fetch_add(1, Ordering::SeqCst) + 1).unwrap()
}

#[derive(Default)]
pub struct InMemoryFlats {
    next_id: AtomicI64,
    rows: Mutex<Vec<Flat>>,
}

#[async_trait]
impl FlatRepository for InMemoryFlats {
    async fn insert(&self, flat: NewFlat) -> DomainResult<Flat> {
        let flat = Flat {
            id: next(&self.next_id),
            details: flat.details,
            created_at: flat.created_at,
            updated_at: flat.created_at,
        };
        self.rows.lock().unwrap().push(flat.clone());
        Ok(flat)
    }

    async fn update(
        &self,
        id: RecordId,
        details: FlatDetails,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Flat> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or_else(|| DomainError::NotFound("flat not found".into()))?;
        row.details = details;
        row.updated_at = updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: RecordId) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| row.id != id);
        if rows.len() == before {
            return Err(DomainError::NotFound("flat not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<Flat>> {
        Ok(self.rows.lock().unwrap().iter().find(|row| row.id == id).cloned())
    }

    async fn list(&self, status: Option<FlatStatus>) -> DomainResult<Vec<Flat>> {
        let mut rows: Vec<Flat> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| status.is_none_or(|s| row.details.status == s))
            .cloned()
            .collect();
        rows.sort_by_key(|row| Reverse((row.created_at, row.id)));
        Ok(rows)
    }
}

#[derive(Default)]
pub struct InMemoryFeed {
    next_id: AtomicI64,
    rows: Mutex<Vec<FeedPost>>,
}

impl InMemoryFeed {
    /// Insert a post with an explicit timestamp, bypassing the clock.
    pub fn seed(&self, body: &str, created_at: DateTime<Utc>) -> RecordId {
        let id = next(&self.next_id);
        self.rows.lock().unwrap().push(FeedPost {
            id,
            content: FeedPostContent {
                body: shelf::domain::feed::PostBody::new(body).unwrap(),
                image_url: None,
                link_url: None,
            },
            created_at,
            updated_at: created_at,
        });
        id
    }
}

#[async_trait]
impl FeedRepository for InMemoryFeed {
    async fn insert(&self, post: NewFeedPost) -> DomainResult<FeedPost> {
        let post = FeedPost {
            id: next(&self.next_id),
            content: post.content,
            created_at: post.created_at,
            updated_at: post.created_at,
        };
        self.rows.lock().unwrap().push(post.clone());
        Ok(post)
    }

    async fn update(
        &self,
        id: RecordId,
        content: FeedPostContent,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<FeedPost> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or_else(|| DomainError::NotFound("feed post not found".into()))?;
        row.content = content;
        row.updated_at = updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: RecordId) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| row.id != id);
        if rows.len() == before {
            return Err(DomainError::NotFound("feed post not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<FeedPost>> {
        Ok(self.rows.lock().unwrap().iter().find(|row| row.id == id).cloned())
    }

    async fn list_page(
        &self,
        limit: u32,
        cursor: Option<FeedCursor>,
    ) -> DomainResult<(Vec<FeedPost>, Option<FeedCursor>)> {
        let mut rows: Vec<FeedPost> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| {
                cursor
                    .as_ref()
                    .is_none_or(|c| (row.created_at, row.id) < (c.created_at, c.id))
            })
            .cloned()
            .collect();
        rows.sort_by_key(|row| Reverse((row.created_at, row.id)));

        let limit = limit as usize;
        let next_cursor = if rows.len() > limit {
            rows.truncate(limit);
            rows.last().map(|last| FeedCursor::new(last.created_at, last.id))
        } else {
            None
        };
        Ok((rows, next_cursor))
    }
}

#[derive(Default)]
pub struct InMemoryInbox {
    next_id: AtomicI64,
    suggestions: Mutex<Vec<Suggestion>>,
    messages: Mutex<Vec<ContactMessage>>,
}

#[async_trait]
impl SuggestionRepository for InMemoryInbox {
    async fn insert(&self, suggestion: NewSuggestion) -> DomainResult<Suggestion> {
        let suggestion = Suggestion {
            id: next(&self.next_id),
            category: suggestion.category,
            title: suggestion.title,
            author_name: suggestion.author_name,
            message: suggestion.message,
            handled: false,
            created_at: suggestion.created_at,
        };
        self.suggestions.lock().unwrap().push(suggestion.clone());
        Ok(suggestion)
    }

    async fn list(&self, pending_only: bool) -> DomainResult<Vec<Suggestion>> {
        let mut rows: Vec<Suggestion> = self
            .suggestions
            .lock()
            .unwrap()
            .iter()
            .filter(|row| !pending_only || !row.handled)
            .cloned()
            .collect();
        rows.sort_by_key(|row| Reverse((row.created_at, row.id)));
        Ok(rows)
    }

    async fn mark_handled(&self, id: RecordId) -> DomainResult<Suggestion> {
        let mut rows = self.suggestions.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or_else(|| DomainError::NotFound("suggestion not found".into()))?;
        row.handled = true;
        Ok(row.clone())
    }

    async fn delete(&self, id: RecordId) -> DomainResult<()> {
        let mut rows = self.suggestions.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| row.id != id);
        if rows.len() == before {
            return Err(DomainError::NotFound("suggestion not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ContactMessageRepository for InMemoryInbox {
    async fn insert(&self, message: NewContactMessage) -> DomainResult<ContactMessage> {
        let message = ContactMessage {
            id: next(&self.next_id),
            name: message.name,
            email: message.email,
            message: message.message,
            read: false,
            created_at: message.created_at,
        };
        self.messages.lock().unwrap().push(message.clone());
        Ok(message)
    }

    async fn list(&self, unread_only: bool) -> DomainResult<Vec<ContactMessage>> {
        let mut rows: Vec<ContactMessage> = self
            .messages
            .lock()
            .unwrap()
            .iter()
            .filter(|row| !unread_only || !row.read)
            .cloned()
            .collect();
        rows.sort_by_key(|row| Reverse((row.created_at, row.id)));
        Ok(rows)
    }

    async fn mark_read(&self, id: RecordId) -> DomainResult<ContactMessage> {
        let mut rows = self.messages.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or_else(|| DomainError::NotFound("contact message not found".into()))?;
        row.read = true;
        Ok(row.clone())
    }

    async fn delete(&self, id: RecordId) -> DomainResult<()> {
        let mut rows = self.messages.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| row.id != id);
        if rows.len() == before {
            return Err(DomainError::NotFound("contact message not found".into()));
        }
        Ok(())
    }
}
