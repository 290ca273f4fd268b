use async_trait::async_trait;

use crate::modules::contact::domain::entities::ContactMessage;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactMessageRepositoryError {
    #[error("Message not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    async fn insert(
        &self,
        message: ContactMessage,
    ) -> Result<ContactMessage, ContactMessageRepositoryError>;

    /// Newest first, at most `limit` records.
    async fn list_recent(&self, limit: u64)
        -> Result<Vec<ContactMessage>, ContactMessageRepositoryError>;

    /// Returns `NotFound` when no message has this id.
    async fn mark_replied(&self, message_id: &str) -> Result<(), ContactMessageRepositoryError>;
}
