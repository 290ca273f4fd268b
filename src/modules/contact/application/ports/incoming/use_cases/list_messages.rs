use async_trait::async_trait;

use crate::modules::contact::domain::entities::ContactMessage;

pub const MESSAGE_LIST_LIMIT: u64 = 100;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListMessagesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListMessagesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ContactMessage>, ListMessagesError>;
}
