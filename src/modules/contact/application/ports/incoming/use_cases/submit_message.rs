use async_trait::async_trait;

use crate::modules::contact::domain::entities::{ContactMessage, ContactMessageCreate};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitMessageError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SubmitMessageUseCase: Send + Sync {
    async fn execute(&self, input: ContactMessageCreate)
        -> Result<ContactMessage, SubmitMessageError>;
}
