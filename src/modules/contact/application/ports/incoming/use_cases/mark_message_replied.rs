use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum MarkMessageRepliedError {
    #[error("Message not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait MarkMessageRepliedUseCase: Send + Sync {
    async fn execute(&self, message_id: String) -> Result<(), MarkMessageRepliedError>;
}
