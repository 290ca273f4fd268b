use async_trait::async_trait;

use crate::modules::contact::application::ports::incoming::use_cases::{
    MarkMessageRepliedError, MarkMessageRepliedUseCase,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactMessageRepository, ContactMessageRepositoryError,
};

pub struct MarkMessageRepliedService<R>
where
    R: ContactMessageRepository,
{
    repository: R,
}

impl<R> MarkMessageRepliedService<R>
where
    R: ContactMessageRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> MarkMessageRepliedUseCase for MarkMessageRepliedService<R>
where
    R: ContactMessageRepository + Send + Sync,
{
    async fn execute(&self, message_id: String) -> Result<(), MarkMessageRepliedError> {
        self.repository
            .mark_replied(&message_id)
            .await
            .map_err(|e| match e {
                ContactMessageRepositoryError::NotFound => MarkMessageRepliedError::NotFound,
                other => MarkMessageRepliedError::RepositoryError(other.to_string()),
            })
    }
}
