use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::modules::contact::application::ports::incoming::use_cases::{
    SubmitMessageError, SubmitMessageUseCase,
};
use crate::modules::contact::application::ports::outgoing::ContactMessageRepository;
use crate::modules::contact::domain::entities::{ContactMessage, ContactMessageCreate};

pub struct SubmitMessageService<R>
where
    R: ContactMessageRepository,
{
    repository: R,
}

impl<R> SubmitMessageService<R>
where
    R: ContactMessageRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SubmitMessageUseCase for SubmitMessageService<R>
where
    R: ContactMessageRepository + Send + Sync,
{
    async fn execute(
        &self,
        input: ContactMessageCreate,
    ) -> Result<ContactMessage, SubmitMessageError> {
        let message = ContactMessage::receive(input, Utc::now());

        let saved = self
            .repository
            .insert(message)
            .await
            .map_err(|e| SubmitMessageError::RepositoryError(e.to_string()))?;

        info!(message_id = %saved.id, "Contact message received");
        Ok(saved)
    }
}
