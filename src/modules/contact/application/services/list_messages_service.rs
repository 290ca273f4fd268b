use async_trait::async_trait;

use crate::modules::contact::application::ports::incoming::use_cases::{
    ListMessagesError, ListMessagesUseCase, MESSAGE_LIST_LIMIT,
};
use crate::modules::contact::application::ports::outgoing::ContactMessageRepository;
use crate::modules::contact::domain::entities::ContactMessage;

pub struct ListMessagesService<R>
where
    R: ContactMessageRepository,
{
    repository: R,
}

impl<R> ListMessagesService<R>
where
    R: ContactMessageRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListMessagesUseCase for ListMessagesService<R>
where
    R: ContactMessageRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ContactMessage>, ListMessagesError> {
        self.repository
            .list_recent(MESSAGE_LIST_LIMIT)
            .await
            .map_err(|e| ListMessagesError::RepositoryError(e.to_string()))
    }
}
