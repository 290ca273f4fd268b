use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;

use crate::modules::contact::application::ports::outgoing::{
    ContactMessageRepository, ContactMessageRepositoryError,
};
use crate::modules::contact::domain::entities::ContactMessage;
use crate::modules::portfolio::application::ports::outgoing::{
    NewPortfolioData, PortfolioRepository, PortfolioRepositoryError,
};
use crate::modules::portfolio::domain::entities::{Portfolio, PortfolioUpdate};

mock! {
    pub PortfolioRepo {}
    #[async_trait]
    impl PortfolioRepository for PortfolioRepo {
        async fn find_active(&self) -> Result<Option<Portfolio>, PortfolioRepositoryError>;

        async fn upsert_active(
            &self,
            data: NewPortfolioData,
        ) -> Result<Portfolio, PortfolioRepositoryError>;

        async fn patch_active(
            &self,
            data: PortfolioUpdate,
            updated_at: DateTime<Utc>,
        ) -> Result<Portfolio, PortfolioRepositoryError>;

        async fn insert_if_absent(
            &self,
            portfolio: Portfolio,
        ) -> Result<bool, PortfolioRepositoryError>;
    }
}

mock! {
    pub ContactMessageRepo {}
    #[async_trait]
    impl ContactMessageRepository for ContactMessageRepo {
        async fn insert(
            &self,
            message: ContactMessage,
        ) -> Result<ContactMessage, ContactMessageRepositoryError>;

        async fn list_recent(
            &self,
            limit: u64,
        ) -> Result<Vec<ContactMessage>, ContactMessageRepositoryError>;

        async fn mark_replied(&self, message_id: &str) -> Result<(), ContactMessageRepositoryError>;
    }
}
