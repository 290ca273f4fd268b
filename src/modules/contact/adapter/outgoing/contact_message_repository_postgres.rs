use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;

use crate::modules::contact::adapter::outgoing::sea_orm_entity::contact_messages::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactMessageRepository, ContactMessageRepositoryError,
};
use crate::modules::contact::domain::entities::ContactMessage;
use crate::shared::domain::Email;

#[derive(Clone)]
pub struct ContactMessageRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactMessageRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactMessageRepository for ContactMessageRepositoryPostgres {
    async fn insert(
        &self,
        message: ContactMessage,
    ) -> Result<ContactMessage, ContactMessageRepositoryError> {
        let model = ActiveModel {
            id: Set(message.id),
            name: Set(message.name),
            email: Set(message.email.into()),
            message: Set(message.message),
            created_at: Set(message.created_at.fixed_offset()),
            replied: Set(message.replied),
        };

        let saved = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_message(saved)
    }

    async fn list_recent(
        &self,
        limit: u64,
    ) -> Result<Vec<ContactMessage>, ContactMessageRepositoryError> {
        Entity::find()
            .order_by_desc(Column::CreatedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(model_to_message)
            .collect()
    }

    async fn mark_replied(&self, message_id: &str) -> Result<(), ContactMessageRepositoryError> {
        let result = Entity::update_many()
            .col_expr(Column::Replied, Expr::value(true))
            .filter(Column::Id.eq(message_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ContactMessageRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn model_to_message(
    model: contact_messages::Model,
) -> Result<ContactMessage, ContactMessageRepositoryError> {
    // Addresses are validated before they are stored
    let email = Email::parse(model.email)
        .map_err(|e| ContactMessageRepositoryError::DatabaseError(e.to_string()))?;

    Ok(ContactMessage {
        id: model.id,
        name: model.name,
        email,
        message: model.message,
        created_at: model.created_at.into(),
        replied: model.replied,
    })
}

fn map_db_err(e: DbErr) -> ContactMessageRepositoryError {
    ContactMessageRepositoryError::DatabaseError(e.to_string())
}
