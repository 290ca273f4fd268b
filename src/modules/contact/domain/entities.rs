use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::domain::Email;

/// A message left through the public contact form.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: Email,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub replied: bool,
}

impl ContactMessage {
    pub fn receive(input: ContactMessageCreate, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            email: input.email,
            message: input.message,
            created_at: now,
            replied: false,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct ContactMessageCreate {
    #[schema(example = "Jane Doe")]
    pub name: String,
    pub email: Email,
    #[schema(example = "Hello! I'd like to talk about a project.")]
    pub message: String,
}
