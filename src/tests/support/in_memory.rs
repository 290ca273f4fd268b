//! Repositories backed by process memory, for service and request-flow tests
//! that need state to persist between calls.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};

use crate::modules::contact::application::ports::outgoing::{
    ContactMessageRepository, ContactMessageRepositoryError,
};
use crate::modules::contact::domain::entities::ContactMessage;
use crate::modules::portfolio::application::default_portfolio::default_portfolio;
use crate::modules::portfolio::application::ports::outgoing::{
    NewPortfolioData, PortfolioRepository, PortfolioRepositoryError, ProjectRepository,
    ProjectRepositoryError,
};
use crate::modules::portfolio::domain::entities::{Portfolio, PortfolioUpdate, Project};

#[derive(Default, Clone)]
pub struct InMemoryPortfolioStore {
    active: Arc<Mutex<Option<Portfolio>>>,
}

impl InMemoryPortfolioStore {
    /// Holds the default portfolio, as after a first init.
    pub fn seeded() -> Self {
        let portfolio = default_portfolio(Utc::now()).unwrap();
        Self {
            active: Arc::new(Mutex::new(Some(portfolio))),
        }
    }

    pub fn snapshot(&self) -> Option<Portfolio> {
        self.active.lock().unwrap().clone()
    }
}

#[async_trait]
impl PortfolioRepository for InMemoryPortfolioStore {
    async fn find_active(&self) -> Result<Option<Portfolio>, PortfolioRepositoryError> {
        Ok(self.snapshot())
    }

    async fn upsert_active(
        &self,
        data: NewPortfolioData,
    ) -> Result<Portfolio, PortfolioRepositoryError> {
        let mut active = self.active.lock().unwrap();
        let (id, created_at) = match active.as_ref() {
            Some(existing) => (existing.id.clone(), existing.created_at),
            None => (data.id, data.now),
        };

        let portfolio = Portfolio {
            id,
            personal: data.personal,
            tech_stack: data.tech_stack,
            projects: data.projects,
            education: data.education,
            contact: data.contact,
            created_at,
            updated_at: data.now,
            active: true,
        };
        *active = Some(portfolio.clone());
        Ok(portfolio)
    }

    async fn patch_active(
        &self,
        data: PortfolioUpdate,
        updated_at: DateTime<Utc>,
    ) -> Result<Portfolio, PortfolioRepositoryError> {
        let mut active = self.active.lock().unwrap();
        let portfolio = active.as_mut().ok_or(PortfolioRepositoryError::NotFound)?;

        if data.is_empty() {
            return Ok(portfolio.clone());
        }
        if let Some(personal) = data.personal {
            portfolio.personal = personal;
        }
        if let Some(tech_stack) = data.tech_stack {
            portfolio.tech_stack = tech_stack;
        }
        if let Some(contact) = data.contact {
            portfolio.contact = contact;
        }
        portfolio.updated_at = updated_at;
        Ok(portfolio.clone())
    }

    async fn insert_if_absent(
        &self,
        portfolio: Portfolio,
    ) -> Result<bool, PortfolioRepositoryError> {
        let mut active = self.active.lock().unwrap();
        if active.is_some() {
            return Ok(false);
        }
        *active = Some(portfolio);
        Ok(true)
    }
}

#[async_trait]
impl ProjectRepository for InMemoryPortfolioStore {
    async fn list(&self) -> Result<Vec<Project>, ProjectRepositoryError> {
        self.snapshot()
            .map(|p| p.projects)
            .ok_or(ProjectRepositoryError::PortfolioNotFound)
    }

    async fn add(&self, project: Project) -> Result<Project, ProjectRepositoryError> {
        let mut active = self.active.lock().unwrap();
        let portfolio = active
            .as_mut()
            .ok_or(ProjectRepositoryError::PortfolioNotFound)?;
        portfolio.projects.push(project.clone());
        Ok(project)
    }

    async fn get(&self, project_id: &str) -> Result<Project, ProjectRepositoryError> {
        self.list()
            .await?
            .into_iter()
            .find(|p| p.id == project_id)
            .ok_or(ProjectRepositoryError::ProjectNotFound)
    }

    async fn replace(&self, project: Project) -> Result<Project, ProjectRepositoryError> {
        let mut active = self.active.lock().unwrap();
        let portfolio = active
            .as_mut()
            .ok_or(ProjectRepositoryError::PortfolioNotFound)?;
        let slot = portfolio
            .projects
            .iter_mut()
            .find(|p| p.id == project.id)
            .ok_or(ProjectRepositoryError::ProjectNotFound)?;
        *slot = project.clone();
        Ok(project)
    }

    async fn delete(&self, project_id: &str) -> Result<(), ProjectRepositoryError> {
        let mut active = self.active.lock().unwrap();
        let portfolio = active
            .as_mut()
            .ok_or(ProjectRepositoryError::PortfolioNotFound)?;
        let before = portfolio.projects.len();
        portfolio.projects.retain(|p| p.id != project_id);
        if portfolio.projects.len() == before {
            return Err(ProjectRepositoryError::ProjectNotFound);
        }
        Ok(())
    }
}

#[derive(Default, Clone)]
pub struct InMemoryContactStore {
    messages: Arc<Mutex<Vec<ContactMessage>>>,
}

#[async_trait]
impl ContactMessageRepository for InMemoryContactStore {
    async fn insert(
        &self,
        message: ContactMessage,
    ) -> Result<ContactMessage, ContactMessageRepositoryError> {
        self.messages.lock().unwrap().push(message.clone());
        Ok(message)
    }

    async fn list_recent(
        &self,
        limit: u64,
    ) -> Result<Vec<ContactMessage>, ContactMessageRepositoryError> {
        let mut messages = self.messages.lock().unwrap().clone();
        // Stable sort keeps later inserts ahead of earlier ones at equal timestamps.
        messages.reverse();
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        messages.truncate(limit as usize);
        Ok(messages)
    }

    async fn mark_replied(&self, message_id: &str) -> Result<(), ContactMessageRepositoryError> {
        let mut messages = self.messages.lock().unwrap();
        let message = messages
            .iter_mut()
            .find(|m| m.id == message_id)
            .ok_or(ContactMessageRepositoryError::NotFound)?;
        message.replied = true;
        Ok(())
    }
}
