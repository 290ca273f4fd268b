use async_trait::async_trait;

use crate::modules::contact::application::ports::incoming::use_cases::{
    ListMessagesError, ListMessagesUseCase, MarkMessageRepliedError, MarkMessageRepliedUseCase,
    SubmitMessageError, SubmitMessageUseCase,
};
use crate::modules::contact::domain::entities::{ContactMessage, ContactMessageCreate};
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    AddProjectError, AddProjectUseCase, DeleteProjectError, DeleteProjectUseCase,
    GetPortfolioError, GetPortfolioUseCase, GetProjectError, GetProjectUseCase,
    InitPortfolioError, InitPortfolioOutcome, InitPortfolioUseCase, ListProjectsError,
    ListProjectsUseCase, PatchPortfolioError, PatchPortfolioUseCase, SavePortfolioError,
    SavePortfolioUseCase, UpdateProjectError, UpdateProjectUseCase,
};
use crate::modules::portfolio::domain::entities::{
    Portfolio, PortfolioCreate, PortfolioUpdate, Project, ProjectCreate,
};

//
// ──────────────────────────────────────────────────────────
// Portfolio
// ──────────────────────────────────────────────────────────
//

#[derive(Default, Clone)]
pub struct StubGetPortfolioUseCase;

#[async_trait]
impl GetPortfolioUseCase for StubGetPortfolioUseCase {
    async fn execute(&self) -> Result<Portfolio, GetPortfolioError> {
        Err(GetPortfolioError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubSavePortfolioUseCase;

#[async_trait]
impl SavePortfolioUseCase for StubSavePortfolioUseCase {
    async fn execute(&self, _input: PortfolioCreate) -> Result<Portfolio, SavePortfolioError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubPatchPortfolioUseCase;

#[async_trait]
impl PatchPortfolioUseCase for StubPatchPortfolioUseCase {
    async fn execute(&self, _update: PortfolioUpdate) -> Result<Portfolio, PatchPortfolioError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubInitPortfolioUseCase;

#[async_trait]
impl InitPortfolioUseCase for StubInitPortfolioUseCase {
    async fn execute(&self) -> Result<InitPortfolioOutcome, InitPortfolioError> {
        Ok(InitPortfolioOutcome::AlreadyExists)
    }
}

//
// ──────────────────────────────────────────────────────────
// Projects
// ──────────────────────────────────────────────────────────
//

#[derive(Default, Clone)]
pub struct StubListProjectsUseCase;

#[async_trait]
impl ListProjectsUseCase for StubListProjectsUseCase {
    async fn execute(&self) -> Result<Vec<Project>, ListProjectsError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubAddProjectUseCase;

#[async_trait]
impl AddProjectUseCase for StubAddProjectUseCase {
    async fn execute(&self, _input: ProjectCreate) -> Result<Project, AddProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetProjectUseCase;

#[async_trait]
impl GetProjectUseCase for StubGetProjectUseCase {
    async fn execute(&self, _project_id: String) -> Result<Project, GetProjectError> {
        Err(GetProjectError::ProjectNotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateProjectUseCase;

#[async_trait]
impl UpdateProjectUseCase for StubUpdateProjectUseCase {
    async fn execute(
        &self,
        _project_id: String,
        _input: ProjectCreate,
    ) -> Result<Project, UpdateProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteProjectUseCase;

#[async_trait]
impl DeleteProjectUseCase for StubDeleteProjectUseCase {
    async fn execute(&self, _project_id: String) -> Result<(), DeleteProjectError> {
        Err(DeleteProjectError::ProjectNotFound)
    }
}

//
// ──────────────────────────────────────────────────────────
// Contact
// ──────────────────────────────────────────────────────────
//

#[derive(Default, Clone)]
pub struct StubSubmitMessageUseCase;

#[async_trait]
impl SubmitMessageUseCase for StubSubmitMessageUseCase {
    async fn execute(
        &self,
        _input: ContactMessageCreate,
    ) -> Result<ContactMessage, SubmitMessageError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListMessagesUseCase;

#[async_trait]
impl ListMessagesUseCase for StubListMessagesUseCase {
    async fn execute(&self) -> Result<Vec<ContactMessage>, ListMessagesError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubMarkMessageRepliedUseCase;

#[async_trait]
impl MarkMessageRepliedUseCase for StubMarkMessageRepliedUseCase {
    async fn execute(&self, _message_id: String) -> Result<(), MarkMessageRepliedError> {
        Err(MarkMessageRepliedError::NotFound)
    }
}
