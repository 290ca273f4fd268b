use actix_web::web;
use std::sync::Arc;

use crate::modules::contact::application::contact_use_cases::ContactUseCases;
use crate::modules::contact::application::ports::incoming::use_cases::{
    ListMessagesUseCase, MarkMessageRepliedUseCase, SubmitMessageUseCase,
};
use crate::modules::contact::application::services::{
    ListMessagesService, MarkMessageRepliedService, SubmitMessageService,
};
use crate::modules::portfolio::application::portfolio_use_cases::{
    PortfolioUseCases, ProjectUseCases,
};
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    AddProjectUseCase, DeleteProjectUseCase, GetPortfolioUseCase, GetProjectUseCase,
    InitPortfolioUseCase, ListProjectsUseCase, PatchPortfolioUseCase, SavePortfolioUseCase,
    UpdateProjectUseCase,
};
use crate::modules::portfolio::application::services::{
    AddProjectService, DeleteProjectService, GetPortfolioService, GetProjectService,
    InitPortfolioService, ListProjectsService, PatchPortfolioService, SavePortfolioService,
    UpdateProjectService,
};
use crate::tests::support::in_memory::{InMemoryContactStore, InMemoryPortfolioStore};
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    portfolio: PortfolioUseCases,
    project: ProjectUseCases,
    contact: ContactUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            portfolio: PortfolioUseCases {
                get: Arc::new(StubGetPortfolioUseCase),
                save: Arc::new(StubSavePortfolioUseCase),
                patch: Arc::new(StubPatchPortfolioUseCase),
                init: Arc::new(StubInitPortfolioUseCase),
            },
            project: ProjectUseCases {
                list: Arc::new(StubListProjectsUseCase),
                add: Arc::new(StubAddProjectUseCase),
                get: Arc::new(StubGetProjectUseCase),
                update: Arc::new(StubUpdateProjectUseCase),
                delete: Arc::new(StubDeleteProjectUseCase),
            },
            contact: ContactUseCases {
                submit: Arc::new(StubSubmitMessageUseCase),
                list: Arc::new(StubListMessagesUseCase),
                mark_replied: Arc::new(StubMarkMessageRepliedUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    /// Real services over in-memory repositories, for request flows that
    /// span several endpoints.
    pub fn in_memory(portfolio: InMemoryPortfolioStore, contact: InMemoryContactStore) -> Self {
        Self {
            portfolio: PortfolioUseCases {
                get: Arc::new(GetPortfolioService::new(portfolio.clone())),
                save: Arc::new(SavePortfolioService::new(portfolio.clone())),
                patch: Arc::new(PatchPortfolioService::new(portfolio.clone())),
                init: Arc::new(InitPortfolioService::new(portfolio.clone())),
            },
            project: ProjectUseCases {
                list: Arc::new(ListProjectsService::new(portfolio.clone())),
                add: Arc::new(AddProjectService::new(portfolio.clone())),
                get: Arc::new(GetProjectService::new(portfolio.clone())),
                update: Arc::new(UpdateProjectService::new(portfolio.clone())),
                delete: Arc::new(DeleteProjectService::new(portfolio)),
            },
            contact: ContactUseCases {
                submit: Arc::new(SubmitMessageService::new(contact.clone())),
                list: Arc::new(ListMessagesService::new(contact.clone())),
                mark_replied: Arc::new(MarkMessageRepliedService::new(contact)),
            },
        }
    }

    pub fn with_get_portfolio(mut self, uc: impl GetPortfolioUseCase + 'static) -> Self {
        self.portfolio.get = Arc::new(uc);
        self
    }

    pub fn with_save_portfolio(mut self, uc: impl SavePortfolioUseCase + 'static) -> Self {
        self.portfolio.save = Arc::new(uc);
        self
    }

    pub fn with_patch_portfolio(mut self, uc: impl PatchPortfolioUseCase + 'static) -> Self {
        self.portfolio.patch = Arc::new(uc);
        self
    }

    pub fn with_init_portfolio(mut self, uc: impl InitPortfolioUseCase + 'static) -> Self {
        self.portfolio.init = Arc::new(uc);
        self
    }

    pub fn with_list_projects(mut self, uc: impl ListProjectsUseCase + 'static) -> Self {
        self.project.list = Arc::new(uc);
        self
    }

    pub fn with_add_project(mut self, uc: impl AddProjectUseCase + 'static) -> Self {
        self.project.add = Arc::new(uc);
        self
    }

    pub fn with_get_project(mut self, uc: impl GetProjectUseCase + 'static) -> Self {
        self.project.get = Arc::new(uc);
        self
    }

    pub fn with_update_project(mut self, uc: impl UpdateProjectUseCase + 'static) -> Self {
        self.project.update = Arc::new(uc);
        self
    }

    pub fn with_delete_project(mut self, uc: impl DeleteProjectUseCase + 'static) -> Self {
        self.project.delete = Arc::new(uc);
        self
    }

    pub fn with_submit_message(mut self, uc: impl SubmitMessageUseCase + 'static) -> Self {
        self.contact.submit = Arc::new(uc);
        self
    }

    pub fn with_list_messages(mut self, uc: impl ListMessagesUseCase + 'static) -> Self {
        self.contact.list = Arc::new(uc);
        self
    }

    pub fn with_mark_message_replied(
        mut self,
        uc: impl MarkMessageRepliedUseCase + 'static,
    ) -> Self {
        self.contact.mark_replied = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            portfolio: self.portfolio,
            project: self.project,
            contact: self.contact,
        })
    }
}
