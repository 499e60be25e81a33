use std::sync::Arc;

use actix_web::web;

use crate::auth::adapter::incoming::web::session_cookie::SessionCookieConfig;
use crate::auth::application::domain::entities::AuthPrincipal;
use crate::auth::application::use_cases::{
    login_user::ILoginUserUseCase, logout_user::ILogoutUseCase,
    register_user::IRegisterUserUseCase, resolve_session::IResolveSessionUseCase,
};
use crate::modules::todo::application::ports::incoming::use_cases::{
    ChangeCompletionUseCase, CreateTodoUseCase, DeleteTodoUseCase, GetTodoStatisticsUseCase,
    GetTodoUseCase, ListOverdueTodosUseCase, ListTodosUseCase, UpdateTodoUseCase,
};
use crate::modules::todo::application::service::{
    ChangeCompletionService, CreateTodoService, DeleteTodoService, GetTodoService,
    ListOverdueTodosService, ListTodosService, TodoStatisticsService, UpdateTodoService,
};
use crate::modules::todo::application::todo_use_cases::TodoUseCases;
use crate::shared::clock::{Clock, FixedClock};
use crate::shared::web::TemplateRenderer;
use crate::tests::support::stubs::*;
use crate::tests::support::todo_test_fixtures::{date, InMemoryTodoStore};
use crate::AppState;

/// "Today" for every route test.
pub fn test_clock() -> FixedClock {
    FixedClock::on(date(2025, 3, 10))
}

pub struct TestAppStateBuilder {
    register_user: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
    logout_user: Arc<dyn ILogoutUseCase + Send + Sync>,
    resolve_session: Arc<dyn IResolveSessionUseCase + Send + Sync>,
    todo: TodoUseCases,
    clock: Arc<dyn Clock>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: Arc::new(StubRegisterUserUseCase),
            login_user: Arc::new(StubLoginUserUseCase),
            logout_user: Arc::new(StubLogoutUserUseCase),
            resolve_session: Arc::new(StubNoSession),
            todo: TodoUseCases {
                create: Arc::new(StubCreateTodoUseCase),
                get_single: Arc::new(StubGetTodoUseCase),
                get_list: Arc::new(StubListTodosUseCase),
                get_overdue: Arc::new(StubListOverdueTodosUseCase),
                statistics: Arc::new(StubTodoStatisticsUseCase),
                update: Arc::new(StubUpdateTodoUseCase),
                change_completion: Arc::new(StubChangeCompletionUseCase),
                delete: Arc::new(StubDeleteTodoUseCase),
            },
            clock: Arc::new(test_clock()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(
        mut self,
        uc: impl IRegisterUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.register_user = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_logout_user(mut self, uc: impl ILogoutUseCase + Send + Sync + 'static) -> Self {
        self.logout_user = Arc::new(uc);
        self
    }

    pub fn with_resolve_session(
        mut self,
        uc: impl IResolveSessionUseCase + Send + Sync + 'static,
    ) -> Self {
        self.resolve_session = Arc::new(uc);
        self
    }

    /// Every session cookie resolves to `principal`.
    pub fn signed_in_as(self, principal: AuthPrincipal) -> Self {
        self.with_resolve_session(StubSignedIn(principal))
    }

    /// Wires the real todo services over an in-memory store.
    pub fn with_todo_store(mut self, store: InMemoryTodoStore) -> Self {
        let clock = self.clock.clone();
        self.todo = TodoUseCases {
            create: Arc::new(CreateTodoService::new(store.clone(), clock.clone())),
            get_single: Arc::new(GetTodoService::new(store.clone())),
            get_list: Arc::new(ListTodosService::new(store.clone(), clock.clone())),
            get_overdue: Arc::new(ListOverdueTodosService::new(store.clone(), clock.clone())),
            statistics: Arc::new(TodoStatisticsService::new(store.clone(), clock.clone())),
            update: Arc::new(UpdateTodoService::new(
                store.clone(),
                store.clone(),
                clock.clone(),
            )),
            change_completion: Arc::new(ChangeCompletionService::new(store.clone(), clock)),
            delete: Arc::new(DeleteTodoService::new(store)),
        };
        self
    }

    pub fn with_create_todo(mut self, uc: impl CreateTodoUseCase + Send + Sync + 'static) -> Self {
        self.todo.create = Arc::new(uc);
        self
    }

    pub fn with_get_todo(mut self, uc: impl GetTodoUseCase + Send + Sync + 'static) -> Self {
        self.todo.get_single = Arc::new(uc);
        self
    }

    pub fn with_list_todos(mut self, uc: impl ListTodosUseCase + Send + Sync + 'static) -> Self {
        self.todo.get_list = Arc::new(uc);
        self
    }

    pub fn with_list_overdue_todos(
        mut self,
        uc: impl ListOverdueTodosUseCase + Send + Sync + 'static,
    ) -> Self {
        self.todo.get_overdue = Arc::new(uc);
        self
    }

    pub fn with_todo_statistics(
        mut self,
        uc: impl GetTodoStatisticsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.todo.statistics = Arc::new(uc);
        self
    }

    pub fn with_update_todo(mut self, uc: impl UpdateTodoUseCase + Send + Sync + 'static) -> Self {
        self.todo.update = Arc::new(uc);
        self
    }

    pub fn with_change_completion(
        mut self,
        uc: impl ChangeCompletionUseCase + Send + Sync + 'static,
    ) -> Self {
        self.todo.change_completion = Arc::new(uc);
        self
    }

    pub fn with_delete_todo(mut self, uc: impl DeleteTodoUseCase + Send + Sync + 'static) -> Self {
        self.todo.delete = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_use_case: self.register_user,
            login_user_use_case: self.login_user,
            logout_user_use_case: self.logout_user,
            resolve_session_use_case: self.resolve_session,
            todo: self.todo,
            templates: Arc::new(TemplateRenderer::new().expect("templates compile")),
            clock: self.clock,
            session_cookie: SessionCookieConfig { secure: false },
        })
    }
}
