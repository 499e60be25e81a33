use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{AuthPrincipal, User, UserId};
use crate::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse,
};
use crate::auth::application::use_cases::logout_user::{ILogoutUseCase, LogoutError};
use crate::auth::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterUserError, RegisterUserInput,
};
use crate::auth::application::use_cases::resolve_session::{
    IResolveSessionUseCase, ResolveSessionError,
};
use crate::modules::todo::application::domain::entities::{CompletionChange, Todo};
use crate::modules::todo::application::domain::listing::{PageRequest, PageResult};
use crate::modules::todo::application::domain::statistics::StatisticsOutcome;
use crate::modules::todo::application::domain::validation::TodoInput;
use crate::modules::todo::application::ports::incoming::use_cases::{
    ChangeCompletionError, ChangeCompletionUseCase, CreateTodoError, CreateTodoUseCase,
    DeleteTodoError, DeleteTodoUseCase, GetTodoError, GetTodoStatisticsUseCase, GetTodoUseCase,
    ListOverdueTodosUseCase, ListTodosError, ListTodosQuery, ListTodosUseCase, TodoListing,
    UpdateTodoError, UpdateTodoUseCase,
};

// ============================================================================
// Auth
// ============================================================================

#[derive(Default, Clone)]
pub struct StubRegisterUserUseCase;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(&self, _input: RegisterUserInput) -> Result<User, RegisterUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLogoutUserUseCase;

#[async_trait]
impl ILogoutUseCase for StubLogoutUserUseCase {
    async fn execute(&self, _session_token: &str) -> Result<(), LogoutError> {
        unimplemented!("Not used in this test")
    }
}

/// Rejects every session, so protected routes redirect to `/login`.
#[derive(Default, Clone)]
pub struct StubNoSession;

#[async_trait]
impl IResolveSessionUseCase for StubNoSession {
    async fn execute(&self, _session_token: &str) -> Result<AuthPrincipal, ResolveSessionError> {
        Err(ResolveSessionError::Invalid)
    }
}

/// Resolves any session cookie to the same principal.
#[derive(Clone)]
pub struct StubSignedIn(pub AuthPrincipal);

#[async_trait]
impl IResolveSessionUseCase for StubSignedIn {
    async fn execute(&self, _session_token: &str) -> Result<AuthPrincipal, ResolveSessionError> {
        Ok(self.0.clone())
    }
}

// ============================================================================
// Todo
// ============================================================================

#[derive(Default, Clone)]
pub struct StubCreateTodoUseCase;

#[async_trait]
impl CreateTodoUseCase for StubCreateTodoUseCase {
    async fn execute(&self, _owner: UserId, _input: TodoInput) -> Result<Todo, CreateTodoError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetTodoUseCase;

#[async_trait]
impl GetTodoUseCase for StubGetTodoUseCase {
    async fn execute(&self, _owner: UserId, _todo_id: Uuid) -> Result<Todo, GetTodoError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListTodosUseCase;

#[async_trait]
impl ListTodosUseCase for StubListTodosUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _query: ListTodosQuery,
    ) -> Result<TodoListing, ListTodosError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListOverdueTodosUseCase;

#[async_trait]
impl ListOverdueTodosUseCase for StubListOverdueTodosUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _page: PageRequest,
    ) -> Result<PageResult<Todo>, ListTodosError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubTodoStatisticsUseCase;

#[async_trait]
impl GetTodoStatisticsUseCase for StubTodoStatisticsUseCase {
    async fn execute(&self, _owner: UserId) -> StatisticsOutcome {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateTodoUseCase;

#[async_trait]
impl UpdateTodoUseCase for StubUpdateTodoUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _todo_id: Uuid,
        _input: TodoInput,
    ) -> Result<Todo, UpdateTodoError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubChangeCompletionUseCase;

#[async_trait]
impl ChangeCompletionUseCase for StubChangeCompletionUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _todo_id: Uuid,
        _change: CompletionChange,
    ) -> Result<Todo, ChangeCompletionError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteTodoUseCase;

#[async_trait]
impl DeleteTodoUseCase for StubDeleteTodoUseCase {
    async fn execute(&self, _owner: UserId, _todo_id: Uuid) -> Result<(), DeleteTodoError> {
        unimplemented!("Not used in this test")
    }
}
