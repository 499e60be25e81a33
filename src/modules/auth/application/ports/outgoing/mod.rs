pub mod password_hasher;
pub mod session_store;
pub mod token_provider;
pub mod user_query;
pub mod user_repository;

pub use password_hasher::PasswordHasher;
pub use session_store::SessionStore;
pub use token_provider::TokenProvider;
pub use user_query::UserQuery;
pub use user_repository::{UserRepository, UserRepositoryError};
