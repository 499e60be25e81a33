pub mod session_id;
pub mod token_hasher;

pub use session_id::generate_session_id;
pub use token_hasher::hash_token;
