use actix_web::cookie::Cookie;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::session_cookie::SESSION_COOKIE;
use crate::auth::application::domain::entities::{AuthPrincipal, Role, UserId};

const TEST_USER_ID: Uuid = Uuid::from_u128(0x6a1f_3c2e_8d4b_4f0a_9e7c_1b5d_2a38_c401);

/// The signed-in user for route tests. Always the same id.
pub fn test_principal() -> AuthPrincipal {
    AuthPrincipal {
        user_id: UserId::from(TEST_USER_ID),
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        enabled: true,
        role: Role::User,
    }
}

/// Any value works; the resolver stub ignores it.
pub fn session_cookie() -> Cookie<'static> {
    Cookie::new(SESSION_COOKIE, "test-session")
}
