use actix_web::cookie::{time::Duration, Cookie, SameSite};

pub const SESSION_COOKIE: &str = "todo_session";

#[derive(Debug, Clone, Copy)]
pub struct SessionCookieConfig {
    /// Send only over HTTPS.
    pub secure: bool,
}

impl SessionCookieConfig {
    pub fn issue(&self, token: &str, max_age_seconds: i64) -> Cookie<'static> {
        Cookie::build(SESSION_COOKIE, token.to_string())
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .max_age(Duration::seconds(max_age_seconds))
            .finish()
    }

    pub fn removal(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build(SESSION_COOKIE, "")
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .finish();
        cookie.make_removal();
        cookie
    }
}
