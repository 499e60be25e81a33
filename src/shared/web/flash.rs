use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::HttpRequest;
use serde::Serialize;

pub const FLASH_COOKIE: &str = "todo_flash";

/// One-shot notice carried across a redirect as a short code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashMessage {
    Registered,
    TodoCreated,
    TodoUpdated,
    TodoDeleted,
    TodoCompleted,
    TodoReopened,
    TodoNotFound,
    TodoLoadFailed,
    TodoUpdateFailed,
    TodoDeleteFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
}

/// What templates see under `flash`.
#[derive(Debug, Clone, Serialize)]
pub struct FlashView {
    pub level: FlashLevel,
    pub text: &'static str,
}

impl FlashMessage {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Registered => "registered",
            Self::TodoCreated => "todo_created",
            Self::TodoUpdated => "todo_updated",
            Self::TodoDeleted => "todo_deleted",
            Self::TodoCompleted => "todo_completed",
            Self::TodoReopened => "todo_reopened",
            Self::TodoNotFound => "todo_not_found",
            Self::TodoLoadFailed => "todo_load_failed",
            Self::TodoUpdateFailed => "todo_update_failed",
            Self::TodoDeleteFailed => "todo_delete_failed",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let message = match code {
            "registered" => Self::Registered,
            "todo_created" => Self::TodoCreated,
            "todo_updated" => Self::TodoUpdated,
            "todo_deleted" => Self::TodoDeleted,
            "todo_completed" => Self::TodoCompleted,
            "todo_reopened" => Self::TodoReopened,
            "todo_not_found" => Self::TodoNotFound,
            "todo_load_failed" => Self::TodoLoadFailed,
            "todo_update_failed" => Self::TodoUpdateFailed,
            "todo_delete_failed" => Self::TodoDeleteFailed,
            _ => return None,
        };
        Some(message)
    }

    pub fn level(&self) -> FlashLevel {
        match self {
            Self::TodoNotFound
            | Self::TodoLoadFailed
            | Self::TodoUpdateFailed
            | Self::TodoDeleteFailed => FlashLevel::Error,
            _ => FlashLevel::Success,
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Self::Registered => "Registration complete. Please log in.",
            Self::TodoCreated => "Todo created.",
            Self::TodoUpdated => "Todo updated.",
            Self::TodoDeleted => "Todo deleted.",
            Self::TodoCompleted => "Todo marked as completed.",
            Self::TodoReopened => "Todo marked as not completed.",
            Self::TodoNotFound => "Todo not found.",
            Self::TodoLoadFailed => "An error occurred while loading the todo.",
            Self::TodoUpdateFailed => "An error occurred while updating the todo.",
            Self::TodoDeleteFailed => "An error occurred while deleting the todo.",
        }
    }

    pub fn view(&self) -> FlashView {
        FlashView {
            level: self.level(),
            text: self.text(),
        }
    }

    pub fn cookie(&self) -> Cookie<'static> {
        Cookie::build(FLASH_COOKIE, self.code())
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .max_age(Duration::seconds(60))
            .finish()
    }

    /// Reads the pending flash, if any. Unknown codes are ignored.
    pub fn from_request(req: &HttpRequest) -> Option<Self> {
        req.cookie(FLASH_COOKIE)
            .and_then(|c| Self::from_code(c.value()))
    }
}

/// Expires the flash cookie once it has been shown.
pub fn consumed_flash_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(FLASH_COOKIE, "").path("/").finish();
    cookie.make_removal();
    cookie
}
