mod home;
mod login_user;
mod logout_user;
mod register_user;

pub use home::home_handler;
pub use login_user::{login_page_handler, login_user_handler};
pub use logout_user::logout_user_handler;
pub use register_user::{register_page_handler, register_user_handler};
