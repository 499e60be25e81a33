pub mod flash;
pub mod form_config;
pub mod responses;
pub mod templates;

pub use flash::FlashMessage;
pub use form_config::custom_form_config;
pub use responses::{render_page, see_other, see_other_with_flash};
pub use templates::TemplateRenderer;
