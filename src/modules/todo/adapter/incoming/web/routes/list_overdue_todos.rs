use actix_web::{get, web, HttpRequest, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::todo::adapter::incoming::web::forms::PageParams;
use crate::modules::todo::adapter::incoming::web::views::{user_context, PageView, TodoView};
use crate::modules::todo::application::domain::listing::PageResult;
use crate::shared::web::render_page;
use crate::AppState;

const OVERDUE_FAILED_MESSAGE: &str = "Overdue todos could not be loaded. Please try again.";

#[get("/todos/overdue")]
pub async fn list_overdue_todos_handler(
    req: HttpRequest,
    user: AuthenticatedUser,
    params: web::Query<PageParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let today = data.clock.today();
    let page_request = params.to_page_request();
    let mut context = user_context(&user);

    let page = match data.todo.get_overdue.execute(user.user_id, page_request).await {
        Ok(page) => page,
        Err(e) => {
            error!(error = %e, user_id = %user.user_id, "Failed to list overdue todos");
            context.insert("error_message", OVERDUE_FAILED_MESSAGE);
            PageResult::empty(page_request)
        }
    };

    context.insert("todos", &TodoView::list(&page.items, today));
    context.insert("page", &PageView::new(&page));
    context.insert("today", &today.format("%Y-%m-%d").to_string());

    render_page(&req, &data.templates, "todo/overdue.html", context)
}
