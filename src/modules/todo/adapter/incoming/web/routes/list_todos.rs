use actix_web::{get, web, HttpRequest, Responder};
use serde::Serialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::todo::adapter::incoming::web::forms::ListTodosParams;
use crate::modules::todo::adapter::incoming::web::views::{
    user_context, PageView, StatisticsView, TodoView,
};
use crate::modules::todo::application::domain::listing::{PageResult, TodoFilter};
use crate::shared::web::render_page;
use crate::AppState;

const LIST_FAILED_MESSAGE: &str = "Your todos could not be loaded. Please try again.";

/// Current filter/sort values, echoed into the filter form and paging links.
#[derive(Debug, Serialize)]
struct ListParamsView {
    search: String,
    completed: String,
    sort: &'static str,
    direction: &'static str,
    size: u64,
}

#[get("/todos")]
pub async fn list_todos_handler(
    req: HttpRequest,
    user: AuthenticatedUser,
    params: web::Query<ListTodosParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let today = data.clock.today();
    let query = params.to_query();

    let statistics = data
        .todo
        .statistics
        .execute(user.user_id)
        .await
        .into_statistics_or_empty();

    let mut context = user_context(&user);
    context.insert("statistics", &StatisticsView::from(statistics));
    context.insert(
        "params",
        &ListParamsView {
            search: match &query.filter {
                TodoFilter::TitleContains(term) => term.clone(),
                _ => String::new(),
            },
            completed: match &query.filter {
                TodoFilter::Completed(c) => c.to_string(),
                _ => String::new(),
            },
            sort: query.sort.field.as_param(),
            direction: query.sort.direction.as_param(),
            size: query.page.size,
        },
    );

    let page_request = query.page;
    let (page, due_today, upcoming) = match data.todo.get_list.execute(user.user_id, query).await
    {
        Ok(listing) => (listing.page, listing.due_today, listing.upcoming),
        Err(e) => {
            error!(error = %e, user_id = %user.user_id, "Failed to list todos");
            context.insert("error_message", LIST_FAILED_MESSAGE);
            (PageResult::empty(page_request), Vec::new(), Vec::new())
        }
    };

    context.insert("todos", &TodoView::list(&page.items, today));
    context.insert("page", &PageView::new(&page));
    context.insert("due_today", &TodoView::list(&due_today, today));
    context.insert("upcoming", &TodoView::list(&upcoming, today));

    render_page(&req, &data.templates, "todo/list.html", context)
}
