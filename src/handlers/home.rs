use actix_web::{web, HttpResponse};
use askama::Template;

use crate::errors::AppError;
use crate::AppState;

#[derive(Template)]
#[template(path = "home.html")]
struct HomePage {
    item_count: usize,
    order_count: usize,
}

/// GET /
pub async fn index(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let page = HomePage {
        item_count: state.menu.item_count(),
        order_count: state.orders.order_count(),
    };
    Ok(super::html(page.render()?))
}
