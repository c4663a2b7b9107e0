use actix_web::{web, HttpRequest, HttpResponse};
use askama::Template;

use crate::domain::menu::FoodItem;
use crate::errors::AppError;
use crate::forms;
use crate::AppState;

// ── View models ──────────────────────────────────────────────────────────────

struct FoodItemView {
    id: u32,
    name: String,
    description: String,
    price: String,
    category: String,
    available: bool,
}

impl From<FoodItem> for FoodItemView {
    fn from(item: FoodItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            price: item.price.with_scale(2).to_string(),
            category: item.category,
            available: item.available,
        }
    }
}

#[derive(Template)]
#[template(path = "menu.html")]
struct MenuPage {
    items: Vec<FoodItemView>,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /menu
pub async fn menu_page(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let items = state
        .menu
        .list_items()
        .into_iter()
        .map(FoodItemView::from)
        .collect();
    Ok(super::html(MenuPage { items }.render()?))
}

/// POST /menu/add
///
/// A malformed price or blank required field is a 400; nothing is inserted.
pub async fn add_item(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let body = std::str::from_utf8(&body)
        .map_err(|_| AppError::Validation("request body is not valid UTF-8".to_string()))?;
    let params = forms::parse(body);

    state.menu.add_item(
        super::field(&params, "name"),
        super::field(&params, "description"),
        super::field(&params, "price"),
        super::field(&params, "category"),
    )?;

    Ok(super::see_other("/menu"))
}

/// GET /menu/update?id=&available=
///
/// Redirects whether or not the id existed; only unparseable parameters are
/// an error.
pub async fn update_item(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let params = forms::parse(req.query_string());
    let id: u32 = super::require_param(&params, "id")?;
    let available: bool = super::require_param(&params, "available")?;

    state.menu.set_availability(id, available);

    Ok(super::see_other("/menu"))
}

/// GET /menu/delete?id=
pub async fn delete_item(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let params = forms::parse(req.query_string());
    let id: u32 = super::require_param(&params, "id")?;

    state.menu.remove_item(id);

    Ok(super::see_other("/menu"))
}
