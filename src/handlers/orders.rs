use actix_web::{web, HttpRequest, HttpResponse};
use askama::Template;

use crate::domain::errors::DomainError;
use crate::domain::menu::FoodItem;
use crate::domain::order::{CustomerDetails, Order, OrderStatus, RequestedLine};
use crate::errors::AppError;
use crate::forms;
use crate::AppState;

// ── View models ──────────────────────────────────────────────────────────────

struct OrderView {
    id: u32,
    customer_name: String,
    total: String,
    status: &'static str,
    status_class: &'static str,
    placed_at: String,
}

impl From<Order> for OrderView {
    fn from(order: Order) -> Self {
        let status_class = match order.status {
            OrderStatus::Pending => "status-pending",
            OrderStatus::Completed => "status-completed",
            OrderStatus::Cancelled => "status-cancelled",
        };
        Self {
            id: order.id,
            customer_name: order.customer_name,
            total: order.total.with_scale(2).to_string(),
            status: order.status.as_str(),
            status_class,
            placed_at: order.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

struct AvailableItemView {
    id: u32,
    name: String,
    price: String,
}

impl From<FoodItem> for AvailableItemView {
    fn from(item: FoodItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            price: item.price.with_scale(2).to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "orders.html")]
struct OrdersPage {
    orders: Vec<OrderView>,
    available_items: Vec<AvailableItemView>,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /orders
pub async fn orders_page(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let orders = state
        .orders
        .list_orders()
        .into_iter()
        .map(OrderView::from)
        .collect();
    let available_items = state
        .menu
        .list_items()
        .into_iter()
        .filter(|item| item.available)
        .map(AvailableItemView::from)
        .collect();

    Ok(super::html(
        OrdersPage {
            orders,
            available_items,
        }
        .render()?,
    ))
}

/// POST /orders/place
///
/// Checked boxes arrive as one comma-joined `foodId` value; each selected id
/// has its own `quantity_<id>` field. A placement where no line resolves
/// redirects without creating a record.
pub async fn place_order(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let body = std::str::from_utf8(&body)
        .map_err(|_| AppError::Validation("request body is not valid UTF-8".to_string()))?;
    let params = forms::parse(body);

    let customer = CustomerDetails {
        name: super::field(&params, "customerName").to_string(),
        address: super::field(&params, "customerAddress").to_string(),
        phone: super::field(&params, "customerPhone").to_string(),
    };

    let requested: Vec<RequestedLine> = super::field(&params, "foodId")
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| RequestedLine {
            food_id: token.to_string(),
            quantity: super::field(&params, &format!("quantity_{token}")).to_string(),
        })
        .collect();

    match state.orders.place_order(customer, requested) {
        Ok(_) | Err(DomainError::NoItemsSelected) => Ok(super::see_other("/orders")),
        Err(err) => Err(err.into()),
    }
}

/// GET /orders/update?id=&status=
///
/// The status must be one of Pending, Completed or Cancelled; anything else
/// is a 400. An unknown id redirects as a no-op.
pub async fn update_order(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let params = forms::parse(req.query_string());
    let id: u32 = super::require_param(&params, "id")?;
    let status: OrderStatus = super::require_param(&params, "status")?;

    state.orders.update_status(id, status);

    Ok(super::see_other("/orders"))
}

/// GET /orders/delete?id=
pub async fn delete_order(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let params = forms::parse(req.query_string());
    let id: u32 = super::require_param(&params, "id")?;

    state.orders.remove_order(id);

    Ok(super::see_other("/orders"))
}
