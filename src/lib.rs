pub mod application;
pub mod domain;
pub mod errors;
pub mod forms;
pub mod handlers;
pub mod infrastructure;

use std::net::TcpListener;
use std::ops::RangeInclusive;
use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};

use application::menu_service::MenuService;
use application::order_service::OrderService;
use infrastructure::memory::{InMemoryMenuRepository, InMemoryOrderRepository};

/// Ports probed at startup when no usable port argument is given.
const PORT_SCAN_RANGE: RangeInclusive<u16> = 8080..=8090;
const FALLBACK_PORT: u16 = 8080;

/// Sample menu loaded on every start; all state is process-lifetime only.
const SAMPLE_MENU: [(&str, &str, &str, &str); 6] = [
    (
        "Pizza Margherita",
        "Classic cheese pizza with tomato sauce and mozzarella",
        "12.99",
        "Italian",
    ),
    (
        "Cheeseburger",
        "Beef patty with cheese, lettuce, tomato, and special sauce",
        "9.99",
        "American",
    ),
    (
        "Sushi Platter",
        "Assorted sushi pieces with salmon, tuna, and California rolls",
        "18.99",
        "Japanese",
    ),
    (
        "Caesar Salad",
        "Fresh romaine lettuce with grilled chicken, croutons, and parmesan",
        "8.99",
        "Salads",
    ),
    (
        "Spaghetti Carbonara",
        "Classic pasta with bacon, eggs, and parmesan cheese",
        "14.99",
        "Italian",
    ),
    (
        "Vanilla Ice Cream",
        "Homemade vanilla ice cream with chocolate sauce",
        "5.99",
        "Desserts",
    ),
];

/// Shared application state: both services over one menu repository.
/// Constructed once in `main` and handed to the workers via `web::Data`.
pub struct AppState {
    pub menu: MenuService<InMemoryMenuRepository>,
    pub orders: OrderService<InMemoryMenuRepository, InMemoryOrderRepository>,
}

impl AppState {
    pub fn new() -> Self {
        let menu_repo = Arc::new(InMemoryMenuRepository::new());
        Self {
            menu: MenuService::new(Arc::clone(&menu_repo)),
            orders: OrderService::new(menu_repo, InMemoryOrderRepository::new()),
        }
    }

    /// State pre-loaded with the sample menu, as served on every start.
    pub fn with_sample_menu() -> Self {
        let state = Self::new();
        for (name, description, price, category) in SAMPLE_MENU {
            if let Err(err) = state.menu.add_item(name, description, price, category) {
                log::warn!("Skipping sample menu item '{}': {}", name, err);
            }
        }
        state
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick the port to listen on: the requested port when given, else the first
/// free port in the scan range, else an OS-assigned ephemeral port. Probing
/// never fails the process; an unbindable result surfaces later, when the
/// server binds.
pub fn select_port(requested: Option<u16>) -> u16 {
    if let Some(port) = requested {
        return port;
    }
    for port in PORT_SCAN_RANGE {
        if TcpListener::bind(("0.0.0.0", port)).is_ok() {
            return port;
        }
        log::debug!("Port {} is busy, trying next", port);
    }
    match TcpListener::bind(("0.0.0.0", 0)).and_then(|listener| listener.local_addr()) {
        Ok(addr) => {
            log::warn!(
                "Ports {}-{} all busy, using ephemeral port {}",
                PORT_SCAN_RANGE.start(),
                PORT_SCAN_RANGE.end(),
                addr.port()
            );
            addr.port()
        }
        Err(err) => {
            log::warn!("Port probe failed ({}), falling back to {}", err, FALLBACK_PORT);
            FALLBACK_PORT
        }
    }
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    state: AppState,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let state = web::Data::new(state);
    Ok(HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .route("/", web::get().to(handlers::home::index))
            .service(
                web::scope("/menu")
                    .route("", web::get().to(handlers::menu::menu_page))
                    .route("/add", web::post().to(handlers::menu::add_item))
                    .route("/update", web::get().to(handlers::menu::update_item))
                    .route("/delete", web::get().to(handlers::menu::delete_item)),
            )
            .service(
                web::scope("/orders")
                    .route("", web::get().to(handlers::orders::orders_page))
                    .route("/place", web::post().to(handlers::orders::place_order))
                    .route("/update", web::get().to(handlers::orders::update_order))
                    .route("/delete", web::get().to(handlers::orders::delete_order)),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
