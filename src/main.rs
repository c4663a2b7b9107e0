use std::env;

use food_order_service::{build_server, select_port, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let requested = env::args().nth(1).and_then(|arg| match arg.parse::<u16>() {
        Ok(port) => Some(port),
        Err(_) => {
            log::warn!("Invalid port argument '{}', probing for a free port", arg);
            None
        }
    });
    let port = select_port(requested);

    let state = AppState::with_sample_menu();
    log::info!("Seeded {} sample menu items", state.menu.item_count());
    log::info!("Starting server at http://localhost:{}", port);

    let server = build_server(state, "0.0.0.0", port).map_err(|err| {
        log::error!("Failed to bind 0.0.0.0:{}: {}", port, err);
        err
    })?;
    server.await
}
