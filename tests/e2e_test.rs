//! End-to-end tests: boot the real server on a free port and drive the HTML
//! surface with a plain HTTP client — menu browsing, item management, and
//! order placement.

use std::time::Duration;

use food_order_service::{build_server, AppState};
use reqwest::redirect::Policy;
use reqwest::{Client, StatusCode};

fn free_port() -> u16 {
    // Bind to port 0 to let the OS assign a free port, then release it.
    // There is a small TOCTOU window, but it is acceptable for test usage.
    std::net::TcpListener::bind("127.0.0.1:0")
        .expect("bind failed")
        .local_addr()
        .expect("addr failed")
        .port()
}

/// Wait until `url` answers at all, retrying every `interval` for up to
/// `timeout` total. Panics if the service never becomes reachable.
async fn wait_for_http(label: &str, url: &str, timeout: Duration, interval: Duration) {
    let client = Client::builder()
        .timeout(Duration::from_secs(3))
        .build()
        .expect("client build failed");
    let deadline = tokio::time::Instant::now() + timeout;
    loop {
        if tokio::time::Instant::now() > deadline {
            panic!("{} did not become ready within {:?}", label, timeout);
        }
        if client.get(url).send().await.is_ok() {
            return;
        }
        tokio::time::sleep(interval).await;
    }
}

/// Start the service with the seeded sample menu on a free port and return
/// its base URL.
async fn start_app() -> String {
    let port = free_port();
    let server = build_server(AppState::with_sample_menu(), "127.0.0.1", port)
        .expect("Failed to bind the food ordering service");
    tokio::spawn(server);

    let base = format!("http://127.0.0.1:{}", port);
    wait_for_http(
        "food ordering service",
        &base,
        Duration::from_secs(10),
        Duration::from_millis(100),
    )
    .await;
    base
}

#[tokio::test]
async fn landing_page_shows_counts_and_links() {
    let base = start_app().await;

    let resp = Client::new().get(&base).send().await.expect("GET / failed");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("body read failed");
    assert!(body.contains("Total menu items: <strong>6</strong>"));
    assert!(body.contains("Total orders: <strong>0</strong>"));
    assert!(body.contains("href=\"/menu\""));
    assert!(body.contains("href=\"/orders\""));
}

#[tokio::test]
async fn menu_page_lists_seeded_items() {
    let base = start_app().await;

    let resp = Client::new()
        .get(format!("{}/menu", base))
        .send()
        .await
        .expect("GET /menu failed");

    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let body = resp.text().await.expect("body read failed");
    assert!(body.contains("Pizza Margherita"));
    assert!(body.contains("12.99"));
    assert!(body.contains("Vanilla Ice Cream"));
}

#[tokio::test]
async fn add_item_then_place_order_flow() {
    let base = start_app().await;
    let http = Client::new(); // follows redirects

    // The six seeded items take ids 1..=6, so the new item gets id 7.
    let resp = http
        .post(format!("{}/menu/add", base))
        .form(&[
            ("name", "Taco"),
            ("description", "Crispy shell with beef and cheese"),
            ("price", "3.50"),
            ("category", "Mexican"),
        ])
        .send()
        .await
        .expect("POST /menu/add failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("body read failed");
    assert!(body.contains("Taco"));
    assert!(body.contains("3.50"));

    let resp = http
        .post(format!("{}/orders/place", base))
        .form(&[
            ("customerName", "Ada Lovelace"),
            ("customerAddress", "1 Analytical Way"),
            ("customerPhone", "555-0100"),
            ("foodId", "7"),
            ("quantity_7", "2"),
        ])
        .send()
        .await
        .expect("POST /orders/place failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("body read failed");
    assert!(body.contains("Ada Lovelace"));
    assert!(body.contains("7.00"));
    assert!(body.contains("Pending"));
}

#[tokio::test]
async fn mutations_redirect_with_see_other() {
    let base = start_app().await;
    let http = Client::builder()
        .redirect(Policy::none())
        .build()
        .expect("client build failed");

    let resp = http
        .post(format!("{}/menu/add", base))
        .form(&[
            ("name", "Lemonade"),
            ("description", "Fresh squeezed"),
            ("price", "2.25"),
            ("category", "Drinks"),
        ])
        .send()
        .await
        .expect("POST /menu/add failed");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get("location").and_then(|v| v.to_str().ok()),
        Some("/menu")
    );

    // Deleting an id that was never assigned still redirects (no-op).
    let resp = http
        .get(format!("{}/menu/delete?id=999", base))
        .send()
        .await
        .expect("GET /menu/delete failed");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let resp = http
        .get(format!("{}/orders/update?id=999&status=Completed", base))
        .send()
        .await
        .expect("GET /orders/update failed");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get("location").and_then(|v| v.to_str().ok()),
        Some("/orders")
    );
}

#[tokio::test]
async fn toggling_availability_hides_items_from_the_order_form() {
    let base = start_app().await;
    let http = Client::new();

    let resp = http
        .get(format!("{}/menu/update?id=1&available=false", base))
        .send()
        .await
        .expect("GET /menu/update failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let body = http
        .get(format!("{}/orders", base))
        .send()
        .await
        .expect("GET /orders failed")
        .text()
        .await
        .expect("body read failed");
    // Still visible for ordering: any other seeded item. Hidden: item 1.
    assert!(body.contains("Cheeseburger"));
    assert!(!body.contains("Pizza Margherita"));

    // An order selecting only the disabled item is not created.
    let resp = http
        .post(format!("{}/orders/place", base))
        .form(&[
            ("customerName", "Grace"),
            ("customerAddress", "2 Harbor St"),
            ("customerPhone", "555-0101"),
            ("foodId", "1"),
            ("quantity_1", "2"),
        ])
        .send()
        .await
        .expect("POST /orders/place failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("body read failed");
    assert!(body.contains("No orders yet"));
}

#[tokio::test]
async fn malformed_input_is_rejected_with_400() {
    let base = start_app().await;
    let http = Client::new();

    let resp = http
        .post(format!("{}/menu/add", base))
        .form(&[
            ("name", "Mystery Dish"),
            ("description", "x"),
            ("price", "not-a-number"),
            ("category", "y"),
        ])
        .send()
        .await
        .expect("POST /menu/add failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Nothing was inserted.
    let body = http
        .get(format!("{}/menu", base))
        .send()
        .await
        .expect("GET /menu failed")
        .text()
        .await
        .expect("body read failed");
    assert!(!body.contains("Mystery Dish"));

    let resp = http
        .get(format!("{}/menu/update?id=abc&available=true", base))
        .send()
        .await
        .expect("GET /menu/update failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = http
        .get(format!("{}/orders/update?id=1&status=Refunded", base))
        .send()
        .await
        .expect("GET /orders/update failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn method_mismatch_is_rejected_with_405() {
    let base = start_app().await;
    let http = Client::new();

    let resp = http
        .get(format!("{}/menu/add", base))
        .send()
        .await
        .expect("GET /menu/add failed");
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

    let resp = http
        .post(format!("{}/orders/delete", base))
        .send()
        .await
        .expect("POST /orders/delete failed");
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn user_supplied_text_is_html_escaped() {
    let base = start_app().await;
    let http = Client::new();

    let resp = http
        .post(format!("{}/menu/add", base))
        .form(&[
            ("name", "<script>alert(1)</script>"),
            ("description", "a & b"),
            ("price", "1.00"),
            ("category", "\"quoted\""),
        ])
        .send()
        .await
        .expect("POST /menu/add failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.text().await.expect("body read failed");
    assert!(!body.contains("<script>alert(1)</script>"));
    assert!(body.contains("&lt;script&gt;"));
    assert!(body.contains("a &amp; b"));
}
