use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use hot_coffee::api::create_router;
use hot_coffee::lifecycle::{CoffeeShop, ShopOptions};
use hot_coffee::storage::{default_inventory, default_menu, INVENTORY_KEY, MENU_KEY};
use resource_actor::MemoryBackend;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

async fn start() -> (CoffeeShop, Router) {
    let backend = Arc::new(MemoryBackend::new());
    backend.insert(MENU_KEY, serde_json::to_vec(&default_menu()).unwrap());
    backend.insert(INVENTORY_KEY, serde_json::to_vec(&default_inventory()).unwrap());
    let shop = CoffeeShop::start(
        backend,
        ShopOptions {
            buffer: 16,
            seed: Some(1),
            export_reports: false,
        },
    )
    .await
    .expect("Failed to start coffee shop");
    let app = create_router(shop.state());
    (shop, app)
}

async fn stop(shop: CoffeeShop, app: Router) {
    drop(app);
    shop.shutdown().await.unwrap();
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn order_body(product_id: &str, quantity: u32) -> Value {
    json!({
        "customer_name": "Alice",
        "items": [{ "product_id": product_id, "quantity": quantity }]
    })
}

#[tokio::test]
async fn test_order_lifecycle_over_http() {
    let (shop, app) = start().await;

    let (status, order) = send(&app, "POST", "/order", Some(order_body("latte", 2))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(order["order_id"], "order1");
    assert_eq!(order["status"], "open");

    let (status, order) = send(&app, "GET", "/order/order1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["items"][0]["quantity"], 2);

    let (status, body) = send(&app, "POST", "/order/order1/close", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Order closed successfully" }));

    let (status, milk) = send(&app, "GET", "/inventory/milk", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(milk["quantity"], 3000.0);

    let (status, body) = send(&app, "POST", "/order/order1/close", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "already_closed");
    assert_eq!(body["entity"], "order1");

    let (status, body) = send(&app, "PUT", "/order/order1", Some(order_body("latte", 1))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["kind"], "conflict");

    let (status, body) = send(&app, "DELETE", "/order/order1", None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["entity"], "order1");

    let (status, body) = send(&app, "GET", "/reports/total-sales", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "total_sales": 7.0 }));

    let (status, body) = send(&app, "GET", "/reports/popular-items", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["product_id"], "latte");

    stop(shop, app).await;
}

#[tokio::test]
async fn test_open_orders_can_be_replaced_and_deleted() {
    let (shop, app) = start().await;

    send(&app, "POST", "/order", Some(order_body("latte", 1))).await;
    let (status, order) = send(&app, "PUT", "/order/order1", Some(order_body("muffin", 3))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["items"][0]["product_id"], "muffin");

    let (status, body) = send(&app, "DELETE", "/order/order1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = send(&app, "GET", "/order/order1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "not_found");

    let (status, orders) = send(&app, "GET", "/order", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(orders, json!([]));

    stop(shop, app).await;
}

#[tokio::test]
async fn test_error_statuses() {
    let (shop, app) = start().await;

    // Malformed and invalid payloads
    let (status, body) = send(&app, "POST", "/order", Some(json!({ "customer_name": "A" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "validation");
    let (status, _) = send(&app, "POST", "/order", Some(order_body("latte", 0))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let mut closed = order_body("latte", 1);
    closed["status"] = json!("closed");
    let (status, _) = send(&app, "POST", "/order", Some(closed)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Ids that cannot exist
    let (status, _) = send(&app, "GET", "/order/not-an-id", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "POST", "/order/order42/close", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "GET", "/menu/cortado", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Unknown product on close
    send(&app, "POST", "/order", Some(order_body("cortado", 1))).await;
    let (status, body) = send(&app, "POST", "/order/order1/close", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["entity"], "cortado");

    // 372 shots in stock, 38 espressos need 380.
    send(&app, "POST", "/order", Some(order_body("espresso", 38))).await;
    let (status, body) = send(&app, "POST", "/order/order2/close", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["kind"], "insufficient_stock");
    assert_eq!(body["entity"], "espresso_shot");

    // Duplicate menu id
    let duplicate = serde_json::to_value(&default_menu()[0]).unwrap();
    let (status, body) = send(&app, "POST", "/menu", Some(duplicate)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["entity"], "latte");

    stop(shop, app).await;
}

#[tokio::test]
async fn test_menu_and_inventory_crud() {
    let (shop, app) = start().await;

    let cocoa = json!({
        "ingredient_id": "cocoa",
        "name": "Cocoa Powder",
        "quantity": 500.0,
        "unit": "g"
    });
    let (status, _) = send(&app, "POST", "/inventory", Some(cocoa)).await;
    assert_eq!(status, StatusCode::CREATED);

    let mocha = json!({
        "product_id": "mocha",
        "name": "Mocha",
        "description": "Espresso with chocolate",
        "price": 4.0,
        "ingredients": [
            { "ingredient_id": "espresso_shot", "quantity": 1.0 },
            { "ingredient_id": "cocoa", "quantity": 15.0 }
        ]
    });
    let (status, item) = send(&app, "POST", "/menu", Some(mocha)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(item["product_id"], "mocha");

    let (status, item) = send(
        &app,
        "PUT",
        "/menu/mocha",
        Some(json!({
            "name": "Mocha",
            "description": "Espresso with dark chocolate",
            "price": 4.5,
            "ingredients": [{ "ingredient_id": "cocoa", "quantity": 20.0 }]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(item["price"], 4.5);

    let (_, menu) = send(&app, "GET", "/menu", None).await;
    assert_eq!(menu.as_array().unwrap().len(), 4);

    let (status, _) = send(&app, "DELETE", "/inventory/cocoa", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, "GET", "/inventory/cocoa", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    stop(shop, app).await;
}

#[tokio::test]
async fn test_reports_without_sales() {
    let (shop, app) = start().await;

    let (status, body) = send(&app, "GET", "/reports/total-sales", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_sales"], 0.0);

    let (status, body) = send(&app, "GET", "/reports/popular-items", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, item) = send(&app, "GET", "/reports/daily-item", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(item["product_id"].is_string());

    let (status, summary) = send(&app, "GET", "/reports/summary", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(summary["popular_items"].is_null());

    stop(shop, app).await;
}
