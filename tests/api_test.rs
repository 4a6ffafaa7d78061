mod common;

use common::{response_json, TestApp};
use rust_decimal_macros::dec;

#[tokio::test]
async fn product_list_filters_and_sorts() {
    let app = TestApp::new().await;
    app.seed_product(Some("Blue Widget"), Some("WID-1"), Some("widgets"), Some(dec!(4)))
        .await;
    app.seed_product(Some("Red Widget"), Some("WID-2"), Some("widgets"), Some(dec!(9)))
        .await;
    app.seed_product(Some("Gadget"), Some("GAD-1"), Some("gadgets"), Some(dec!(1)))
        .await;

    let response = app
        .get("/api/v1/products?search=widget&sort_by=stock&sort_order=desc")
        .await;
    assert_eq!(response.status(), 200);
    let body = response_json(response).await;

    assert_eq!(body["total"], 2);
    let names: Vec<&str> = body["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Red Widget", "Blue Widget"]);
}

#[tokio::test]
async fn product_list_defaults_to_name_ascending() {
    let app = TestApp::new().await;
    app.seed_product(Some("banana"), None, None, None).await;
    app.seed_product(Some("Apple"), None, None, None).await;

    let response = app.get("/api/v1/products").await;
    assert_eq!(response.status(), 200);
    let body = response_json(response).await;
    let names: Vec<&str> = body["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Apple", "banana"]);
}

#[tokio::test]
async fn unrecognized_sort_parameters_fall_back_to_defaults() {
    let app = TestApp::new().await;
    app.seed_product(Some("banana"), None, None, None).await;
    app.seed_product(Some("Apple"), None, None, None).await;

    let response = app
        .get("/api/v1/products?sort_by=bogus&sort_order=sideways")
        .await;
    assert_eq!(response.status(), 200);
    let body = response_json(response).await;
    assert_eq!(body["products"][0]["name"], "Apple");
}

#[tokio::test]
async fn nameless_products_sort_to_the_bottom() {
    let app = TestApp::new().await;
    app.seed_product(None, Some("X-1"), None, None).await;
    app.seed_product(Some("Apple"), None, None, None).await;

    let response = app.get("/api/v1/products?sort_by=name&sort_order=desc").await;
    let body = response_json(response).await;
    let products = body["products"].as_array().unwrap();
    assert_eq!(products[0]["name"], "Apple");
    assert!(products[1]["name"].is_null());
}

#[tokio::test]
async fn movement_ledger_is_classified_and_most_recent_first() {
    let app = TestApp::new().await;
    let product_id = app
        .seed_product(Some("Blue Widget"), Some("WID-1"), None, Some(dec!(4)))
        .await;
    app.seed_movement(
        product_id,
        "SALIDA",
        Some(-5),
        None,
        Some("2025-02-01T10:00:00Z"),
    )
    .await;
    app.seed_movement(
        product_id,
        "ENTRADA",
        Some(3),
        Some("cancellation #2"),
        Some("2025-02-03T10:00:00Z"),
    )
    .await;
    app.seed_movement(product_id, "FOO", Some(1), None, None).await;

    let response = app
        .get(&format!("/api/v1/products/{product_id}/movements"))
        .await;
    assert_eq!(response.status(), 200);
    let body = response_json(response).await;

    assert_eq!(body["total"], 3);
    let movements = body["movements"].as_array().unwrap();
    // occurred_at descending; the undated row sorts last under SQL null ordering
    assert_eq!(movements[0]["description"], "Sales Return: 3");
    assert_eq!(movements[1]["description"], "Sales Out: -5");
    assert_eq!(movements[1]["quantity"], 5);
    assert_eq!(movements[1]["reference"], "-");
    assert_eq!(movements[2]["description"], "Unknown movement");
    assert_eq!(movements[2]["occurred_at"], "Invalid Date");
}

#[tokio::test]
async fn movements_for_unknown_product_are_an_empty_ledger() {
    let app = TestApp::new().await;
    let response = app
        .get(&format!("/api/v1/products/{}/movements", uuid::Uuid::new_v4()))
        .await;
    assert_eq!(response.status(), 200);
    let body = response_json(response).await;
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let app = TestApp::new().await;
    let response = app.get("/health").await;
    assert_eq!(response.status(), 200);
    let body = response_json(response).await;
    assert_eq!(body["status"], "ok");
}
