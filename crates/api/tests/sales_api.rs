//! HTTP-level integration tests for the `/sales` resource.
//!
//! Covers the aggregate round-trip through the envelope contract: tagged
//! detail change-sets in, re-fetched rows with echoed tags out, and every
//! failure as HTTP 200 with `success: false`.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use salesdesk_core::types::{DbId, Money};
use salesdesk_db::models::product::CreateProduct;
use salesdesk_db::models::salesperson::CreateSalesperson;
use salesdesk_db::repositories::{ProductRepo, SalespersonRepo};
use sqlx::PgPool;

fn money(text: &str) -> Money {
    text.parse().unwrap()
}

/// Seed a product through the repository layer to keep HTTP calls for the
/// behaviour under test.
async fn seed_product(pool: &PgPool, name: &str, price: &str) -> DbId {
    ProductRepo::create(
        pool,
        &CreateProduct {
            name: name.to_string(),
            code: None,
            image_url: None,
            cost_price: None,
            retail_price: Some(money(price)),
        },
    )
    .await
    .unwrap()
    .id
}

async fn seed_salesperson(pool: &PgPool, name: &str, code: &str) -> DbId {
    SalespersonRepo::create(
        pool,
        &CreateSalesperson {
            name: name.to_string(),
            code: code.to_string(),
            entered_at: None,
        },
    )
    .await
    .unwrap()
    .id
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_sale_with_two_details(pool: PgPool) {
    let chair = seed_product(&pool, "Chair", "10.00").await;
    let lamp = seed_product(&pool, "Lamp", "5.00").await;
    let ada = seed_salesperson(&pool, "Ada", "SP-001").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/sales",
        serde_json::json!({
            "salesperson_id": ada,
            "comments": "first order",
            "details": [
                {"product_id": chair, "retail_price": "10.00", "quantity": 2},
                {"product_id": lamp, "retail_price": "5.00", "quantity": 1, "discount": "1.00"},
            ],
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Sale created successfully");

    // 2 * 10.00 + (5.00 - 1.00) = 24.00, computed by the store.
    let sale = &json["data"];
    assert!(sale["id"].is_number());
    assert_eq!(sale["total"], "24.00");
    assert_eq!(sale["salesperson_name"], "Ada");
    assert_eq!(sale["comments"], "first order");
    assert!(sale["sale_date"].is_string());

    let details = sale["details"].as_array().unwrap();
    assert_eq!(details.len(), 2);
    for detail in details {
        assert!(detail["id"].is_number());
        assert_eq!(detail["row_state"], "added");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_defaults_sale_date_and_salesperson(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/sales", serde_json::json!({"details": []})).await;

    let json = body_json(response).await;
    assert_eq!(json["success"], true);

    let sale = &json["data"];
    assert!(sale["sale_date"].is_string(), "sale_date must be defaulted");
    assert!(sale["salesperson_id"].is_null());
    assert!(sale["salesperson_name"].is_null());
    assert_eq!(sale["total"], "0.00");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_unknown_salesperson_writes_nothing(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/sales",
        serde_json::json!({"salesperson_id": 999999, "details": []}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(
        json["message"],
        "Referenced Salesperson with id 999999 does not exist"
    );
    assert!(json["data"].is_null());

    // The reference check runs before any write.
    let app = common::build_test_app(pool);
    let list = body_json(get(app, "/api/v1/sales").await).await;
    assert_eq!(list["total_records"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_rejects_zero_quantity(pool: PgPool) {
    let chair = seed_product(&pool, "Chair", "10.00").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/sales",
        serde_json::json!({
            "details": [{"product_id": chair, "retail_price": "10.00", "quantity": 0}],
        }),
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(
        json["message"],
        "Validation failed: Quantity must be at least 1 (got 0)"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_rejects_duplicate_product_rows(pool: PgPool) {
    let chair = seed_product(&pool, "Chair", "10.00").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/sales",
        serde_json::json!({
            "details": [
                {"product_id": chair, "retail_price": "10.00", "quantity": 1},
                {"product_id": chair, "retail_price": "10.00", "quantity": 2},
            ],
        }),
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "A sale cannot list the same product twice");
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_serves_summary_unless_details_requested(pool: PgPool) {
    let chair = seed_product(&pool, "Chair", "10.00").await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/sales",
            serde_json::json!({
                "details": [{"product_id": chair, "retail_price": "10.00", "quantity": 2}],
            }),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    // Summary fetch: no detail rows.
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/sales/{id}")).await).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["total"], "20.00");
    assert_eq!(json["data"]["details"].as_array().unwrap().len(), 0);

    // Hydrated fetch: rows present, tagged unchanged.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/sales/{id}?include_details=true")).await).await;
    let details = json["data"]["details"].as_array().unwrap();
    assert_eq!(details.len(), 1);
    assert_eq!(details[0]["product_id"], chair);
    assert_eq!(details[0]["row_state"], "unchanged");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_missing_sale_reports_not_found(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/sales/999999").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Sale with id 999999 not found");
}

// ---------------------------------------------------------------------------
// Update (tagged change-set)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_put_change_set_echoes_tags_and_drops_deleted(pool: PgPool) {
    let chair = seed_product(&pool, "Chair", "10.00").await;
    let lamp = seed_product(&pool, "Lamp", "5.00").await;
    let ada = seed_salesperson(&pool, "Ada", "SP-001").await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/sales",
            serde_json::json!({
                "salesperson_id": ada,
                "details": [
                    {"product_id": chair, "retail_price": "10.00", "quantity": 2},
                    {"product_id": lamp, "retail_price": "5.00", "quantity": 1, "discount": "1.00"},
                ],
            }),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/sales/{id}"),
        serde_json::json!({
            "salesperson_id": ada,
            "comments": "revised",
            "details": [
                {"product_id": chair, "retail_price": "10.00", "quantity": 3, "row_state": "modified"},
                {"product_id": lamp, "retail_price": "5.00", "quantity": 1, "row_state": "deleted"},
            ],
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Sale updated successfully");

    // The deleted row is gone; the surviving row echoes the caller's tag.
    let sale = &json["data"];
    assert_eq!(sale["total"], "30.00");
    assert_eq!(sale["comments"], "revised");
    assert!(sale["updated_at"].is_string());

    let details = sale["details"].as_array().unwrap();
    assert_eq!(details.len(), 1);
    assert_eq!(details[0]["product_id"], chair);
    assert_eq!(details[0]["quantity"], 3);
    assert_eq!(details[0]["row_state"], "modified");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_echoes_unchanged_for_unmentioned_rows(pool: PgPool) {
    let chair = seed_product(&pool, "Chair", "10.00").await;
    let lamp = seed_product(&pool, "Lamp", "5.00").await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/sales",
            serde_json::json!({
                "details": [
                    {"product_id": chair, "retail_price": "10.00", "quantity": 2},
                    {"product_id": lamp, "retail_price": "5.00", "quantity": 1},
                ],
            }),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    // The change-set only mentions the chair row.
    let app = common::build_test_app(pool);
    let json = body_json(
        put_json(
            app,
            &format!("/api/v1/sales/{id}"),
            serde_json::json!({
                "details": [
                    {"product_id": chair, "retail_price": "10.00", "quantity": 5, "row_state": "modified"},
                ],
            }),
        )
        .await,
    )
    .await;

    let details = json["data"]["details"].as_array().unwrap();
    assert_eq!(details.len(), 2);
    assert_eq!(details[0]["product_id"], chair);
    assert_eq!(details[0]["quantity"], 5);
    assert_eq!(details[0]["row_state"], "modified");
    assert_eq!(details[1]["product_id"], lamp);
    assert_eq!(details[1]["row_state"], "unchanged");
    assert_eq!(json["data"]["total"], "55.00");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_put_change_set_inserts_added_rows(pool: PgPool) {
    let chair = seed_product(&pool, "Chair", "10.00").await;
    let desk = seed_product(&pool, "Desk", "100.00").await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/sales",
            serde_json::json!({
                "details": [{"product_id": chair, "retail_price": "10.00", "quantity": 2}],
            }),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let json = body_json(
        put_json(
            app,
            &format!("/api/v1/sales/{id}"),
            serde_json::json!({
                "details": [
                    {"product_id": desk, "retail_price": "100.00", "quantity": 1, "row_state": "added"},
                ],
            }),
        )
        .await,
    )
    .await;

    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["total"], "120.00");

    let details = json["data"]["details"].as_array().unwrap();
    assert_eq!(details.len(), 2);
    assert_eq!(details[0]["product_id"], chair);
    assert_eq!(details[0]["row_state"], "unchanged");
    assert_eq!(details[1]["product_id"], desk);
    assert_eq!(details[1]["row_state"], "added");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_sale_reports_not_found(pool: PgPool) {
    let app = common::build_test_app(pool);
    let json = body_json(
        put_json(
            app,
            "/api/v1/sales/999999",
            serde_json::json!({"details": []}),
        )
        .await,
    )
    .await;

    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Sale with id 999999 not found");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_sale_then_delete_again(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(app, "/api/v1/sales", serde_json::json!({"details": []})).await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let json = body_json(delete(app, &format!("/api/v1/sales/{id}")).await).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Sale deleted successfully");
    assert!(json["data"].is_null());

    // The second delete finds nothing.
    let app = common::build_test_app(pool);
    let json = body_json(delete(app, &format!("/api/v1/sales/{id}")).await).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], format!("Sale with id {id} not found"));
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_serves_window_and_full_count(pool: PgPool) {
    for _ in 0..3 {
        let app = common::build_test_app(pool.clone());
        post_json(app, "/api/v1/sales", serde_json::json!({"details": []})).await;
    }

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/sales?start_index=0&end_index=2").await).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
    assert_eq!(json["start_index"], 0);
    assert_eq!(json["end_index"], 2);
    assert_eq!(json["total_records"], 3);

    // Omitted parameters fall back to the first ten rows.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/sales").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 3);
    assert_eq!(json["start_index"], 0);
    assert_eq!(json["end_index"], 10);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_rejects_inverted_window(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/sales?start_index=5&end_index=2").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(
        json["message"],
        "Invalid pagination range: start_index 5, end_index 2"
    );
}
