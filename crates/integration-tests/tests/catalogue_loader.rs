//! Integration tests for the catalogue loader against a mock API.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use guitarguitar_core::{Colour, CustomerId, DecodeError, JsonType, OrderStatus, find_by_email};
use guitarguitar_integration_tests::{TestContext, fixtures};
use guitarguitar_storefront::catalogue::{CatalogueClient, CatalogueError};
use guitarguitar_storefront::config::{CatalogueConfig, DEFAULT_CATALOGUE_API_URL};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

// ============================================================================
// Successful Loads
// ============================================================================

#[tokio::test]
async fn test_literal_orders_payload() {
    let ctx = TestContext::new().await;
    ctx.mount_raw("orders", 200, fixtures::LITERAL_ORDERS).await;

    let orders = ctx.state.catalogue().load_orders().await.unwrap();

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].status, OrderStatus::Placed);
    assert!(orders[0].products.is_empty());
    assert_eq!(orders[0].shipping_address.city, "York");
}

#[tokio::test]
async fn test_load_customers_and_match_email() {
    let ctx = TestContext::new().await;
    ctx.mount_json(
        "customers",
        json!([
            fixtures::customer(1, "Ada", "ada@example.com"),
            fixtures::customer(2, "Grace", "grace@example.com"),
        ]),
    )
    .await;

    let customers = ctx.state.catalogue().load_customers().await.unwrap();

    assert_eq!(customers.len(), 2);
    assert_eq!(customers[1].loyalty_level, 2);
    assert_eq!(
        find_by_email(&customers, "grace@example.com").map(|c| c.id),
        Some(CustomerId::new(2))
    );
    assert!(find_by_email(&customers, "GRACE@example.com").is_none());
}

#[tokio::test]
async fn test_load_products_keeps_unknown_codes() {
    let ctx = TestContext::new().await;
    ctx.mount_json(
        "products",
        json!([
            fixtures::product("SKU-1", "Gibson Les Paul Standard", 12),
            fixtures::product("SKU-2", "Gibson Les Paul Custom", 0),
        ]),
    )
    .await;

    let products = ctx.state.catalogue().load_products().await.unwrap();

    assert_eq!(products[0].colour, Colour::Black);
    assert_eq!(products[1].colour, Colour::Unknown);
}

#[tokio::test]
async fn test_empty_collection() {
    let ctx = TestContext::new().await;
    ctx.mount_json("orders", json!([])).await;

    assert!(ctx.state.catalogue().load_orders().await.unwrap().is_empty());
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_non_200_is_fetch_error() {
    let ctx = TestContext::new().await;
    ctx.mount_raw("orders", 503, "maintenance").await;

    let err = ctx.state.catalogue().load_orders().await.unwrap_err();

    assert_eq!(err.status().map(|s| s.as_u16()), Some(503));
    assert!(matches!(
        err,
        CatalogueError::Fetch { ref endpoint, ref body, .. }
            if endpoint == "orders" && body == "maintenance"
    ));
}

#[tokio::test]
async fn test_non_200_success_status_is_fetch_error() {
    let ctx = TestContext::new().await;
    ctx.mount_raw("customers", 204, "").await;

    let err = ctx.state.catalogue().load_customers().await.unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(204));
}

#[tokio::test]
async fn test_top_level_object_is_shape_error() {
    let ctx = TestContext::new().await;
    ctx.mount_json("orders", json!({"orders": []})).await;

    let err = ctx.state.catalogue().load_orders().await.unwrap_err();

    assert!(matches!(
        err,
        CatalogueError::Shape {
            actual: JsonType::Object,
            ..
        }
    ));
}

#[tokio::test]
async fn test_invalid_json_is_parse_error() {
    let ctx = TestContext::new().await;
    ctx.mount_raw("products", 200, "<html>oops</html>").await;

    let err = ctx.state.catalogue().load_products().await.unwrap_err();
    assert!(matches!(err, CatalogueError::Parse { .. }));
}

#[tokio::test]
async fn test_element_failure_reports_index() {
    let ctx = TestContext::new().await;
    let mut bad = fixtures::product("SKU-2", "Broken", 1);
    bad["SalesPrice"] = json!(100);
    ctx.mount_json(
        "products",
        json!([fixtures::product("SKU-1", "Fine", 1), bad]),
    )
    .await;

    let err = ctx.state.catalogue().load_products().await.unwrap_err();

    match err {
        CatalogueError::Decode { index, source, .. } => {
            assert_eq!(index, 1);
            assert!(matches!(
                source,
                DecodeError::TypeMismatch { ref key, .. } if key == "SalesPrice"
            ));
        }
        other => panic!("expected Decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_nested_product_error_context() {
    let ctx = TestContext::new().await;
    let mut product = fixtures::product("SKU-1", "Fine", 1);
    product.as_object_mut().unwrap().remove("Title");
    ctx.mount_json("orders", json!([fixtures::order(1, 1, 2, vec![product])]))
        .await;

    let err = ctx.state.catalogue().load_orders().await.unwrap_err();

    match err {
        CatalogueError::Decode { source, .. } => {
            assert_eq!(source.context(), "Order:Product");
        }
        other => panic!("expected Decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_order_status_fails_load() {
    let ctx = TestContext::new().await;
    ctx.mount_json("orders", json!([fixtures::order(1, 1, 7, vec![])]))
        .await;

    let err = ctx.state.catalogue().load_orders().await.unwrap_err();
    assert!(matches!(
        err,
        CatalogueError::Decode {
            source: DecodeError::InvalidEnumValue { value: 7, .. },
            ..
        }
    ));
}

#[tokio::test]
async fn test_slow_upstream_times_out() {
    let ctx = TestContext::with_timeout(1).await;
    Mock::given(method("GET"))
        .and(path("/orders/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&ctx.server)
        .await;

    let err = ctx.state.catalogue().load_orders().await.unwrap_err();
    assert!(matches!(err, CatalogueError::Transport { .. }));
    assert!(err.is_fetch_error());
}

#[tokio::test]
async fn test_unreachable_upstream_is_transport_error() {
    // Port 9 (discard) is not expected to be listening
    let config = CatalogueConfig::new("http://127.0.0.1:9/", 1).unwrap();
    let client = CatalogueClient::new(&config).unwrap();

    let err = client.load_customers().await.unwrap_err();
    assert!(matches!(err, CatalogueError::Transport { .. }));
}

// ============================================================================
// Live API
// ============================================================================

#[tokio::test]
#[ignore = "Requires network access to the live catalogue API"]
async fn test_live_collections_decode() {
    let config = CatalogueConfig::new(DEFAULT_CATALOGUE_API_URL, 30).unwrap();
    let client = CatalogueClient::new(&config).unwrap();

    let customers = client.load_customers().await.unwrap();
    let products = client.load_products().await.unwrap();
    let orders = client.load_orders().await.unwrap();

    assert!(!customers.is_empty());
    assert!(!products.is_empty());
    assert!(!orders.is_empty());
}
