//! Integration tests for storefront page rendering.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use simple_market_integration_tests::TestClient;

#[tokio::test]
async fn test_health() {
    let mut client = TestClient::new();
    let resp = client.get("/health").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body, "ok");
}

#[tokio::test]
async fn test_home_shows_hero_and_featured_products() {
    let mut client = TestClient::new();
    let resp = client.get("/").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Premium Products for Modern Living"));
    assert!(resp.body.contains("Featured Products"));
    assert!(resp.body.contains("Premium Laptop"));
    assert!(resp.body.contains("Wireless Headphones"));
    assert!(resp.body.contains("Smart Watch"));
    assert!(!resp.body.contains("Bluetooth Speaker"));
    assert!(resp.body.contains("Ready to Elevate Your Shopping Experience?"));
}

#[tokio::test]
async fn test_empty_cart_hides_badge_and_panel() {
    let mut client = TestClient::new();
    let resp = client.get("/").await;

    assert!(!resp.body.contains("data-cart-count"));
    assert!(!resp.body.contains("cart-panel"));
}

#[tokio::test]
async fn test_products_lists_all_by_default() {
    let mut client = TestClient::new();
    let resp = client.get("/products").await;

    assert_eq!(resp.status, StatusCode::OK);
    for name in [
        "Premium Laptop",
        "Wireless Headphones",
        "Smart Watch",
        "Professional Camera",
        "Bluetooth Speaker",
        "Ergonomic Chair",
        "Smart Home Hub",
        "Wireless Charger",
    ] {
        assert!(resp.body.contains(name), "missing {name}");
    }
    assert!(resp.body.contains("/products?category=Smart+Home"));
}

#[tokio::test]
async fn test_products_filtered_by_category() {
    let mut client = TestClient::new();
    let resp = client.get("/products?category=Audio").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Wireless Headphones"));
    assert!(resp.body.contains("Bluetooth Speaker"));
    assert!(!resp.body.contains("Premium Laptop"));
    assert!(!resp.body.contains("Smart Watch"));
}

#[tokio::test]
async fn test_products_unknown_category_shows_empty_state() {
    let mut client = TestClient::new();
    let resp = client.get("/products?category=Garden").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("No products found in this category."));
    assert!(resp.body.contains("View all products"));
}

#[tokio::test]
async fn test_product_detail() {
    let mut client = TestClient::new();
    let resp = client.get("/product/3").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Smart Watch"));
    assert!(resp.body.contains("$199.99"));
    assert!(resp.body.contains("Add to Cart"));
}

#[tokio::test]
async fn test_unknown_product_is_not_found() {
    let mut client = TestClient::new();

    for uri in ["/product/999", "/product/abc"] {
        let resp = client.get(uri).await;
        assert_eq!(resp.status, StatusCode::NOT_FOUND, "{uri}");
        assert!(resp.body.contains("Product not found"), "{uri}");
        assert!(resp.body.contains("href=\"/products\""), "{uri}");
    }
}

#[tokio::test]
async fn test_unknown_path_renders_not_found_page() {
    let mut client = TestClient::new();
    let resp = client.get("/no/such/page").await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert!(resp.body.contains("Page not found"));
    assert!(resp.body.contains("SimpleMarket"));
}

#[tokio::test]
async fn test_active_nav_link() {
    let mut client = TestClient::new();
    let resp = client.get("/products").await;
    assert!(resp.body.contains("navbar__link navbar__link--active\" aria-current=\"page\">Products"));
}

#[tokio::test]
async fn test_security_and_request_id_headers() {
    let mut client = TestClient::new();
    let resp = client.get("/").await;

    let csp = resp.headers["content-security-policy"].to_str().unwrap();
    assert!(csp.contains("img-src 'self' https://images.unsplash.com"));
    assert_eq!(resp.headers["x-frame-options"], "DENY");
    assert_eq!(resp.headers["cache-control"], "no-store, max-age=0");
    assert!(!resp.headers["x-request-id"].is_empty());
}
