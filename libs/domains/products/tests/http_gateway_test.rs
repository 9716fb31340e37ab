//! Gateway tests against an in-process stub of the remote products API.
//!
//! Each test stands up an axum router on an ephemeral port serving canned
//! envelope responses and points an `HttpProductGateway` at it.

use std::net::SocketAddr;
use std::time::Duration;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};

use core_config::api::ApiConfig;
use domain_products::{ApiError, HttpProductGateway, ProductGateway, ProductInput};

async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn gateway_for(addr: SocketAddr) -> HttpProductGateway {
    let config =
        ApiConfig::new(format!("http://{}", addr)).with_timeout(Duration::from_millis(500));
    HttpProductGateway::new(config)
}

fn product_json(id: &str) -> Value {
    json!({
        "id": id,
        "name": "Mechanical keyboard",
        "description": "Tenkeyless, brown switches",
        "stock": 12,
        "price": 89.99,
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z",
    })
}

fn sample_input() -> ProductInput {
    ProductInput {
        name: "Mechanical keyboard".to_string(),
        description: "Tenkeyless, brown switches".to_string(),
        stock: 12,
        price: 89.99,
    }
}

#[tokio::test]
async fn list_returns_products_from_success_envelope() {
    let app = Router::new().route(
        "/products",
        get(|| async {
            Json(json!({
                "success": true,
                "message": "Products fetched",
                "data": [product_json("p1"), product_json("p2")],
            }))
        }),
    );
    let gateway = gateway_for(serve(app).await);

    let products = gateway.list().await.unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, "p1");
    assert_eq!(products[1].id, "p2");
}

#[tokio::test]
async fn get_resolves_product_unchanged() {
    let app = Router::new().route(
        "/products/{id}",
        get(|Path(id): Path<String>| async move {
            Json(json!({
                "success": true,
                "message": "Product fetched",
                "data": product_json(&id),
            }))
        }),
    );
    let gateway = gateway_for(serve(app).await);

    let product = gateway.get("abc123").await.unwrap();
    assert_eq!(product.id, "abc123");
    assert_eq!(product.name, "Mechanical keyboard");
    assert_eq!(product.stock, 12);
    assert_eq!(product.price, 89.99);
}

#[tokio::test]
async fn create_round_trips_submitted_fields() {
    let app = Router::new().route(
        "/products",
        post(|Json(mut body): Json<Value>| async move {
            // Server assigns id and timestamps, echoes everything else
            body["id"] = json!("p42");
            body["createdAt"] = json!("2024-02-01T00:00:00Z");
            body["updatedAt"] = json!("2024-02-01T00:00:00Z");
            (
                StatusCode::CREATED,
                Json(json!({
                    "success": true,
                    "message": "Product created",
                    "data": body,
                })),
            )
        }),
    );
    let gateway = gateway_for(serve(app).await);

    let input = sample_input();
    let product = gateway.create(&input).await.unwrap();
    assert_eq!(product.id, "p42");
    assert_eq!(product.name, input.name);
    assert_eq!(product.description, input.description);
    assert_eq!(product.stock, input.stock);
    assert_eq!(product.price, input.price);
}

#[tokio::test]
async fn update_round_trips_submitted_fields() {
    let app = Router::new().route(
        "/products/{id}",
        put(|Path(id): Path<String>, Json(mut body): Json<Value>| async move {
            body["id"] = json!(id);
            body["createdAt"] = json!("2024-01-01T00:00:00Z");
            body["updatedAt"] = json!("2024-02-01T00:00:00Z");
            Json(json!({
                "success": true,
                "message": "Product updated",
                "data": body,
            }))
        }),
    );
    let gateway = gateway_for(serve(app).await);

    let input = sample_input();
    let product = gateway.update("abc123", &input).await.unwrap();
    assert_eq!(product.id, "abc123");
    assert_eq!(product.name, input.name);
}

#[tokio::test]
async fn delete_accepts_null_payload() {
    let app = Router::new().route(
        "/products/{id}",
        delete(|Path(_id): Path<String>| async {
            Json(json!({
                "success": true,
                "message": "Product deleted",
                "data": null,
            }))
        }),
    );
    let gateway = gateway_for(serve(app).await);

    assert!(gateway.delete("abc123").await.is_ok());
}

#[tokio::test]
async fn failure_envelope_surfaces_remote_status_and_message() {
    let app = Router::new().route(
        "/products/{id}",
        get(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "success": false,
                    "message": "Product not found",
                    "data": null,
                })),
            )
        }),
    );
    let gateway = gateway_for(serve(app).await);

    let err = gateway.get("missing").await.unwrap_err();
    assert_eq!(err.status(), 404);
    match err {
        ApiError::Api {
            status,
            message,
            envelope,
        } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Product not found");
            // The raw envelope is retained as detail
            assert!(!envelope.success);
            assert_eq!(envelope.message, "Product not found");
        }
        other => panic!("expected ApiError::Api, got {:?}", other),
    }
}

#[tokio::test]
async fn failed_envelope_with_ok_status_is_an_error() {
    let app = Router::new().route(
        "/products",
        get(|| async {
            Json(json!({
                "success": false,
                "message": "Backing store unavailable",
                "data": null,
            }))
        }),
    );
    let gateway = gateway_for(serve(app).await);

    let err = gateway.list().await.unwrap_err();
    match err {
        ApiError::Api { status, message, .. } => {
            assert_eq!(status, 200);
            assert_eq!(message, "Backing store unavailable");
        }
        other => panic!("expected ApiError::Api, got {:?}", other),
    }
}

#[tokio::test]
async fn empty_remote_message_falls_back_to_status_text() {
    let app = Router::new().route(
        "/products",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "success": false,
                    "message": "",
                    "data": null,
                })),
            )
        }),
    );
    let gateway = gateway_for(serve(app).await);

    let err = gateway.list().await.unwrap_err();
    match err {
        ApiError::Api { status, message, .. } => {
            assert_eq!(status, 500);
            assert_eq!(message, "API request failed: Internal Server Error");
        }
        other => panic!("expected ApiError::Api, got {:?}", other),
    }
}

#[tokio::test]
async fn times_out_when_remote_does_not_resolve() {
    let app = Router::new().route(
        "/products",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({"success": true, "message": "too late", "data": []}))
        }),
    );
    let addr = serve(app).await;
    let config =
        ApiConfig::new(format!("http://{}", addr)).with_timeout(Duration::from_millis(50));
    let gateway = HttpProductGateway::new(config);

    let err = gateway.list().await.unwrap_err();
    assert!(matches!(err, ApiError::Timeout));
    assert_eq!(err.status(), 408);
    assert_eq!(err.to_string(), "Request timeout");
}

#[tokio::test]
async fn non_envelope_body_is_a_transport_error() {
    let app = Router::new().route(
        "/products",
        get(|| async { (StatusCode::BAD_GATEWAY, "upstream exploded") }),
    );
    let gateway = gateway_for(serve(app).await);

    let err = gateway.list().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(err.status(), 500);
}

#[tokio::test]
async fn connection_refused_is_a_transport_error() {
    // Bind then drop the listener so the port is closed
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let gateway = gateway_for(addr);
    let err = gateway.list().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(err.status(), 500);
}
