//! HTTP gateway to the remote products API.
//!
//! One outbound attempt per call, a per-request deadline, and uniform
//! handling of the `{success, message, data}` envelope every endpoint of the
//! remote API responds with.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use core_config::api::ApiConfig;

use crate::error::ApiError;
use crate::models::{Product, ProductInput};

/// Response envelope used by every endpoint of the remote API.
///
/// When `success` is false the payload must not be trusted as domain data,
/// which is why bodies are decoded with `data` as a raw [`Value`] first and
/// only converted to the domain type after the flags have been checked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: T,
}

/// Client-side contract for the remote product endpoints.
///
/// The service layer depends on this trait rather than on the HTTP
/// implementation, so tests can substitute a mock and assert that no network
/// call happens on pre-flight failures.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductGateway: Send + Sync {
    /// GET /products
    async fn list(&self) -> Result<Vec<Product>, ApiError>;

    /// GET /products/{id}
    async fn get(&self, id: &str) -> Result<Product, ApiError>;

    /// POST /products
    async fn create(&self, input: &ProductInput) -> Result<Product, ApiError>;

    /// PUT /products/{id}
    async fn update(&self, id: &str, input: &ProductInput) -> Result<Product, ApiError>;

    /// DELETE /products/{id}
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

/// [`ProductGateway`] backed by the remote REST API over reqwest.
pub struct HttpProductGateway {
    client: Client,
    config: ApiConfig,
}

impl HttpProductGateway {
    /// Create a gateway for the given API configuration.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Execute a single request against the remote API.
    ///
    /// The default `Content-Type: application/json` header is applied before
    /// the body, so body helpers see it as already present. The deadline
    /// spans the network call only; envelope decoding happens after the
    /// timer future has been dropped. There is exactly one attempt: callers
    /// must not assume idempotent retry semantics.
    async fn execute<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiResponse<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        let mut request = self
            .client
            .request(method, self.url(path))
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = tokio::time::timeout(self.config.timeout, request.send())
            .await
            .map_err(|_| ApiError::Timeout)??;

        let status = response.status();
        let envelope: ApiResponse<Value> = response.json().await?;

        if !status.is_success() || !envelope.success {
            let message = envelope_message(&envelope, status);
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
                envelope,
            });
        }

        let ApiResponse {
            success,
            message,
            data,
        } = envelope;
        let data = serde_json::from_value(data)?;

        Ok(ApiResponse {
            success,
            message,
            data,
        })
    }
}

fn envelope_message(envelope: &ApiResponse<Value>, status: StatusCode) -> String {
    if envelope.message.is_empty() {
        format!(
            "API request failed: {}",
            status.canonical_reason().unwrap_or("unknown status")
        )
    } else {
        envelope.message.clone()
    }
}

#[async_trait]
impl ProductGateway for HttpProductGateway {
    async fn list(&self) -> Result<Vec<Product>, ApiError> {
        let response = self
            .execute(Method::GET, "/products", None::<&ProductInput>)
            .await?;
        Ok(response.data)
    }

    async fn get(&self, id: &str) -> Result<Product, ApiError> {
        let path = format!("/products/{}", id);
        let response = self
            .execute(Method::GET, &path, None::<&ProductInput>)
            .await?;
        Ok(response.data)
    }

    async fn create(&self, input: &ProductInput) -> Result<Product, ApiError> {
        let response = self.execute(Method::POST, "/products", Some(input)).await?;
        Ok(response.data)
    }

    async fn update(&self, id: &str, input: &ProductInput) -> Result<Product, ApiError> {
        let path = format!("/products/{}", id);
        let response = self.execute(Method::PUT, &path, Some(input)).await?;
        Ok(response.data)
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/products/{}", id);
        // Delete responses carry no payload worth decoding
        let _: ApiResponse<Value> = self
            .execute(Method::DELETE, &path, None::<&ProductInput>)
            .await?;
        Ok(())
    }
}
