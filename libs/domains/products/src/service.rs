//! Product Service - validation and error translation layer

use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::gateway::ProductGateway;
use crate::models::{Product, ProductInput};

/// Product operations: validate locally, delegate to the gateway, translate
/// failures into domain errors.
///
/// Validation runs before any network call so a bad form never costs a
/// round-trip and failures carry field-level detail. Remote failures are
/// re-wrapped with operation context while keeping the original error as the
/// cause, so callers can present actionable messages without inspecting
/// status codes themselves.
pub struct ProductService<G: ProductGateway> {
    gateway: G,
}

impl<G: ProductGateway> ProductService<G> {
    /// Create a new ProductService over the given gateway
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Fetch all products
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.gateway
            .list()
            .await
            .map_err(|source| ProductError::List { source })
    }

    /// Fetch a single product by id
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<Product> {
        require_id(id)?;

        self.gateway
            .get(id)
            .await
            .map_err(|source| ProductError::Fetch {
                id: id.to_string(),
                source,
            })
    }

    /// Create a new product from validated input
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: &ProductInput) -> ProductResult<Product> {
        input.validate().map_err(ProductError::Validation)?;

        self.gateway
            .create(input)
            .await
            .map_err(|source| ProductError::Create { source })
    }

    /// Update an existing product
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn update_product(&self, id: &str, input: &ProductInput) -> ProductResult<Product> {
        require_id(id)?;
        input.validate().map_err(ProductError::Validation)?;

        self.gateway
            .update(id, input)
            .await
            .map_err(|source| ProductError::Update {
                id: id.to_string(),
                source,
            })
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> ProductResult<()> {
        require_id(id)?;

        self.gateway
            .delete(id)
            .await
            .map_err(|source| ProductError::Delete {
                id: id.to_string(),
                source,
            })
    }
}

/// Opaque ids come from form-like callers, so blank counts as missing.
fn require_id(id: &str) -> ProductResult<()> {
    if id.trim().is_empty() {
        return Err(ProductError::MissingId);
    }
    Ok(())
}
