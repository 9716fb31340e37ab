use serde::{Deserialize, Serialize};
use validator::Validate;

/// Product entity - a record as reported by the remote products API
///
/// The server owns this type: ids and timestamps are assigned remotely and
/// treated as opaque strings on this side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (opaque, server-assigned)
    pub id: String,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Current stock quantity
    pub stock: i32,
    /// Unit price
    pub price: f64,
    /// Creation timestamp (opaque, server-assigned)
    pub created_at: String,
    /// Last update timestamp (opaque, server-assigned)
    pub updated_at: String,
}

/// DTO for creating or updating a product
///
/// Validation rules mirror what the server enforces, so a bad form is
/// rejected before it costs a network round-trip. The same rules run again
/// inside the service layer for defense in depth.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(range(min = 0))]
    pub stock: i32,
    #[validate(range(min = 0.0))]
    pub price: f64,
}
