//! Products Domain
//!
//! Client-side domain for managing products through a remote REST API.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Caller    │  ← CLI or other UI boundary
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, error translation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Gateway   │  ← HTTP wrapper (trait + reqwest implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, validation rules
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use core_config::api::ApiConfig;
//! use domain_products::{HttpProductGateway, ProductService};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ApiConfig::new("http://localhost:5000/api".to_string());
//! let service = ProductService::new(HttpProductGateway::new(config));
//!
//! let products = service.list_products().await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod gateway;
pub mod models;
pub mod service;

// Re-export commonly used types
pub use error::{ApiError, ProductError, ProductResult};
pub use gateway::{ApiResponse, HttpProductGateway, ProductGateway};
pub use models::{Product, ProductInput};
pub use service::ProductService;
