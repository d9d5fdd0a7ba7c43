//! Product catalog entity and DTOs.

use salesdesk_core::types::{DbId, Money, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A product row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub code: Option<String>,
    pub image_url: Option<String>,
    pub cost_price: Option<Money>,
    pub retail_price: Option<Money>,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

/// DTO for creating a product.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub code: Option<String>,
    pub image_url: Option<String>,
    pub cost_price: Option<Money>,
    pub retail_price: Option<Money>,
}

/// DTO for updating a product. The fields replace the stored values
/// wholesale, matching the store routine's parameter set.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProduct {
    pub name: String,
    pub code: Option<String>,
    pub image_url: Option<String>,
    pub cost_price: Option<Money>,
    pub retail_price: Option<Money>,
}

/// Outcome of a product delete. The store refuses to remove a product
/// that sale history still references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductDelete {
    Deleted,
    NotFound,
    InUse,
}
