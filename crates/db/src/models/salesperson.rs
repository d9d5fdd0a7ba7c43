//! Salesperson entity and DTOs.

use salesdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A salesperson row from the `salespersons` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Salesperson {
    pub id: DbId,
    pub name: String,
    pub code: String,
    /// Caller-supplied onboarding date, if recorded.
    pub entered_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

/// DTO for creating a salesperson.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSalesperson {
    pub name: String,
    pub code: String,
    pub entered_at: Option<Timestamp>,
}

/// DTO for updating a salesperson. `entered_at` is fixed at creation.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSalesperson {
    pub name: String,
    pub code: String,
}
