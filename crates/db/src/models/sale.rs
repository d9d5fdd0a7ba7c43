//! Sale aggregate models and change-set DTOs.
//!
//! A sale is a parent row plus an ordered set of detail rows. Writes
//! travel as a full detail list where every row carries a [`RowState`]
//! tag naming the caller's intent; reads come back tagged `Unchanged`.

use salesdesk_core::row_state::RowState;
use salesdesk_core::types::{DbId, Money, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A sale summary row (the parent of the aggregate).
///
/// `salesperson_name` is a read-time projection resolved by the store on
/// every fetch; it is never written. `details` is populated only by the
/// detail-hydrating operations and is otherwise empty.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Sale {
    pub id: DbId,
    /// Store-computed from the detail rows; never caller-supplied.
    pub total: Money,
    pub sale_date: Timestamp,
    pub salesperson_id: Option<DbId>,
    pub salesperson_name: Option<String>,
    pub comments: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
    #[sqlx(skip)]
    pub details: Vec<SaleDetail>,
}

/// One line item of a sale.
///
/// `row_state` is transient caller intent and is never persisted; rows
/// decoded from the store carry the default `Unchanged`.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SaleDetail {
    pub id: DbId,
    pub product_id: DbId,
    pub retail_price: Money,
    pub quantity: i32,
    pub discount: Money,
    #[sqlx(skip)]
    #[serde(default)]
    pub row_state: RowState,
}

/// One caller-supplied detail row in a create/update change-set.
///
/// This is exactly the record shape of the store's detail payload:
/// rows are addressed by product reference and carry no detail id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleDetailInput {
    pub product_id: DbId,
    pub retail_price: Money,
    pub quantity: i32,
    /// Treated as zero by the store when omitted.
    pub discount: Option<Money>,
    #[serde(default)]
    pub row_state: RowState,
}

/// DTO for creating a sale. The service stamps every detail row `Added`
/// regardless of the incoming tags.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSale {
    pub salesperson_id: Option<DbId>,
    pub comments: Option<String>,
    /// Defaults to the current time when omitted.
    pub sale_date: Option<Timestamp>,
    #[serde(default)]
    pub details: Vec<SaleDetailInput>,
}

/// Resolved insert fields for a sale; `sale_date` has already been
/// defaulted by the service.
#[derive(Debug, Clone)]
pub struct NewSale {
    pub salesperson_id: Option<DbId>,
    pub comments: Option<String>,
    pub sale_date: Timestamp,
}

/// DTO for updating a sale: replacement parent fields plus the tagged
/// detail change-set.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSale {
    pub salesperson_id: Option<DbId>,
    pub comments: Option<String>,
    /// When omitted the stored sale date is kept.
    pub sale_date: Option<Timestamp>,
    #[serde(default)]
    pub details: Vec<SaleDetailInput>,
}
