//! Orchestration for the sale aggregate.
//!
//! Writes arrive as a full detail list where every row carries a
//! [`RowState`] tag naming the caller's intent. The store applies the
//! tagged writes atomically but the update routine returns nothing, so
//! after a write this service re-fetches the aggregate and echoes the
//! caller's tags back onto the fresh rows: the requested tag per product
//! reference, `Unchanged` for rows the change-set never mentioned.
//!
//! Validation failures are immediate; store failures propagate. There are
//! no retries and no compensation.

use chrono::Utc;
use salesdesk_core::error::CoreError;
use salesdesk_core::pagination::{Page, PageWindow};
use salesdesk_core::reconcile;
use salesdesk_core::row_state::RowState;
use salesdesk_core::types::DbId;
use salesdesk_core::validation;
use salesdesk_db::models::sale::{CreateSale, NewSale, Sale, SaleDetailInput, UpdateSale};
use salesdesk_db::repositories::{SaleRepo, SalespersonRepo};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

/// Provides the sale aggregate's application operations.
pub struct SaleService;

impl SaleService {
    /// Serve one window of sale summaries plus the table-wide row count.
    pub async fn list(pool: &PgPool, window: &PageWindow) -> AppResult<Page<Sale>> {
        Ok(SaleRepo::list(pool, window).await?)
    }

    /// Fetch a sale summary without its detail rows.
    pub async fn get(pool: &PgPool, id: DbId) -> AppResult<Sale> {
        SaleRepo::find_by_id(pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound { entity: "Sale", id }))
    }

    /// Fetch a sale with its detail rows hydrated, each tagged `Unchanged`.
    pub async fn get_with_details(pool: &PgPool, id: DbId) -> AppResult<Sale> {
        SaleRepo::find_with_details(pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound { entity: "Sale", id }))
    }

    /// Create a sale with its detail rows in one atomic store call.
    ///
    /// Whatever tags the caller sent, creation inserts every row, so each
    /// detail is stamped `Added` both in the store payload and on the rows
    /// the store hands back. A missing sale date defaults to now.
    pub async fn create(pool: &PgPool, input: CreateSale) -> AppResult<Sale> {
        validate_sale_input(input.comments.as_deref(), &input.details)?;
        ensure_salesperson_exists(pool, input.salesperson_id).await?;

        let new_sale = NewSale {
            salesperson_id: input.salesperson_id,
            comments: input.comments,
            sale_date: input.sale_date.unwrap_or_else(Utc::now),
        };
        let details: Vec<SaleDetailInput> = input
            .details
            .into_iter()
            .map(|detail| SaleDetailInput {
                row_state: RowState::Added,
                ..detail
            })
            .collect();

        let mut sale = SaleRepo::create(pool, &new_sale, &details)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Persistence(
                    "sale creation returned no row".to_string(),
                ))
            })?;
        for detail in &mut sale.details {
            detail.row_state = RowState::Added;
        }

        tracing::info!(sale_id = sale.id, total = %sale.total, "Sale created");
        Ok(sale)
    }

    /// Apply a tagged detail change-set to an existing sale.
    ///
    /// The caller's tags travel to the store verbatim; the requested tag
    /// per product is captured first so it can be echoed onto the rows
    /// the re-fetch brings back. Rows the change-set never mentioned come
    /// back `Unchanged`; rows it deleted do not come back at all.
    pub async fn update(pool: &PgPool, id: DbId, input: UpdateSale) -> AppResult<Sale> {
        if SaleRepo::find_by_id(pool, id).await?.is_none() {
            return Err(AppError::Core(CoreError::NotFound { entity: "Sale", id }));
        }
        validate_sale_input(input.comments.as_deref(), &input.details)?;
        ensure_salesperson_exists(pool, input.salesperson_id).await?;

        let requested = reconcile::requested_row_states(
            input
                .details
                .iter()
                .map(|detail| (detail.product_id, detail.row_state)),
        );

        SaleRepo::update(pool, id, &input).await?;

        let mut sale = SaleRepo::find_with_details(pool, id)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Persistence(format!(
                    "sale {id} disappeared during update"
                )))
            })?;
        for detail in &mut sale.details {
            detail.row_state = reconcile::echoed_state(&requested, detail.product_id);
        }

        tracing::info!(sale_id = sale.id, total = %sale.total, "Sale updated");
        Ok(sale)
    }

    /// Delete a sale and, by cascade, its detail rows.
    pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<()> {
        if SaleRepo::find_by_id(pool, id).await?.is_none() {
            return Err(AppError::Core(CoreError::NotFound { entity: "Sale", id }));
        }

        let deleted = SaleRepo::delete(pool, id).await?;
        if !deleted {
            return Err(AppError::Core(CoreError::Persistence(format!(
                "sale deletion removed no row for id {id}"
            ))));
        }

        tracing::info!(sale_id = id, "Sale deleted");
        Ok(())
    }
}

/// Reject out-of-range comments and malformed detail lines before any
/// store round-trip.
fn validate_sale_input(comments: Option<&str>, details: &[SaleDetailInput]) -> AppResult<()> {
    validation::validate_comments(comments)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    for detail in details {
        validation::validate_detail_line(detail.quantity, detail.retail_price, detail.discount)
            .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    }
    Ok(())
}

/// The reference check: a supplied salesperson id must name an existing
/// row before any write is attempted.
async fn ensure_salesperson_exists(pool: &PgPool, salesperson_id: Option<DbId>) -> AppResult<()> {
    if let Some(id) = salesperson_id {
        if !SalespersonRepo::exists(pool, id).await? {
            return Err(AppError::Core(CoreError::ReferenceNotFound {
                entity: "Salesperson",
                id,
            }));
        }
    }
    Ok(())
}
