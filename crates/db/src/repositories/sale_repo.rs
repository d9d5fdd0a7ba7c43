//! Repository for the sale aggregate, backed by the `sale_*` routines.
//!
//! This module owns the change-set wire protocol: detail rows travel to
//! the store as a jsonb array of tagged records, and the create routine
//! hands the persisted rows back inside a jsonb column. The tags are
//! applied by the store, never interpreted here.

use salesdesk_core::pagination::{Page, PageWindow};
use salesdesk_core::types::{DbId, Money, Timestamp};
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::sale::{NewSale, Sale, SaleDetail, SaleDetailInput, UpdateSale};

/// Row shape served by `sale_list`: summary columns plus the repeated
/// table-wide row count.
#[derive(sqlx::FromRow)]
struct SaleListRow {
    id: DbId,
    total: Money,
    sale_date: Timestamp,
    salesperson_id: Option<DbId>,
    salesperson_name: Option<String>,
    comments: Option<String>,
    created_at: Timestamp,
    updated_at: Option<Timestamp>,
    total_records: i64,
}

impl From<SaleListRow> for Sale {
    fn from(row: SaleListRow) -> Self {
        Sale {
            id: row.id,
            total: row.total,
            sale_date: row.sale_date,
            salesperson_id: row.salesperson_id,
            salesperson_name: row.salesperson_name,
            comments: row.comments,
            created_at: row.created_at,
            updated_at: row.updated_at,
            details: Vec::new(),
        }
    }
}

/// Row shape served by `sale_create`: summary columns plus the created
/// detail rows aggregated into a jsonb array.
#[derive(sqlx::FromRow)]
struct CreatedSaleRow {
    id: DbId,
    total: Money,
    sale_date: Timestamp,
    salesperson_id: Option<DbId>,
    salesperson_name: Option<String>,
    comments: Option<String>,
    created_at: Timestamp,
    updated_at: Option<Timestamp>,
    details: Json<Vec<SaleDetail>>,
}

impl From<CreatedSaleRow> for Sale {
    fn from(row: CreatedSaleRow) -> Self {
        Sale {
            id: row.id,
            total: row.total,
            sale_date: row.sale_date,
            salesperson_id: row.salesperson_id,
            salesperson_name: row.salesperson_name,
            comments: row.comments,
            created_at: row.created_at,
            updated_at: row.updated_at,
            details: row.details.0,
        }
    }
}

/// Provides the sale aggregate's persistence operations.
pub struct SaleRepo;

impl SaleRepo {
    /// Serve one window of sale summaries plus the table-wide row count.
    ///
    /// The count is computed by the store in the same statement that
    /// serves the window, so it is independent of the window size; an
    /// empty window reports zero. Detail rows are not hydrated here.
    pub async fn list(pool: &PgPool, window: &PageWindow) -> Result<Page<Sale>, sqlx::Error> {
        let rows: Vec<SaleListRow> = sqlx::query_as("SELECT * FROM sale_list($1, $2)")
            .bind(window.start_index)
            .bind(window.end_index)
            .fetch_all(pool)
            .await?;

        let total_records = rows.first().map(|r| r.total_records).unwrap_or(0);
        Ok(Page {
            rows: rows.into_iter().map(Sale::from).collect(),
            total_records,
        })
    }

    /// Find a sale summary by ID. Detail rows are not hydrated.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Sale>, sqlx::Error> {
        sqlx::query_as::<_, Sale>("SELECT * FROM sale_get($1)")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch a sale with its detail rows hydrated, ordered by detail id.
    /// Every detail comes back tagged `Unchanged`.
    pub async fn find_with_details(pool: &PgPool, id: DbId) -> Result<Option<Sale>, sqlx::Error> {
        let mut sale = match Self::find_by_id(pool, id).await? {
            Some(sale) => sale,
            None => return Ok(None),
        };

        sale.details = sqlx::query_as::<_, SaleDetail>("SELECT * FROM sale_details_list($1)")
            .bind(id)
            .fetch_all(pool)
            .await?;

        Ok(Some(sale))
    }

    /// Create a sale and its detail rows in one atomic routine call.
    ///
    /// `details` must already carry the tags the store should apply (the
    /// service stamps create rows `Added`). Returns the persisted
    /// aggregate with store-assigned detail ids, or `None` when the store
    /// yields no created row.
    pub async fn create(
        pool: &PgPool,
        input: &NewSale,
        details: &[SaleDetailInput],
    ) -> Result<Option<Sale>, sqlx::Error> {
        let row: Option<CreatedSaleRow> =
            sqlx::query_as("SELECT * FROM sale_create($1, $2, $3, $4)")
                .bind(input.salesperson_id)
                .bind(input.comments.as_deref())
                .bind(input.sale_date)
                .bind(Json(details))
                .fetch_optional(pool)
                .await?;

        Ok(row.map(Sale::from))
    }

    /// Apply a tagged change-set to an existing sale in one atomic
    /// routine call. The caller's tags travel verbatim.
    ///
    /// The routine returns no shape; completion only means the write ran.
    /// Callers wanting the updated aggregate re-fetch it.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateSale) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT sale_update($1, $2, $3, $4, $5)")
            .bind(id)
            .bind(input.salesperson_id)
            .bind(input.comments.as_deref())
            .bind(input.sale_date)
            .bind(Json(&input.details))
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Delete a sale and, by cascade, its detail rows. Returns whether a
    /// row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let outcome: i32 = sqlx::query_scalar("SELECT sale_delete($1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(outcome > 0)
    }
}
