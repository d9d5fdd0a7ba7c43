//! Repository for salespersons, backed by the `salesperson_*` routines.
//!
//! Also home of the reference check the sale service runs before
//! accepting a salesperson id.

use salesdesk_core::pagination::{Page, PageWindow};
use salesdesk_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::salesperson::{CreateSalesperson, Salesperson, UpdateSalesperson};

/// Row shape served by `salesperson_list`.
#[derive(sqlx::FromRow)]
struct SalespersonListRow {
    id: DbId,
    name: String,
    code: String,
    entered_at: Option<Timestamp>,
    updated_at: Option<Timestamp>,
    total_records: i64,
}

impl From<SalespersonListRow> for Salesperson {
    fn from(row: SalespersonListRow) -> Self {
        Salesperson {
            id: row.id,
            name: row.name,
            code: row.code,
            entered_at: row.entered_at,
            updated_at: row.updated_at,
        }
    }
}

/// Provides salesperson CRUD and the existence check.
pub struct SalespersonRepo;

impl SalespersonRepo {
    /// Serve one window of salespersons plus the table-wide row count.
    pub async fn list(
        pool: &PgPool,
        window: &PageWindow,
    ) -> Result<Page<Salesperson>, sqlx::Error> {
        let rows: Vec<SalespersonListRow> =
            sqlx::query_as("SELECT * FROM salesperson_list($1, $2)")
                .bind(window.start_index)
                .bind(window.end_index)
                .fetch_all(pool)
                .await?;

        let total_records = rows.first().map(|r| r.total_records).unwrap_or(0);
        Ok(Page {
            rows: rows.into_iter().map(Salesperson::from).collect(),
            total_records,
        })
    }

    /// Find a salesperson by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Salesperson>, sqlx::Error> {
        sqlx::query_as::<_, Salesperson>("SELECT * FROM salesperson_get($1)")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Check that a salesperson row exists without fetching it.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT salesperson_exists($1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Create a salesperson. Duplicate codes raise a unique-constraint
    /// violation for the caller to classify.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSalesperson,
    ) -> Result<Salesperson, sqlx::Error> {
        sqlx::query_as::<_, Salesperson>("SELECT * FROM salesperson_create($1, $2, $3)")
            .bind(&input.name)
            .bind(&input.code)
            .bind(input.entered_at)
            .fetch_one(pool)
            .await
    }

    /// Replace a salesperson's name and code. Returns `None` when the id
    /// is unknown.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSalesperson,
    ) -> Result<Option<Salesperson>, sqlx::Error> {
        sqlx::query_as::<_, Salesperson>("SELECT * FROM salesperson_update($1, $2, $3)")
            .bind(id)
            .bind(&input.name)
            .bind(&input.code)
            .fetch_optional(pool)
            .await
    }

    /// Delete a salesperson. Sales that referenced them keep their rows
    /// with the reference cleared. Returns whether a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let outcome: i32 = sqlx::query_scalar("SELECT salesperson_delete($1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(outcome > 0)
    }
}
