//! Repository for the product catalog, backed by the `product_*` routines.

use salesdesk_core::pagination::{Page, PageWindow};
use salesdesk_core::types::{DbId, Money, Timestamp};
use sqlx::PgPool;

use crate::models::product::{CreateProduct, Product, ProductDelete, UpdateProduct};

/// Row shape served by `product_list`: entity columns plus the repeated
/// table-wide row count.
#[derive(sqlx::FromRow)]
struct ProductListRow {
    id: DbId,
    name: String,
    code: Option<String>,
    image_url: Option<String>,
    cost_price: Option<Money>,
    retail_price: Option<Money>,
    created_at: Timestamp,
    updated_at: Option<Timestamp>,
    total_records: i64,
}

impl From<ProductListRow> for Product {
    fn from(row: ProductListRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            code: row.code,
            image_url: row.image_url,
            cost_price: row.cost_price,
            retail_price: row.retail_price,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Provides catalog CRUD over the named store routines.
pub struct ProductRepo;

impl ProductRepo {
    /// Serve one window of products plus the table-wide row count.
    ///
    /// The count rides along on every row; an empty window reports zero.
    pub async fn list(pool: &PgPool, window: &PageWindow) -> Result<Page<Product>, sqlx::Error> {
        let rows: Vec<ProductListRow> = sqlx::query_as("SELECT * FROM product_list($1, $2)")
            .bind(window.start_index)
            .bind(window.end_index)
            .fetch_all(pool)
            .await?;

        let total_records = rows.first().map(|r| r.total_records).unwrap_or(0);
        Ok(Page {
            rows: rows.into_iter().map(Product::from).collect(),
            total_records,
        })
    }

    /// Find a product by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>("SELECT * FROM product_get($1)")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a product. Duplicate names or codes raise a unique-constraint
    /// violation for the caller to classify.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        sqlx::query_as::<_, Product>("SELECT * FROM product_create($1, $2, $3, $4, $5)")
            .bind(&input.name)
            .bind(input.code.as_deref())
            .bind(input.image_url.as_deref())
            .bind(input.cost_price)
            .bind(input.retail_price)
            .fetch_one(pool)
            .await
    }

    /// Replace a product's fields. Returns `None` when the id is unknown.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>("SELECT * FROM product_update($1, $2, $3, $4, $5, $6)")
            .bind(id)
            .bind(&input.name)
            .bind(input.code.as_deref())
            .bind(input.image_url.as_deref())
            .bind(input.cost_price)
            .bind(input.retail_price)
            .fetch_optional(pool)
            .await
    }

    /// Delete a product unless sale history references it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<ProductDelete, sqlx::Error> {
        let outcome: i32 = sqlx::query_scalar("SELECT product_delete($1)")
            .bind(id)
            .fetch_one(pool)
            .await?;

        Ok(match outcome {
            1 => ProductDelete::Deleted,
            -1 => ProductDelete::InUse,
            _ => ProductDelete::NotFound,
        })
    }
}
