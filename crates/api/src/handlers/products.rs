//! Handlers for the `/products` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use salesdesk_core::error::CoreError;
use salesdesk_core::types::{DbId, Money};
use salesdesk_core::validation;
use salesdesk_db::models::product::{CreateProduct, Product, ProductDelete, UpdateProduct};
use salesdesk_db::repositories::ProductRepo;

use crate::error::{AppError, AppResult};
use crate::query::WindowParams;
use crate::response::{Envelope, PagedEnvelope};
use crate::state::AppState;

/// GET /api/v1/products?start_index=&end_index=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<WindowParams>,
) -> AppResult<Json<PagedEnvelope<Product>>> {
    let window = params.resolve()?;
    let page = ProductRepo::list(&state.pool, &window).await?;
    Ok(Json(PagedEnvelope::ok(
        "Products retrieved successfully",
        &window,
        page,
    )))
}

/// GET /api/v1/products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Envelope<Product>>> {
    let product = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;
    Ok(Json(Envelope::ok("Product retrieved successfully", product)))
}

/// POST /api/v1/products
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProduct>,
) -> AppResult<Json<Envelope<Product>>> {
    validate_product(
        &input.name,
        input.code.as_deref(),
        input.cost_price,
        input.retail_price,
    )?;
    let product = ProductRepo::create(&state.pool, &input).await?;

    tracing::info!(product_id = product.id, "Product created");
    Ok(Json(Envelope::ok("Product created successfully", product)))
}

/// PUT /api/v1/products/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProduct>,
) -> AppResult<Json<Envelope<Product>>> {
    validate_product(
        &input.name,
        input.code.as_deref(),
        input.cost_price,
        input.retail_price,
    )?;
    let product = ProductRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;

    tracing::info!(product_id = id, "Product updated");
    Ok(Json(Envelope::ok("Product updated successfully", product)))
}

/// DELETE /api/v1/products/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Envelope<()>>> {
    match ProductRepo::delete(&state.pool, id).await? {
        ProductDelete::Deleted => {
            tracing::info!(product_id = id, "Product deleted");
            Ok(Json(Envelope::ok("Product deleted successfully", ())))
        }
        ProductDelete::NotFound => Err(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        })),
        ProductDelete::InUse => Err(AppError::Core(CoreError::Conflict(
            "Product cannot be deleted because sales reference it".to_string(),
        ))),
    }
}

/// Shared create/update validation: name and code lengths, non-negative
/// prices. The store enforces the same rules; checking here keeps bad
/// input from costing a round-trip.
fn validate_product(
    name: &str,
    code: Option<&str>,
    cost_price: Option<Money>,
    retail_price: Option<Money>,
) -> AppResult<()> {
    validation::validate_name(name).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    if let Some(code) = code {
        validation::validate_code(code)
            .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    }
    for price in [cost_price, retail_price].into_iter().flatten() {
        if price < Money::ZERO {
            return Err(AppError::Core(CoreError::Validation(
                "Prices cannot be negative".to_string(),
            )));
        }
    }
    Ok(())
}
