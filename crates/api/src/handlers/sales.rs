//! Handlers for the `/sales` resource.
//!
//! These stay thin: all aggregate rules (validation, the salesperson
//! reference check, tag stamping, and post-write tag reconciliation)
//! live in [`SaleService`].

use axum::extract::{Path, Query, State};
use axum::Json;
use salesdesk_core::types::DbId;
use salesdesk_db::models::sale::{CreateSale, Sale, UpdateSale};

use crate::error::AppResult;
use crate::query::{IncludeDetailsParams, WindowParams};
use crate::response::{Envelope, PagedEnvelope};
use crate::services::sales::SaleService;
use crate::state::AppState;

/// GET /api/v1/sales?start_index=&end_index=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<WindowParams>,
) -> AppResult<Json<PagedEnvelope<Sale>>> {
    let window = params.resolve()?;
    let page = SaleService::list(&state.pool, &window).await?;
    Ok(Json(PagedEnvelope::ok(
        "Sales retrieved successfully",
        &window,
        page,
    )))
}

/// GET /api/v1/sales/{id}?include_details=true
///
/// Without the flag only the summary row is served; with it the detail
/// rows are hydrated, each tagged `unchanged`.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<IncludeDetailsParams>,
) -> AppResult<Json<Envelope<Sale>>> {
    let sale = if params.include_details {
        SaleService::get_with_details(&state.pool, id).await?
    } else {
        SaleService::get(&state.pool, id).await?
    };
    Ok(Json(Envelope::ok("Sale retrieved successfully", sale)))
}

/// POST /api/v1/sales
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSale>,
) -> AppResult<Json<Envelope<Sale>>> {
    let sale = SaleService::create(&state.pool, input).await?;
    Ok(Json(Envelope::ok("Sale created successfully", sale)))
}

/// PUT /api/v1/sales/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSale>,
) -> AppResult<Json<Envelope<Sale>>> {
    let sale = SaleService::update(&state.pool, id, input).await?;
    Ok(Json(Envelope::ok("Sale updated successfully", sale)))
}

/// DELETE /api/v1/sales/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Envelope<()>>> {
    SaleService::delete(&state.pool, id).await?;
    Ok(Json(Envelope::ok("Sale deleted successfully", ())))
}
