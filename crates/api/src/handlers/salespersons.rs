//! Handlers for the `/salespersons` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use salesdesk_core::error::CoreError;
use salesdesk_core::types::DbId;
use salesdesk_core::validation;
use salesdesk_db::models::salesperson::{CreateSalesperson, Salesperson, UpdateSalesperson};
use salesdesk_db::repositories::SalespersonRepo;

use crate::error::{AppError, AppResult};
use crate::query::WindowParams;
use crate::response::{Envelope, PagedEnvelope};
use crate::state::AppState;

/// GET /api/v1/salespersons?start_index=&end_index=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<WindowParams>,
) -> AppResult<Json<PagedEnvelope<Salesperson>>> {
    let window = params.resolve()?;
    let page = SalespersonRepo::list(&state.pool, &window).await?;
    Ok(Json(PagedEnvelope::ok(
        "Salespersons retrieved successfully",
        &window,
        page,
    )))
}

/// GET /api/v1/salespersons/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Envelope<Salesperson>>> {
    let salesperson = SalespersonRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Salesperson",
            id,
        }))?;
    Ok(Json(Envelope::ok(
        "Salesperson retrieved successfully",
        salesperson,
    )))
}

/// POST /api/v1/salespersons
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSalesperson>,
) -> AppResult<Json<Envelope<Salesperson>>> {
    validate_salesperson(&input.name, &input.code)?;
    let salesperson = SalespersonRepo::create(&state.pool, &input).await?;

    tracing::info!(salesperson_id = salesperson.id, "Salesperson created");
    Ok(Json(Envelope::ok(
        "Salesperson created successfully",
        salesperson,
    )))
}

/// PUT /api/v1/salespersons/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSalesperson>,
) -> AppResult<Json<Envelope<Salesperson>>> {
    validate_salesperson(&input.name, &input.code)?;
    let salesperson = SalespersonRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Salesperson",
            id,
        }))?;

    tracing::info!(salesperson_id = id, "Salesperson updated");
    Ok(Json(Envelope::ok(
        "Salesperson updated successfully",
        salesperson,
    )))
}

/// DELETE /api/v1/salespersons/{id}
///
/// Sales that referenced the salesperson keep their rows with the
/// reference cleared.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Envelope<()>>> {
    let deleted = SalespersonRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Salesperson",
            id,
        }));
    }

    tracing::info!(salesperson_id = id, "Salesperson deleted");
    Ok(Json(Envelope::ok("Salesperson deleted successfully", ())))
}

/// Shared create/update validation: name and code are both required and
/// length-limited.
fn validate_salesperson(name: &str, code: &str) -> AppResult<()> {
    validation::validate_name(name).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    validation::validate_code(code).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    Ok(())
}
