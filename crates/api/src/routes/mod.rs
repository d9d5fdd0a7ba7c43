pub mod health;
pub mod products;
pub mod sales;
pub mod salespersons;

use axum::Router;

use crate::state::AppState;

/// Everything mounted under `/api/v1`.
///
/// ```text
/// /products                GET list, POST create
/// /products/{id}           GET, PUT, DELETE
///
/// /salespersons            GET list, POST create
/// /salespersons/{id}       GET, PUT, DELETE
///
/// /sales                   GET list, POST create (aggregate)
/// /sales/{id}              GET (?include_details), PUT (change-set), DELETE
/// ```
///
/// `/health` is mounted at the root level, not here.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/products", products::router())
        .nest("/salespersons", salespersons::router())
        .nest("/sales", sales::router())
}
