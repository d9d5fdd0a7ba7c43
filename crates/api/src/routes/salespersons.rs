//! Route definitions for the `/salespersons` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::salespersons;
use crate::state::AppState;

/// Routes mounted at `/salespersons`.
///
/// ```text
/// GET    /        -> list (?start_index=&end_index=)
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(salespersons::list).post(salespersons::create))
        .route(
            "/{id}",
            get(salespersons::get_by_id)
                .put(salespersons::update)
                .delete(salespersons::delete),
        )
}
