//! Route definitions for the `/sales` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::sales;
use crate::state::AppState;

/// Routes mounted at `/sales`.
///
/// ```text
/// GET    /        -> list (?start_index=&end_index=)
/// POST   /        -> create (parent + tagged details, atomic)
/// GET    /{id}    -> get_by_id (?include_details=true hydrates rows)
/// PUT    /{id}    -> update (tagged detail change-set)
/// DELETE /{id}    -> delete (details removed by cascade)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(sales::list).post(sales::create))
        .route(
            "/{id}",
            get(sales::get_by_id)
                .put(sales::update)
                .delete(sales::delete),
        )
}
