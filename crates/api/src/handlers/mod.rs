//! Request handlers for the API resources.
//!
//! Each submodule provides async handler functions (list, create,
//! get_by_id, update, delete) for a single resource. Catalog handlers
//! delegate to the corresponding repository in `salesdesk_db`; sale
//! handlers delegate to [`crate::services::sales::SaleService`]. Errors
//! map to the uniform envelope via [`crate::error::AppError`].

pub mod products;
pub mod sales;
pub mod salespersons;
