//! Domain core for the sales management backend.
//!
//! Pure types and rules shared by the persistence and HTTP layers:
//! identifier aliases, the error taxonomy, row-state tags for sale
//! detail change-sets, pagination windows, and validation rules.
//! No I/O lives here.

pub mod error;
pub mod pagination;
pub mod reconcile;
pub mod row_state;
pub mod types;
pub mod validation;
