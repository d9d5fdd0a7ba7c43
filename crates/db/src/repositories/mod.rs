//! Store gateway, one repository per aggregate.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument and call the named store
//! routines. No ad-hoc table SQL lives here; the routines are the whole
//! persistence contract.

pub mod product_repo;
pub mod sale_repo;
pub mod salesperson_repo;

pub use product_repo::ProductRepo;
pub use sale_repo::SaleRepo;
pub use salesperson_repo::SalespersonRepo;
