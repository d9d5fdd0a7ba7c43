//! Row-mapped entities and their create/update DTOs.
//!
//! One submodule per aggregate: a `FromRow` + `Serialize` entity struct
//! matching the store's row shape, plus the `Deserialize` DTOs whose
//! fields line up with the store routine parameters.

pub mod product;
pub mod sale;
pub mod salesperson;
