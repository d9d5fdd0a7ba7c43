//! Orchestration services that sit between the HTTP handlers and the
//! repositories. Only the sale aggregate needs one; the catalog entities
//! are plain CRUD and their handlers talk to the repositories directly.

pub mod sales;
