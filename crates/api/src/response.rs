//! The response envelope every handler serves.
//!
//! Every response carries the same `{ success, message, data }` shape and
//! travels with HTTP status 200; clients read `success`, not the status
//! line. Failures are rendered by [`crate::error::AppError`] with
//! `success: false` and `data: null`. Handlers build these structs rather
//! than ad-hoc `serde_json::json!` so the shape cannot drift.

use salesdesk_core::pagination::{Page, PageWindow};
use serde::Serialize;

/// Standard `{ success, message, data }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(Envelope::ok("Sale created successfully", sale)))
/// ```
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    /// A successful envelope wrapping `data`.
    pub fn ok(message: &str, data: T) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data: Some(data),
        }
    }
}

/// Envelope for list endpoints: the served rows plus the window that was
/// served and the table-wide row count.
///
/// The window is echoed back verbatim so clients can page without
/// re-deriving their own request state.
#[derive(Debug, Serialize)]
pub struct PagedEnvelope<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub data: Vec<T>,
    pub start_index: i64,
    pub end_index: i64,
    pub total_records: i64,
}

impl<T: Serialize> PagedEnvelope<T> {
    /// A successful envelope for one served window.
    pub fn ok(message: &str, window: &PageWindow, page: Page<T>) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data: page.rows,
            start_index: window.start_index,
            end_index: window.end_index,
            total_records: page.total_records,
        }
    }
}
