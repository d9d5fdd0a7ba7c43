//! Query-string types shared by more than one handler module.

use salesdesk_core::error::CoreError;
use salesdesk_core::pagination::{PageWindow, DEFAULT_END_INDEX, DEFAULT_START_INDEX};
use serde::Deserialize;

/// Row-window parameters (`?start_index=&end_index=`) for list endpoints.
///
/// Both values are optional; omitted values fall back to the documented
/// defaults (first ten rows). The resolved window is validated, never
/// clamped.
#[derive(Debug, Deserialize)]
pub struct WindowParams {
    pub start_index: Option<i64>,
    pub end_index: Option<i64>,
}

impl WindowParams {
    /// Apply defaults and validate into a [`PageWindow`].
    pub fn resolve(&self) -> Result<PageWindow, CoreError> {
        PageWindow::new(
            self.start_index.unwrap_or(DEFAULT_START_INDEX),
            self.end_index.unwrap_or(DEFAULT_END_INDEX),
        )
    }
}

/// Query parameters for sale fetches that can hydrate detail rows
/// (`?include_details=true`).
#[derive(Debug, Deserialize)]
pub struct IncludeDetailsParams {
    #[serde(default)]
    pub include_details: bool,
}
