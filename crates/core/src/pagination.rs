//! Pagination windows for list operations.
//!
//! Callers page with a half-open `[start_index, end_index)` row window
//! rather than page-number/page-size pairs. The window is validated on
//! construction, never silently clamped, and echoed back verbatim
//! alongside the total row count.

use crate::error::CoreError;

/// Window start when the caller omits `start_index`.
pub const DEFAULT_START_INDEX: i64 = 0;

/// Window end when the caller omits `end_index`.
pub const DEFAULT_END_INDEX: i64 = 10;

/// A validated half-open row window `[start_index, end_index)`.
///
/// `start_index` is the 0-based offset of the first row wanted;
/// `end_index` is the exclusive upper bound. A window can therefore
/// yield at most `end_index - start_index` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start_index: i64,
    pub end_index: i64,
}

impl PageWindow {
    /// Validate and build a window.
    ///
    /// Fails with [`CoreError::InvalidRange`] unless
    /// `0 <= start_index <= end_index`. An empty window
    /// (`start_index == end_index`) is valid and selects no rows.
    pub fn new(start_index: i64, end_index: i64) -> Result<Self, CoreError> {
        if start_index < 0 || end_index < start_index {
            return Err(CoreError::InvalidRange {
                start: start_index,
                end: end_index,
            });
        }
        Ok(Self {
            start_index,
            end_index,
        })
    }

    /// Maximum number of rows the window can hold.
    pub fn len(&self) -> i64 {
        self.end_index - self.start_index
    }

    /// True when the window selects no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            start_index: DEFAULT_START_INDEX,
            end_index: DEFAULT_END_INDEX,
        }
    }
}

/// One served window of rows plus the table-wide row count.
///
/// `total_records` is produced by the store in the same statement that
/// serves the window, so it is consistent with the rows and independent
/// of the window size. An empty window reports a total of zero.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub total_records: i64,
}
