//! Caller-intent reconciliation for sale detail change-sets.
//!
//! A sale update sends the full detail list with per-row [`RowState`]
//! tags. The store applies the tagged writes but returns nothing, and a
//! re-fetch yields rows tagged `Unchanged`, so the service must echo the
//! caller's tags back onto the fresh rows itself. These helpers capture
//! the requested tags before the write and look them up afterwards.

use std::collections::HashMap;

use crate::row_state::RowState;
use crate::types::DbId;

/// Capture the caller-requested tag per product reference.
///
/// Detail rows carry no identifiers of their own, so the product
/// reference is the reconciliation key. When the change-set names the
/// same product twice the later entry wins, mirroring the order in
/// which the store applies the payload.
pub fn requested_row_states<I>(details: I) -> HashMap<DbId, RowState>
where
    I: IntoIterator<Item = (DbId, RowState)>,
{
    details.into_iter().collect()
}

/// The tag to echo for a re-fetched row: the caller's requested tag for
/// that product, or `Unchanged` when the change-set never mentioned it.
pub fn echoed_state(requested: &HashMap<DbId, RowState>, product_id: DbId) -> RowState {
    requested
        .get(&product_id)
        .copied()
        .unwrap_or(RowState::Unchanged)
}
