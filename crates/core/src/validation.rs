//! Validation constants and rules for sales, products, and salespersons.
//!
//! Mirrors the column limits enforced by the store so bad input is
//! rejected before a round-trip.

use crate::types::Money;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of sale comments in characters.
pub const MAX_COMMENTS_LENGTH: usize = 500;

/// Maximum length of a product or salesperson name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum length of a product or salesperson code.
pub const MAX_CODE_LENGTH: usize = 50;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a display name: non-empty and within the length limit.
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name cannot be empty".to_string());
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(format!(
            "Name exceeds maximum length of {MAX_NAME_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a short code: non-empty and within the length limit.
pub fn validate_code(code: &str) -> Result<(), String> {
    if code.trim().is_empty() {
        return Err("Code cannot be empty".to_string());
    }
    if code.len() > MAX_CODE_LENGTH {
        return Err(format!(
            "Code exceeds maximum length of {MAX_CODE_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate optional sale comments against the length limit.
pub fn validate_comments(comments: Option<&str>) -> Result<(), String> {
    if let Some(text) = comments {
        if text.len() > MAX_COMMENTS_LENGTH {
            return Err(format!(
                "Comments exceed maximum length of {MAX_COMMENTS_LENGTH} characters"
            ));
        }
    }
    Ok(())
}

/// Validate one sale detail line: positive quantity, non-negative money.
pub fn validate_detail_line(
    quantity: i32,
    retail_price: Money,
    discount: Option<Money>,
) -> Result<(), String> {
    if quantity < 1 {
        return Err(format!("Quantity must be at least 1 (got {quantity})"));
    }
    if retail_price < Money::ZERO {
        return Err("Retail price cannot be negative".to_string());
    }
    if let Some(value) = discount {
        if value < Money::ZERO {
            return Err("Discount cannot be negative".to_string());
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
