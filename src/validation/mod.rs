use thiserror::Error;

use crate::models::find_allowed;

/// Why a transaction was rejected before it reached the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid amount: must be a number greater than zero")]
    InvalidAmount,
    #[error("Invalid category")]
    InvalidCategory,
}

/// Finite and strictly positive.
pub fn is_valid_amount(amount: f64) -> bool {
    amount.is_finite() && amount > 0.0
}

/// One of the allowed labels, compared case-sensitively.
pub fn is_valid_category(category: &str) -> bool {
    !category.is_empty() && find_allowed(category).is_some()
}

/// Check both fields, amount first.
pub fn validate(amount: f64, category: &str) -> Result<(), ValidationError> {
    if !is_valid_amount(amount) {
        return Err(ValidationError::InvalidAmount);
    }
    if !is_valid_category(category) {
        return Err(ValidationError::InvalidCategory);
    }
    Ok(())
}

/// Parse raw amount text from the user. Anything that is not a valid amount,
/// including text that is not a number at all, is `InvalidAmount`.
pub fn parse_amount(raw: &str) -> Result<f64, ValidationError> {
    let amount: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidAmount)?;
    if is_valid_amount(amount) {
        Ok(amount)
    } else {
        Err(ValidationError::InvalidAmount)
    }
}
