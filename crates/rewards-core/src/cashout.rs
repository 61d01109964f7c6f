//! Review of the free-text cashout amount.
//!
//! The dashboard never blocks what the user types and never moves money; this
//! module only classifies the typed text so the outcome can be reported.

use rust_decimal::Decimal;
use thiserror::Error;

/// Why a cashout request would not be honoured.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CashoutRejection {
    /// The input field was blank.
    #[error("Enter an amount to cash out")]
    Empty,

    /// The text is not a decimal number.
    #[error("'{0}' is not a valid amount")]
    NotANumber(String),

    /// Zero or negative amounts.
    #[error("Cashout amount must be greater than zero")]
    NotPositive,

    /// More than the available balance.
    #[error("Requested {requested} exceeds available balance {available}")]
    ExceedsBalance {
        requested: Decimal,
        available: Decimal,
    },
}

/// Parse `raw` and check it against `available_balance`.
///
/// Returns the requested amount when it is a positive number no larger than
/// the balance.
pub fn review_cashout(raw: &str, available_balance: Decimal) -> Result<Decimal, CashoutRejection> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CashoutRejection::Empty);
    }

    let requested: Decimal = trimmed
        .parse()
        .map_err(|_| CashoutRejection::NotANumber(trimmed.to_string()))?;

    if requested <= Decimal::ZERO {
        return Err(CashoutRejection::NotPositive);
    }
    if requested > available_balance {
        return Err(CashoutRejection::ExceedsBalance {
            requested,
            available: available_balance,
        });
    }

    Ok(requested)
}
