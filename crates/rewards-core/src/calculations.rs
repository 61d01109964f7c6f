use rust_decimal::Decimal;

use crate::error::{Result, RewardsError};
use crate::models::{CashbackRecord, RewardsSnapshot, RewardsSummary, Transaction, TrendSeries};

/// Cashback rate applied to every booking, in percent (1.5 %).
pub const CASHBACK_RATE_PERCENT: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

const ONE_HUNDRED: Decimal = Decimal::ONE_HUNDRED;

// ── CashbackCalculator ────────────────────────────────────────────────────────

/// Stateless collection of cashback derivations.
pub struct CashbackCalculator;

impl CashbackCalculator {
    /// Cashback earned on a single booking amount.
    ///
    /// Computed as `amount * 1.5 / 100` with exact decimal arithmetic, so
    /// `1700.00` yields `25.50`. Returns `None` when the product does not fit
    /// in a [`Decimal`].
    pub fn cashback_for(booking_amount: Decimal) -> Option<Decimal> {
        booking_amount
            .checked_mul(CASHBACK_RATE_PERCENT)?
            .checked_div(ONE_HUNDRED)
    }

    /// Attach the derived cashback to every transaction, keeping list order.
    pub fn derive_history(transactions: &[Transaction]) -> Result<Vec<CashbackRecord>> {
        transactions
            .iter()
            .map(|tx| {
                let cashback_amount = Self::cashback_for(tx.booking_amount)
                    .ok_or(RewardsError::AmountOutOfRange(tx.id))?;
                Ok(CashbackRecord {
                    cashback_amount,
                    transaction: tx.clone(),
                })
            })
            .collect()
    }

    /// Sum the derived cashback into the card figures.
    ///
    /// The balance is never debited, so it equals the total.
    pub fn summarize(history: &[CashbackRecord]) -> Result<RewardsSummary> {
        let total = history.iter().try_fold(Decimal::ZERO, |acc, r| {
            acc.checked_add(r.cashback_amount)
                .ok_or(RewardsError::AmountOutOfRange(r.id()))
        })?;
        Ok(RewardsSummary {
            total_cashback: total,
            current_balance: total,
        })
    }

    /// Run the full derivation pass over a source list.
    ///
    /// Pure function of its input: calling it twice on the same list yields
    /// identical snapshots.
    pub fn derive_snapshot(transactions: &[Transaction]) -> Result<RewardsSnapshot> {
        let history = Self::derive_history(transactions)?;
        let summary = Self::summarize(&history)?;
        Ok(RewardsSnapshot { history, summary })
    }

    /// Build the bar-chart series: dates as categories, cashback as values.
    ///
    /// Records sharing a date stay separate bars.
    pub fn trend_series(history: &[CashbackRecord]) -> TrendSeries {
        TrendSeries {
            categories: history.iter().map(|r| r.date().to_string()).collect(),
            values: history.iter().map(|r| r.cashback_amount).collect(),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
