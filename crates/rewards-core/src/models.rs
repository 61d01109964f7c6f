use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single booking that earns cashback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, also the row key in the history table.
    pub id: u32,
    /// Calendar date of the booking.
    pub date: NaiveDate,
    /// Booking amount in the account currency.
    pub booking_amount: Decimal,
    /// Free-text description of the booking.
    pub booking_details: String,
}

impl Transaction {
    pub fn new(
        id: u32,
        date: NaiveDate,
        booking_amount: Decimal,
        booking_details: impl Into<String>,
    ) -> Self {
        Self {
            id,
            date,
            booking_amount,
            booking_details: booking_details.into(),
        }
    }
}

/// A transaction together with the cashback derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashbackRecord {
    #[serde(flatten)]
    pub transaction: Transaction,
    /// Cashback earned on this booking.
    pub cashback_amount: Decimal,
}

impl CashbackRecord {
    pub fn id(&self) -> u32 {
        self.transaction.id
    }

    pub fn date(&self) -> NaiveDate {
        self.transaction.date
    }

    pub fn booking_details(&self) -> &str {
        &self.transaction.booking_details
    }
}

/// Aggregate figures shown on the summary cards.
///
/// `total_cashback` is everything ever earned; `current_balance` is what is
/// available to cash out. Nothing debits the balance yet, so the two are
/// always equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardsSummary {
    pub total_cashback: Decimal,
    pub current_balance: Decimal,
}

/// Derived view state: the history in source order plus its summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardsSnapshot {
    pub history: Vec<CashbackRecord>,
    pub summary: RewardsSummary,
}

impl RewardsSnapshot {
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

/// Bar-chart input: one category and one value per history record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrendSeries {
    /// Transaction dates formatted as `YYYY-MM-DD`, in history order.
    pub categories: Vec<String>,
    /// Cashback amounts, parallel to `categories`.
    pub values: Vec<Decimal>,
}

impl TrendSeries {
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Iterate `(category, value)` pairs in order.
    pub fn points(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.categories
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}
