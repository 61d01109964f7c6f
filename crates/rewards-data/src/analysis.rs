//! Load-and-derive pipeline for the rewards summary.
//!
//! Fetches an account's bookings from a [`TransactionSource`], checks row
//! keys are unique, and runs the cashback derivation pass, returning an
//! [`AnalysisResult`] ready for the UI layer.

use std::collections::HashSet;
use std::time::Instant;

use chrono::Utc;
use tracing::info;

use rewards_core::calculations::CashbackCalculator;
use rewards_core::error::{Result, RewardsError};
use rewards_core::models::{RewardsSnapshot, Transaction};

use crate::source::TransactionSource;

// ── Public types ──────────────────────────────────────────────────────────────

/// Metadata produced alongside the derived snapshot.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AnalysisMetadata {
    /// ISO-8601 timestamp when this result was generated.
    pub generated_at: String,
    /// Name of the source that supplied the transactions.
    pub source: String,
    /// Account the history belongs to.
    pub account: String,
    /// Number of transactions processed.
    pub transactions_processed: usize,
    /// Wall-clock seconds spent fetching from the source.
    pub load_time_seconds: f64,
    /// Wall-clock seconds spent in the derivation pass.
    pub derive_time_seconds: f64,
}

/// The complete output of [`analyze_rewards`].
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    /// The source list as fetched, kept so the view can re-derive.
    pub transactions: Vec<Transaction>,
    /// Derived history and card figures.
    pub snapshot: RewardsSnapshot,
    /// Metadata about this run.
    pub metadata: AnalysisMetadata,
}

// ── Public functions ──────────────────────────────────────────────────────────

/// Run the full pipeline.
///
/// 1. Fetch the account's transactions from `source`.
/// 2. Reject duplicate transaction ids.
/// 3. Derive per-transaction cashback and the summary.
pub fn analyze_rewards(source: &dyn TransactionSource, account: &str) -> Result<AnalysisResult> {
    let load_start = Instant::now();
    let transactions = source.fetch_by_account(account)?;
    let load_time_seconds = load_start.elapsed().as_secs_f64();

    ensure_unique_ids(&transactions)?;

    let derive_start = Instant::now();
    let snapshot = CashbackCalculator::derive_snapshot(&transactions)?;
    let derive_time_seconds = derive_start.elapsed().as_secs_f64();

    info!(
        source = source.name(),
        account,
        transactions = transactions.len(),
        total_cashback = %snapshot.summary.total_cashback,
        "cashback history derived"
    );

    Ok(AnalysisResult {
        metadata: AnalysisMetadata {
            generated_at: Utc::now().to_rfc3339(),
            source: source.name().to_string(),
            account: account.to_string(),
            transactions_processed: transactions.len(),
            load_time_seconds,
            derive_time_seconds,
        },
        transactions,
        snapshot,
    })
}

/// Transaction ids key the history rows and must not repeat.
pub fn ensure_unique_ids(transactions: &[Transaction]) -> Result<()> {
    let mut seen = HashSet::with_capacity(transactions.len());
    for tx in transactions {
        if !seen.insert(tx.id) {
            return Err(RewardsError::DuplicateTransaction(tx.id));
        }
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{JsonFileSource, PlaceholderSource};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    struct FixedSource(Vec<Transaction>);

    impl TransactionSource for FixedSource {
        fn name(&self) -> &str {
            "fixed"
        }

        fn fetch_by_account(&self, _account: &str) -> Result<Vec<Transaction>> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    impl TransactionSource for FailingSource {
        fn name(&self) -> &str {
            "failing"
        }

        fn fetch_by_account(&self, account: &str) -> Result<Vec<Transaction>> {
            Err(RewardsError::UnknownAccount(account.to_string()))
        }
    }

    fn tx(id: u32, amount: i64) -> Transaction {
        Transaction::new(
            id,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            Decimal::new(amount, 0),
            format!("Booking {id}"),
        )
    }

    #[test]
    fn test_analyze_placeholder_totals() {
        let result = analyze_rewards(&PlaceholderSource, "demo").unwrap();
        let cashback: Vec<Decimal> = result
            .snapshot
            .history
            .iter()
            .map(|r| r.cashback_amount)
            .collect();
        assert_eq!(
            cashback,
            vec![Decimal::new(2550, 2), Decimal::new(1575, 2), Decimal::new(3000, 2)]
        );
        assert_eq!(result.snapshot.summary.total_cashback, Decimal::new(7125, 2));
        assert_eq!(result.snapshot.summary.current_balance, Decimal::new(7125, 2));
    }

    #[test]
    fn test_analyze_metadata() {
        let result = analyze_rewards(&PlaceholderSource, "demo").unwrap();
        assert_eq!(result.metadata.source, "placeholder");
        assert_eq!(result.metadata.account, "demo");
        assert_eq!(result.metadata.transactions_processed, 3);
        assert!(result.metadata.load_time_seconds >= 0.0);
        assert!(!result.metadata.generated_at.is_empty());
    }

    #[test]
    fn test_analyze_keeps_source_list() {
        let result = analyze_rewards(&PlaceholderSource, "demo").unwrap();
        assert_eq!(result.transactions, PlaceholderSource::transactions());
    }

    #[test]
    fn test_analyze_empty_history() {
        let result = analyze_rewards(&FixedSource(vec![]), "demo").unwrap();
        assert!(result.snapshot.is_empty());
        assert_eq!(result.snapshot.summary.total_cashback, Decimal::ZERO);
    }

    #[test]
    fn test_analyze_rejects_duplicate_ids() {
        let source = FixedSource(vec![tx(1, 100), tx(2, 200), tx(1, 300)]);
        let err = analyze_rewards(&source, "demo").unwrap_err();
        assert!(matches!(err, RewardsError::DuplicateTransaction(1)));
    }

    #[test]
    fn test_analyze_propagates_source_error() {
        let err = analyze_rewards(&FailingSource, "ghost").unwrap_err();
        assert!(matches!(err, RewardsError::UnknownAccount(ref a) if a == "ghost"));
    }

    #[test]
    fn test_analyze_rejects_out_of_range_amount_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        std::io::Write::write_all(
            &mut file,
            br#"{"accounts":{"demo":[
                {"id":1,"date":"2024-09-01","booking_amount":"1700.00","booking_details":"Hotel"},
                {"id":2,"date":"2024-09-02","booking_amount":"79228162514264337593543950335","booking_details":"Yacht"}
            ]}}"#,
        )
        .expect("write");

        let source = JsonFileSource::new(file.path());
        assert!(source.fetch_by_account("demo").is_ok());

        let err = analyze_rewards(&source, "demo").unwrap_err();
        assert!(matches!(err, RewardsError::AmountOutOfRange(2)), "got: {err:?}");
    }

    #[test]
    fn test_ensure_unique_ids_accepts_distinct() {
        assert!(ensure_unique_ids(&[tx(1, 1), tx(2, 2), tx(3, 3)]).is_ok());
    }
}
