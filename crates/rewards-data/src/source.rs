//! Data-access seam for cashback history.
//!
//! The dashboard asks a [`TransactionSource`] for an account's bookings and
//! never reaches for data on its own. Two sources ship: the built-in sample
//! history and a read-only JSON file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, warn};

use rewards_core::error::{Result, RewardsError};
use rewards_core::models::Transaction;

// ── Trait ─────────────────────────────────────────────────────────────────────

/// Anything that can produce the booking history of an account.
pub trait TransactionSource {
    /// Short human-readable name used in logs and metadata.
    fn name(&self) -> &str;

    /// Return the account's transactions in display order.
    fn fetch_by_account(&self, account: &str) -> Result<Vec<Transaction>>;
}

// ── PlaceholderSource ─────────────────────────────────────────────────────────

/// Fixed sample history returned for every account.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderSource;

impl PlaceholderSource {
    /// The three sample bookings, newest first.
    pub fn transactions() -> Vec<Transaction> {
        vec![
            Transaction::new(
                1,
                sample_date(2024, 9, 1),
                Decimal::new(170000, 2),
                "Hotel Booking #12345",
            ),
            Transaction::new(
                2,
                sample_date(2024, 8, 15),
                Decimal::new(105000, 2),
                "Flight Booking #67890",
            ),
            Transaction::new(
                3,
                sample_date(2024, 7, 30),
                Decimal::new(200000, 2),
                "Car Rental #24680",
            ),
        ]
    }
}

impl TransactionSource for PlaceholderSource {
    fn name(&self) -> &str {
        "placeholder"
    }

    fn fetch_by_account(&self, account: &str) -> Result<Vec<Transaction>> {
        debug!(account, "serving placeholder cashback history");
        Ok(Self::transactions())
    }
}

fn sample_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

// ── JsonFileSource ────────────────────────────────────────────────────────────

/// On-disk layout: `{ "accounts": { "<id>": [ <transaction>, ... ] } }`.
#[derive(Debug, Deserialize)]
struct HistoryFile {
    #[serde(default)]
    accounts: BTreeMap<String, Vec<Transaction>>,
}

/// Reads cashback history from a JSON file on every fetch.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(&self) -> Result<HistoryFile> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|source| RewardsError::FileRead {
                path: self.path.clone(),
                source,
            })?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl TransactionSource for JsonFileSource {
    fn name(&self) -> &str {
        "json-file"
    }

    fn fetch_by_account(&self, account: &str) -> Result<Vec<Transaction>> {
        let mut file = self.read_file()?;
        match file.accounts.remove(account) {
            Some(transactions) => {
                debug!(
                    account,
                    path = %self.path.display(),
                    count = transactions.len(),
                    "loaded cashback history"
                );
                Ok(transactions)
            }
            None => {
                warn!(account, path = %self.path.display(), "account not present in history file");
                Err(RewardsError::UnknownAccount(account.to_string()))
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_json(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("tempfile");
        file.write_all(content.as_bytes()).expect("write");
        file
    }

    #[test]
    fn test_placeholder_returns_three_samples_in_order() {
        let txs = PlaceholderSource.fetch_by_account("anyone").unwrap();
        let ids: Vec<u32> = txs.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(txs[0].booking_amount, Decimal::new(1700, 0));
        assert_eq!(txs[1].booking_amount, Decimal::new(1050, 0));
        assert_eq!(txs[2].booking_amount, Decimal::new(2000, 0));
        assert_eq!(txs[2].booking_details, "Car Rental #24680");
        assert_eq!(txs[0].date.to_string(), "2024-09-01");
    }

    #[test]
    fn test_placeholder_ignores_account() {
        let a = PlaceholderSource.fetch_by_account("a").unwrap();
        let b = PlaceholderSource.fetch_by_account("b").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_json_source_reads_account() {
        let file = write_json(
            r#"{"accounts":{"demo":[
                {"id":10,"date":"2024-05-01","booking_amount":"400.00","booking_details":"Hostel"},
                {"id":11,"date":"2024-05-02","booking_amount":250,"booking_details":"Ferry"}
            ]}}"#,
        );
        let source = JsonFileSource::new(file.path());
        let txs = source.fetch_by_account("demo").unwrap();
        assert_eq!(txs.len(), 2);
        assert_eq!(txs[0].id, 10);
        assert_eq!(txs[1].booking_amount, Decimal::new(250, 0));
        assert_eq!(source.name(), "json-file");
    }

    #[test]
    fn test_json_source_unknown_account() {
        let file = write_json(r#"{"accounts":{"demo":[]}}"#);
        let source = JsonFileSource::new(file.path());
        let err = source.fetch_by_account("other").unwrap_err();
        assert!(matches!(err, RewardsError::UnknownAccount(ref a) if a == "other"));
    }

    #[test]
    fn test_json_source_missing_file() {
        let source = JsonFileSource::new("/definitely/not/here.json");
        let err = source.fetch_by_account("demo").unwrap_err();
        assert!(matches!(err, RewardsError::FileRead { .. }));
    }

    #[test]
    fn test_json_source_malformed_file() {
        let file = write_json("{ accounts: ");
        let source = JsonFileSource::new(file.path());
        let err = source.fetch_by_account("demo").unwrap_err();
        assert!(matches!(err, RewardsError::JsonParse(_)));
    }
}
