use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the rewards summary crates.
#[derive(Error, Debug)]
pub enum RewardsError {
    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON document could not be parsed.
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The data source holds no cashback history for the account.
    #[error("Unknown account: {0}")]
    UnknownAccount(String),

    /// Two transactions share the same identifier.
    #[error("Duplicate transaction id: {0}")]
    DuplicateTransaction(u32),

    /// A booking amount is too large for the cashback derivation.
    #[error("Booking amount of transaction {0} is out of range")]
    AmountOutOfRange(u32),

    /// An error originating from the terminal / TUI layer.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the rewards crates.
pub type Result<T> = std::result::Result<T, RewardsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_file_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = RewardsError::FileRead {
            path: PathBuf::from("/some/history.json"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read file"));
        assert!(msg.contains("/some/history.json"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_error_display_unknown_account() {
        let err = RewardsError::UnknownAccount("acct-42".to_string());
        assert_eq!(err.to_string(), "Unknown account: acct-42");
    }

    #[test]
    fn test_error_display_duplicate_transaction() {
        let err = RewardsError::DuplicateTransaction(7);
        assert_eq!(err.to_string(), "Duplicate transaction id: 7");
    }

    #[test]
    fn test_error_display_amount_out_of_range() {
        let err = RewardsError::AmountOutOfRange(4);
        assert_eq!(
            err.to_string(),
            "Booking amount of transaction 4 is out of range"
        );
    }

    #[test]
    fn test_error_display_terminal() {
        let err = RewardsError::Terminal("crossterm failure".to_string());
        assert_eq!(err.to_string(), "Terminal error: crossterm failure");
    }

    #[test]
    fn test_error_display_config() {
        let err = RewardsError::Config("empty currency symbol".to_string());
        assert_eq!(err.to_string(), "Configuration error: empty currency symbol");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: RewardsError = io_err.into();
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid}").unwrap_err();
        let err: RewardsError = json_err.into();
        assert!(err.to_string().contains("Failed to parse JSON"));
    }
}
