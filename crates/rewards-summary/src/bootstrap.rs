use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use rewards_core::settings::STATE_DIR_NAME;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_FILE_NAME: &str = "rewards.log";

// ── Directory bootstrap ────────────────────────────────────────────────────────

/// Ensure the `~/.rewards-summary/` directory hierarchy exists.
///
/// Creates `~/.rewards-summary/` and `~/.rewards-summary/logs/` if absent and
/// returns the state directory.
pub fn ensure_directories() -> anyhow::Result<PathBuf> {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    ensure_directories_in(&home)
}

fn ensure_directories_in(home: &Path) -> anyhow::Result<PathBuf> {
    let state_dir = home.join(STATE_DIR_NAME);
    std::fs::create_dir_all(state_dir.join("logs"))
        .with_context(|| format!("failed to create {}", state_dir.display()))?;
    Ok(state_dir)
}

/// Log file used by the dashboard when `--log-file` is not given.
pub fn default_log_file(state_dir: &Path) -> PathBuf {
    state_dir.join("logs").join(LOG_FILE_NAME)
}

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Map Python-style level names onto `tracing` filter directives.
fn normalise_level(log_level: &str) -> String {
    match log_level.to_uppercase().as_str() {
        "DEBUG" => "debug".to_string(),
        "INFO" => "info".to_string(),
        "WARNING" => "warn".to_string(),
        "ERROR" | "CRITICAL" => "error".to_string(),
        _ => log_level.to_lowercase(),
    }
}

/// Initialise the global `tracing` subscriber.
///
/// With a `log_file` the output is appended to that file without ANSI colour,
/// which keeps the alternate screen clean while the dashboard runs. Without
/// one it goes to stderr. Unknown levels fall back to `"info"`.
pub fn setup_logging(log_level: &str, log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_new(normalise_level(log_level)).unwrap_or_else(|_| EnvFilter::new("info"));

    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;

            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .with_target(false),
                )
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(false)
                        .with_thread_ids(false),
                )
                .init();
        }
    }

    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_directories_in() {
        let tmp = TempDir::new().expect("tempdir");

        let state_dir = ensure_directories_in(tmp.path()).expect("should succeed");

        assert_eq!(state_dir, tmp.path().join(".rewards-summary"));
        assert!(state_dir.is_dir(), ".rewards-summary dir must exist");
        assert!(state_dir.join("logs").is_dir(), "logs subdir must exist");
    }

    #[test]
    fn test_ensure_directories_is_repeatable() {
        let tmp = TempDir::new().expect("tempdir");
        ensure_directories_in(tmp.path()).expect("first run");
        ensure_directories_in(tmp.path()).expect("second run");
    }

    #[test]
    fn test_default_log_file() {
        let path = default_log_file(Path::new("/home/u/.rewards-summary"));
        assert_eq!(
            path,
            PathBuf::from("/home/u/.rewards-summary/logs/rewards.log")
        );
    }

    #[test]
    fn test_normalise_level() {
        assert_eq!(normalise_level("DEBUG"), "debug");
        assert_eq!(normalise_level("CRITICAL"), "error");
        assert_eq!(normalise_level("INFO"), "info");
        assert_eq!(normalise_level("warning"), "warn");
        assert_eq!(normalise_level("ERROR"), "error");
        assert_eq!(normalise_level("Trace"), "trace");
    }
}
