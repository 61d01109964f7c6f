//! Plain-text rendition of the dashboard for non-interactive use.

use std::fmt::Write as _;

use rewards_core::formatting::format_currency;
use rewards_core::models::{RewardsSnapshot, TrendSeries};

use crate::history_table::{build_rows, HEADERS};

/// Render cards, history and trend series as plain text.
pub fn render_report(
    snapshot: &RewardsSnapshot,
    series: &TrendSeries,
    account: &str,
    currency: &str,
) -> String {
    let mut out = String::new();
    let summary = &snapshot.summary;

    // Writing into a String cannot fail.
    let _ = writeln!(out, "Rewards Summary [{}]", account);
    let _ = writeln!(out, "{}", "=".repeat(60));
    let _ = writeln!(
        out,
        "Total Cashback Earned: {}",
        format_currency(summary.total_cashback, currency)
    );
    let _ = writeln!(
        out,
        "Current Balance:       {}",
        format_currency(summary.current_balance, currency)
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "Cashback History");
    if snapshot.is_empty() {
        let _ = writeln!(out, "  (no cashback history)");
    } else {
        let _ = writeln!(out, "  {:<12}{:>12}  {}", HEADERS[0], HEADERS[1], HEADERS[2]);
        for row in build_rows(&snapshot.history, currency) {
            let _ = writeln!(
                out,
                "  {:<12}{:>12}  {}",
                row.date, row.amount, row.booking_details
            );
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Cashback Trend");
    for (category, value) in series.points() {
        let _ = writeln!(out, "  {:<12}{:>12}", category, format_currency(value, currency));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rewards_core::calculations::CashbackCalculator;
    use rewards_core::models::Transaction;
    use rust_decimal::Decimal;

    fn snapshot() -> RewardsSnapshot {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        CashbackCalculator::derive_snapshot(&[
            Transaction::new(1, date(2024, 9, 1), Decimal::new(1700, 0), "Hotel Booking #12345"),
            Transaction::new(2, date(2024, 8, 15), Decimal::new(1050, 0), "Flight Booking #67890"),
            Transaction::new(3, date(2024, 7, 30), Decimal::new(2000, 0), "Car Rental #24680"),
        ])
        .unwrap()
    }

    #[test]
    fn test_report_contains_cards_and_rows() {
        let snap = snapshot();
        let series = CashbackCalculator::trend_series(&snap.history);
        let report = render_report(&snap, &series, "demo", "$");

        assert!(report.starts_with("Rewards Summary [demo]"));
        assert!(report.contains("Total Cashback Earned: $71.25"));
        assert!(report.contains("Current Balance:       $71.25"));
        assert!(report.contains("2024-08-15"));
        assert!(report.contains("$15.75"));
        assert!(report.contains("Flight Booking #67890"));
    }

    #[test]
    fn test_report_rows_keep_order() {
        let snap = snapshot();
        let series = CashbackCalculator::trend_series(&snap.history);
        let report = render_report(&snap, &series, "demo", "$");
        let hotel = report.find("Hotel").unwrap();
        let car = report.find("Car Rental").unwrap();
        assert!(hotel < car);
    }

    #[test]
    fn test_report_empty_history() {
        let snap = RewardsSnapshot::default();
        let report = render_report(&snap, &TrendSeries::default(), "demo", "€");
        assert!(report.contains("Total Cashback Earned: €0.00"));
        assert!(report.contains("(no cashback history)"));
    }
}
