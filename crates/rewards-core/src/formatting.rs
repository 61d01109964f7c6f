use rust_decimal::{Decimal, RoundingStrategy};

/// Currency prefix used when none is configured.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Format a decimal amount with thousands separators and a fixed number of
/// decimal places, rounding half away from zero.
///
/// # Examples
///
/// ```
/// use rewards_core::formatting::format_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount(Decimal::new(12345, 1), 1), "1,234.5");
/// assert_eq!(format_amount(Decimal::new(1234567, 0), 0), "1,234,567");
/// assert_eq!(format_amount(Decimal::ZERO, 2), "0.00");
/// assert_eq!(format_amount(Decimal::new(-98765, 1), 1), "-9,876.5");
/// ```
pub fn format_amount(value: Decimal, decimals: u32) -> String {
    let mut rounded =
        value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(decimals);

    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().to_string();

    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits.as_str(), None),
    };

    let grouped = group_thousands(int_part);
    let result = match frac_part {
        Some(frac) => format!("{}.{}", grouped, frac),
        None => grouped,
    };

    if negative {
        format!("-{}", result)
    } else {
        result
    }
}

/// Format a monetary amount with a currency prefix and two decimal places.
///
/// # Examples
///
/// ```
/// use rewards_core::formatting::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::new(7125, 2), "$"), "$71.25");
/// assert_eq!(format_currency(Decimal::new(255, 1), "€"), "€25.50");
/// assert_eq!(format_currency(Decimal::new(-999, 2), "$"), "$-9.99");
/// ```
pub fn format_currency(amount: Decimal, symbol: &str) -> String {
    format!("{}{}", symbol, format_amount(amount, 2))
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Insert commas every three digits from the right of an integer string.
fn group_thousands(s: &str) -> String {
    if s.len() <= 3 {
        return s.to_string();
    }
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    let remainder = chars.len() % 3;
    for (i, &c) in chars.iter().enumerate() {
        if i != 0 && (i % 3 == remainder) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    // ── format_amount ────────────────────────────────────────────────────────

    #[test]
    fn test_format_amount_zero() {
        assert_eq!(format_amount(Decimal::ZERO, 0), "0");
        assert_eq!(format_amount(Decimal::ZERO, 2), "0.00");
    }

    #[test]
    fn test_format_amount_pads_trailing_zeros() {
        assert_eq!(format_amount(d("25.5"), 2), "25.50");
        assert_eq!(format_amount(d("30"), 2), "30.00");
    }

    #[test]
    fn test_format_amount_with_thousands() {
        assert_eq!(format_amount(d("1700"), 2), "1,700.00");
        assert_eq!(format_amount(d("1234567.891"), 2), "1,234,567.89");
    }

    #[test]
    fn test_format_amount_rounds_half_away_from_zero() {
        assert_eq!(format_amount(d("1.005"), 2), "1.01");
        assert_eq!(format_amount(d("-1.005"), 2), "-1.01");
    }

    #[test]
    fn test_format_amount_negative_rounding_to_zero_drops_sign() {
        assert_eq!(format_amount(d("-0.001"), 2), "0.00");
    }

    // ── format_currency ──────────────────────────────────────────────────────

    #[test]
    fn test_format_currency_sample_cashback() {
        assert_eq!(format_currency(d("25.5"), "$"), "$25.50");
        assert_eq!(format_currency(d("15.75"), "$"), "$15.75");
        assert_eq!(format_currency(d("30.000"), "$"), "$30.00");
        assert_eq!(format_currency(d("71.25"), "$"), "$71.25");
    }

    #[test]
    fn test_format_currency_zero() {
        assert_eq!(format_currency(Decimal::ZERO, DEFAULT_CURRENCY_SYMBOL), "$0.00");
    }

    #[test]
    fn test_format_currency_custom_symbol() {
        assert_eq!(format_currency(d("1000"), "EUR "), "EUR 1,000.00");
    }

    // ── group_thousands ──────────────────────────────────────────────────────

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("5"), "5");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }
}
