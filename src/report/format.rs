//! pt-BR number formatting for reports.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Shown in place of values that cannot be represented (NaN, infinities).
pub const UNAVAILABLE: &str = "n/d";

/// Round to cents, half away from zero.
pub fn round_cents(value: f64) -> Option<Decimal> {
    let mut d = Decimal::from_f64(value)?
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    d.rescale(2);
    Some(d)
}

/// Group the integer digits with `.` and use `,` for decimals.
fn pt_br_digits(value: Decimal) -> String {
    let text = value.abs().to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!("{},{}", grouped, frac_part)
}

fn sign(value: Decimal) -> &'static str {
    if value.is_sign_negative() && !value.is_zero() {
        "-"
    } else {
        ""
    }
}

/// `1234.5` → `R$ 1.234,50`.
pub fn format_currency(value: f64) -> String {
    match round_cents(value) {
        Some(d) => format!("{}R$ {}", sign(d), pt_br_digits(d)),
        None => UNAVAILABLE.to_string(),
    }
}

/// `41.0036` → `41,00%`. The input is already a percentage.
pub fn format_percent(value: f64) -> String {
    match round_cents(value) {
        Some(d) => format!("{}{}%", sign(d), pt_br_digits(d)),
        None => UNAVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "R$ 0,00");
        assert_eq!(format_currency(5.5), "R$ 5,50");
        assert_eq!(format_currency(999.999), "R$ 1.000,00");
        assert_eq!(format_currency(75_607.5), "R$ 75.607,50");
        assert_eq!(format_currency(1_234_567.891), "R$ 1.234.567,89");
        assert_eq!(format_currency(-13_342.5), "-R$ 13.342,50");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(41.003_57), "41,00%");
        assert_eq!(format_percent(-2.346), "-2,35%");
        assert_eq!(format_percent(1_250.0), "1.250,00%");
    }

    #[test]
    fn test_tiny_negative_does_not_print_minus_zero() {
        assert_eq!(format_currency(-0.001), "R$ 0,00");
    }

    #[test]
    fn test_non_finite_values() {
        assert_eq!(format_currency(f64::NAN), UNAVAILABLE);
        assert_eq!(format_percent(f64::INFINITY), UNAVAILABLE);
    }

    #[test]
    fn test_round_cents_midpoint_away_from_zero() {
        assert_eq!(round_cents(0.125).unwrap().to_string(), "0.13");
        assert_eq!(round_cents(-0.125).unwrap().to_string(), "-0.13");
        assert_eq!(round_cents(7.0).unwrap().to_string(), "7.00");
    }
}
