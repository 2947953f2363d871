use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{CURRENCY_MINOR_UNIT_DIGITS, CURRENCY_SYMBOL, THOUSANDS_SEPARATOR};

/// Converts an amount in cents to a decimal amount in dollars.
pub fn cents_to_decimal(cents: i64) -> Decimal {
    Decimal::new(cents, CURRENCY_MINOR_UNIT_DIGITS)
}

/// Drops any fraction of a cent from an exact decimal amount of cents.
///
/// `149.5` becomes `149` and `29.8` becomes `29`; negative amounts move
/// towards zero.
pub fn whole_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::ToZero)
}

/// Formats cents as a US dollar amount, e.g. `123456` -> `$1,234.56`.
pub fn format_cents(cents: i64) -> String {
    let amount = cents_to_decimal(cents);
    let digits = format!(
        "{:.prec$}",
        amount.abs(),
        prec = CURRENCY_MINOR_UNIT_DIGITS as usize
    );
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));
    let sign = if amount.is_sign_negative() { "-" } else { "" };

    format!(
        "{sign}{CURRENCY_SYMBOL}{}.{fraction}",
        group_thousands(whole)
    )
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}
