//! Display-boundary formatting helpers.
//!
//! # Responsibility
//! - Render decimal amounts as currency strings for UI consumption.
//! - Render account age as a human-readable elapsed-months string.
//!
//! # Invariants
//! - Rounding to currency precision happens here and only here; the
//!   projection engine and model keep full `f64` precision.

use numfmt::{Formatter, Precision};
use std::sync::OnceLock;

/// Formats an amount as `$1,234.56` (negative amounts as `-$1,234.56`).
pub fn format_currency(amount: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("$")
            .expect("valid currency prefix")
            .precision(Precision::Decimals(2))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-$")
            .expect("valid currency prefix")
            .precision(Precision::Decimals(2))
    });

    let mut formatted = if amount < 0.0 {
        negative_fmt.fmt_string(amount.abs())
    } else if amount > 0.0 {
        positive_fmt.fmt_string(amount)
    } else {
        // Zero is hardcoded as "0" by numfmt, so spell it out ourselves.
        return "$0.00".to_owned();
    };

    // numfmt omits the last trailing zero ("12.30" renders as "12.3"),
    // so append it when the cents column came back short.
    if formatted.as_bytes()[formatted.len() - 3] != b'.' {
        formatted = format!("{formatted}0");
    }

    formatted
}

/// Renders a whole-month age as `"1 month"` / `"N months"`.
pub fn format_account_age(months: i64) -> String {
    if months == 1 {
        "1 month".to_string()
    } else {
        format!("{months} months")
    }
}
