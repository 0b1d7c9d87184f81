//! Account color tag helpers.
//!
//! # Responsibility
//! - Normalize user-picked color tags to a canonical `#RRGGBB` form.
//! - Provide the built-in palette offered by the account editor UI.
//!
//! # Invariants
//! - A normalized tag is always `#` plus six uppercase hex digits.
//! - Normalization never invents a color; invalid input yields `None` and
//!   fallback policy lives with the caller.

use once_cell::sync::Lazy;
use regex::Regex;

static COLOR_HEX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#?[0-9a-fA-F]{6}$").expect("valid color hex regex"));

/// Palette offered when creating an account.
pub const ACCOUNT_COLORS: [&str; 10] = [
    "#FF6B6B", "#4ECDC4", "#95E1D3", "#FFD93D", "#6BCF7F", "#A8E6CF", "#FFAAA5", "#FF8B94",
    "#B4A7D6", "#8AC6D1",
];

/// Fallback used when a caller supplies an unusable color tag.
pub const DEFAULT_ACCOUNT_COLOR: &str = "#4ECDC4";

/// Normalizes a color tag to canonical `#RRGGBB` (uppercase).
///
/// Accepts the six-digit form with or without the leading `#`, any letter
/// case. Returns `None` for everything else (shorthand `#RGB`, alpha
/// channels, empty strings).
pub fn normalize_color_hex(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if !COLOR_HEX_RE.is_match(trimmed) {
        return None;
    }
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    Some(format!("#{}", digits.to_ascii_uppercase()))
}
