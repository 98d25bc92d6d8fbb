//! Amount extraction from lower-cased utterances.
//!
//! A numeral next to a rupee marker ("₹250", "250 rs", "rs. 40", "90 rupees")
//! wins over any bare numeral, wherever it appears in the text.

use regex::Regex;
use std::sync::LazyLock;

static CURRENCY_AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?:₹|rs\.?|rupees?)\s*(?P<after>[0-9]+(?:\.[0-9]{1,2})?)",
        r"|(?P<before>[0-9]+(?:\.[0-9]{1,2})?)\s*(?:₹|rs\.?|rupees?)",
    ))
    .expect("currency amount pattern is valid")
});

static BARE_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?:\.[0-9]{1,2})?").expect("bare amount pattern is valid"));

/// First currency-marked numeral, else the first bare numeral, else 0.
/// Only ASCII digits count as numerals.
pub fn extract_amount(lower: &str) -> f64 {
    let marked = CURRENCY_AMOUNT
        .captures(lower)
        .and_then(|caps| caps.name("after").or_else(|| caps.name("before")))
        .map(|m| m.as_str());

    marked
        .or_else(|| BARE_AMOUNT.find(lower).map(|m| m.as_str()))
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|a| a.is_finite())
        .unwrap_or(0.0)
}
