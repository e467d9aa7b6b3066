//! # Amount Parsing
//!
//! Converts a digit-bearing scraped string into an exact integer amount of
//! minor units (cents), inferring separator semantics from the digit groups
//! themselves.
//!
//! ## Why Not Use the Currency's Separators?
//! Scraped sites do not reliably format amounts in the target currency's
//! canonical locale: a German shop may render `1,000` meaning one thousand,
//! an English one `1.000` meaning the same. The matched currency's
//! configured separators are therefore ignored here; the parser makes an
//! educated guess from the shape of the digit groups alone.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "$ 1,000 off"                                                          │
//! │       │  extract first price-like token                                │
//! │       ▼                                                                 │
//! │  "1,000"                                                                │
//! │       │  strip whitespace + NBSP friends                               │
//! │       ▼                                                                 │
//! │  segments ["1", "000"]   (split on , . €)                              │
//! │       │  last segment len 3: in (2,6) exclusive -> thousands group     │
//! │       ▼                                                                 │
//! │  "1000"  ──×100──►  100000 cents                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The two-way thousands-vs-decimal split on the LAST segment's length
//! (strictly greater than 2, strictly less than 6) is the single
//! load-bearing heuristic of the whole engine. The thresholds are tuned
//! against years of scraped samples; do not "fix" them.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::trace;

use crate::error::{ParseError, ParseResult};

/// First price-like token in a scraped string.
///
/// Three alternatives, tried in order at each position:
/// 1. a digit followed by any run of digits, whitespace-ish separators and
///    grouping punctuation (the common case),
/// 2. digits with an embedded euro glyph and a 1-2 digit tail, catching
///    malformed concatenated scrapes like `5€74`,
/// 3. a single bare digit.
///
/// The digit-run form deliberately precedes the euro form: where both can
/// start at the same position (`574€83`) the plain run wins and the glyph
/// terminates the token.
static AMOUNT_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("\\d[\\s\\d\u{00a0}\u{ffa0}\u{feff}\u{202f},.]+|\\d+\u{20ac}\\d{1,2}|\\d")
        .expect("amount token pattern is valid")
});

/// Parses an amount from a scraped string, in integer cents.
///
/// The amount is the actual value times 100, regardless of the currency's
/// minor unit count. Precision beyond two fractional digits is truncated,
/// never rounded. No binary floating point is involved at any stage.
///
/// ## Example
/// ```rust
/// use pricewatch_core::parse_amount;
///
/// assert_eq!(parse_amount("$10 off").unwrap(), 1000);
/// assert_eq!(parse_amount("$1,00").unwrap(), 100);
/// assert_eq!(parse_amount("$1,000").unwrap(), 100000);
/// assert_eq!(parse_amount("129,90000001").unwrap(), 12990);
/// assert_eq!(parse_amount("574€83").unwrap(), 57400);
/// assert_eq!(parse_amount("€ 2.74").unwrap(), 274);
/// assert_eq!(parse_amount("132,20 €").unwrap(), 13220);
/// ```
pub fn parse_amount(value: &str) -> ParseResult<i64> {
    let token = AMOUNT_TOKEN
        .find(value)
        .ok_or(ParseError::NoAmountFound)?
        .as_str();

    // Strip whitespace and whitespace-like code points used as thousands
    // separators on some sites (NBSP, halfwidth NBSP, BOM, narrow NBSP).
    let cleaned: String = token
        .chars()
        .filter(|c| {
            !c.is_whitespace() && !matches!(c, '\u{00a0}' | '\u{ffa0}' | '\u{feff}' | '\u{202f}')
        })
        .collect();

    // Split at every "," "." and "€", whichever locale they nominally
    // belong to. The last segment decides the reading.
    let segments: Vec<&str> = cleaned
        .split(|c| c == ',' || c == '.' || c == '\u{20ac}')
        .collect();

    let digits = reconstruct(&segments);
    trace!(value, token, digits = %digits, "reconstructed amount");

    to_cents(&digits)
}

/// The ambiguity-resolution core: decide whether the last digit group is a
/// mistakenly-split thousands group or a fractional part.
fn reconstruct(segments: &[&str]) -> String {
    if segments.len() == 1 {
        // No separator at all: plain integer amount.
        return segments[0].to_string();
    }

    let last = segments[segments.len() - 1];
    if last.len() > 2 && last.len() < 6 {
        // "1,000" is one thousand, not 1.000 units of a tiny fraction.
        segments.concat()
    } else {
        // Everything before the last separator is the integer part.
        let mut digits = segments[..segments.len() - 1].concat();
        if !last.is_empty() {
            digits.push('.');
            digits.push_str(last);
        }
        digits
    }
}

/// Exact decimal conversion: value × 100, truncated toward zero.
fn to_cents(digits: &str) -> ParseResult<i64> {
    let malformed = || ParseError::MalformedNumber {
        digits: digits.to_string(),
    };

    let value = Decimal::from_str(digits).map_err(|_| malformed())?;
    value
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(|scaled| scaled.trunc())
        .and_then(|cents| cents.to_i64())
        .ok_or_else(malformed)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// The canonical worked examples. These pin the extraction order, the
    /// heuristic thresholds and the truncation rule all at once; any change
    /// that moves one of these breaks compatibility with stored samples.
    #[test]
    fn test_worked_examples() {
        assert_eq!(parse_amount("$10 off").unwrap(), 1000);
        assert_eq!(parse_amount("$1,00").unwrap(), 100);
        assert_eq!(parse_amount("$1,000").unwrap(), 100000);
        assert_eq!(parse_amount("129,90000001").unwrap(), 12990);
        assert_eq!(parse_amount("574€83").unwrap(), 57400);
        assert_eq!(parse_amount("€ 2.74").unwrap(), 274);
        assert_eq!(parse_amount("132,20 €").unwrap(), 13220);
    }

    #[test]
    fn test_single_digit() {
        assert_eq!(parse_amount("5").unwrap(), 500);
        assert_eq!(parse_amount("from 5!").unwrap(), 500);
    }

    #[test]
    fn test_zero_parses_to_zero_cents() {
        // Range rejection of zero belongs to clean_price, not the parser.
        assert_eq!(parse_amount("0").unwrap(), 0);
    }

    #[test]
    fn test_plain_integer_run() {
        assert_eq!(parse_amount("1299").unwrap(), 129900);
    }

    #[test]
    fn test_two_digit_tail_is_fraction() {
        assert_eq!(parse_amount("1.234,56").unwrap(), 123456);
        assert_eq!(parse_amount("1,234.56").unwrap(), 123456);
    }

    #[test]
    fn test_three_to_five_digit_tail_is_thousands() {
        assert_eq!(parse_amount("2.999").unwrap(), 299900);
        assert_eq!(parse_amount("1,23456").unwrap(), 12345600);
    }

    #[test]
    fn test_six_digit_tail_is_fraction_again() {
        // Exactly at the upper threshold: len 6 falls back to fraction,
        // truncated to cents.
        assert_eq!(parse_amount("1,234567").unwrap(), 123);
    }

    #[test]
    fn test_one_digit_tail_is_fraction() {
        assert_eq!(parse_amount("12,3").unwrap(), 1230);
    }

    #[test]
    fn test_multiple_separators_concatenate_head() {
        assert_eq!(parse_amount("1.2.3").unwrap(), 1230);
        assert_eq!(parse_amount("12,34,56").unwrap(), 123456);
    }

    #[test]
    fn test_trailing_separator_reads_as_integer() {
        assert_eq!(parse_amount("1234.").unwrap(), 123400);
    }

    #[test]
    fn test_euro_glyph_token() {
        // The digit run stops at the glyph when it can ("574" above); only
        // a single leading digit reaches the euro alternative.
        assert_eq!(parse_amount("5€74").unwrap(), 574);
    }

    #[test]
    fn test_unicode_space_grouping() {
        assert_eq!(parse_amount("1\u{00a0}234,56").unwrap(), 123456);
        assert_eq!(parse_amount("1\u{202f}299").unwrap(), 129900);
        assert_eq!(parse_amount("12 345").unwrap(), 1234500);
    }

    #[test]
    fn test_truncates_beyond_cents() {
        assert_eq!(parse_amount("1,999999").unwrap(), 199);
        assert_eq!(parse_amount("0.01").unwrap(), 1);
    }

    #[test]
    fn test_no_amount_found() {
        assert!(matches!(
            parse_amount("price on request"),
            Err(ParseError::NoAmountFound)
        ));
        assert!(matches!(parse_amount(""), Err(ParseError::NoAmountFound)));
        assert!(matches!(parse_amount("€"), Err(ParseError::NoAmountFound)));
    }

    #[test]
    fn test_malformed_beyond_decimal_capacity() {
        // 40 digits exceed what the exact-decimal representation can hold.
        let absurd = "9".repeat(40);
        assert!(matches!(
            parse_amount(&absurd),
            Err(ParseError::MalformedNumber { .. })
        ));
    }

    #[test]
    fn test_extraction_takes_first_token() {
        assert_eq!(parse_amount("was 19,99 now 9,99").unwrap(), 1999);
    }
}
