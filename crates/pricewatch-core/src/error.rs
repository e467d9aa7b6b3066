//! # Error Types
//!
//! Domain-specific error types for pricewatch-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pricewatch-core errors (this file)                                    │
//! │  ├── CatalogError     - Catalog construction failures (fatal)          │
//! │  ├── ParseError       - Amount extraction failures (per sample)        │
//! │  └── ValidationError  - Price cleaning failures (per sample)           │
//! │                                                                         │
//! │  Flow: ParseError ──wrapped──► ValidationError ──► ingestion API       │
//! │        CatalogError ──► process startup aborts (fail fast)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (currency code, raw input, etc.)
//! 3. Errors are enum variants, never String
//! 4. Build-time errors are fatal; per-sample errors are recoverable

use thiserror::Error;

// =============================================================================
// Catalog Error
// =============================================================================

/// Catalog construction errors.
///
/// These are raised while building a [`crate::Catalog`] and are **fatal**:
/// a process must not start with an invalid currency table. They can never
/// occur after construction, since the catalog is immutable.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two currency definitions claim the same match token.
    ///
    /// ## When This Occurs
    /// - A new definition's code, symbol, or alias (lower-cased) was already
    ///   claimed by an earlier definition in the table
    /// - The later definition neither opted out via `symbol_match = false`
    ///   nor supplied an explicit hand-written match pattern
    ///
    /// ## Example
    /// `$` is used by USD, AUD, CAD and a dozen others. Only USD may match
    /// it; every other dollar currency opts out of symbol matching.
    #[error("{code}: symbols already matched by other currencies: {}", .conflicting_tokens.join(", "))]
    AmbiguousSymbol {
        code: String,
        conflicting_tokens: Vec<String>,
    },

    /// A match pattern failed to compile.
    ///
    /// Only hand-written patterns can trigger this; automatically generated
    /// alternations are built from escaped tokens.
    #[error("{code}: invalid match pattern")]
    BadMatchPattern {
        code: String,
        #[source]
        source: regex::Error,
    },

    /// A code alias points at a currency that is not in the catalog.
    #[error("code alias {alias} targets unknown currency {code}")]
    UnknownAliasTarget { alias: String, code: String },
}

// =============================================================================
// Parse Error
// =============================================================================

/// Amount extraction errors.
///
/// These occur when a scraped string does not yield a usable amount. They
/// are recoverable: the caller rejects the individual sample and carries on.
/// Parsing is deterministic, so retrying never helps.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input contains nothing that looks like a price.
    #[error("no amount found in input")]
    NoAmountFound,

    /// The extracted digit groups do not form a representable number.
    #[error("malformed number: {digits}")]
    MalformedNumber { digits: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Price cleaning errors.
///
/// The per-sample failures surfaced to the ingestion API by
/// [`crate::Catalog::clean_price`]. A currency hint that fails to match is
/// **not** an error; it degrades gracefully to the default currency.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The scraped amount string could not be parsed.
    #[error("unparsable price: {raw}")]
    UnparsablePrice {
        raw: String,
        #[source]
        source: ParseError,
    },

    /// The parsed amount is zero or outside the storable range.
    ///
    /// ## When This Occurs
    /// - The amount is exactly zero (treated as "no price")
    /// - The amount exceeds 2147483647 cents (i32 storage constraint)
    #[error("price out of range: {raw}")]
    PriceOutOfRange { raw: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for catalog construction results.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Convenience type alias for amount parsing results.
pub type ParseResult<T> = Result<T, ParseError>;

/// Convenience type alias for price cleaning results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_messages() {
        let err = CatalogError::AmbiguousSymbol {
            code: "XTS".to_string(),
            conflicting_tokens: vec!["$".to_string(), "xts".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "XTS: symbols already matched by other currencies: $, xts"
        );
    }

    #[test]
    fn test_parse_error_messages() {
        assert_eq!(ParseError::NoAmountFound.to_string(), "no amount found in input");

        let err = ParseError::MalformedNumber {
            digits: "1111111111111111111111111111111111".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed number: 1111111111111111111111111111111111"
        );
    }

    #[test]
    fn test_validation_error_carries_parse_source() {
        let err = ValidationError::UnparsablePrice {
            raw: "no digits here".to_string(),
            source: ParseError::NoAmountFound,
        };
        assert_eq!(err.to_string(), "unparsable price: no digits here");

        // The parser failure stays reachable through the source chain.
        let source = std::error::Error::source(&err).expect("source");
        assert_eq!(source.to_string(), "no amount found in input");
    }

    #[test]
    fn test_out_of_range_message() {
        let err = ValidationError::PriceOutOfRange {
            raw: "0".to_string(),
        };
        assert_eq!(err.to_string(), "price out of range: 0");
    }
}
