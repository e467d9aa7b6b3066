//! # pricewatch-core: Currency Registry & Price Extraction Engine
//!
//! This crate is the **heart** of Pricewatch. It turns free-form,
//! locale-ambiguous price strings scraped off arbitrary web pages
//! (`"$1,000"`, `"132,20 €"`, `"574€83"`, `"129,90000001"`) into an exact
//! integer count of minor units plus a currency code.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Pricewatch Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Scraper Ingestion API (separate service)           │   │
//! │  │        receives {url, price} pairs from browser agents          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ pricewatch-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │  amount   │  │  extract  │  │  currency │  │   │
//! │  │   │  Catalog  │  │  parser   │  │clean_price│  │  defs +   │  │   │
//! │  │   │  matching │  │ heuristic │  │ validation│  │ formatting│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               Sample store (separate service)                   │   │
//! │  │           persists the (cents, currency_code) tuples            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`currency`] - Currency specs, compiled definitions, display formatting
//! - [`catalog`] - Conflict-checked, ordered registry with free-text matching
//! - [`builtin`] - The compiled-in table of 112 currencies
//! - [`amount`] - The separator-ambiguity heuristic parser
//! - [`extract`] - `clean_price` orchestration and range validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every entry point is deterministic - same input
//!    = same output; retrying can never change an outcome
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: Amounts are integer cents (i64); binary floating
//!    point is banned from the money path
//! 4. **Fail Fast on Bad Config**: An ambiguous currency table aborts
//!    construction; a process must never start with one
//!
//! ## Example Usage
//!
//! ```rust
//! use pricewatch_core::{clean_price, match_currency};
//!
//! // Currency hints are scraped text, matched against the catalog
//! assert_eq!(match_currency("132,20 €"), Some("EUR"));
//!
//! // Amount + hint + fallback currency -> cents + code
//! let (cents, code) = clean_price("132,20", Some("€"), "EUR").unwrap();
//! assert_eq!((cents, code.as_str()), (13220, "EUR"));
//!
//! // An unmatched hint is not an error; the default takes over
//! let (cents, code) = clean_price("5", Some("???"), "EUR").unwrap();
//! assert_eq!((cents, code.as_str()), (500, "EUR"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod amount;
pub mod builtin;
pub mod catalog;
pub mod currency;
pub mod error;
pub mod extract;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use pricewatch_core::Catalog` instead of
// `use pricewatch_core::catalog::Catalog`

pub use amount::parse_amount;
pub use catalog::{Catalog, CatalogBuilder};
pub use currency::{CurrencyDefinition, CurrencySpec, SymbolPosition};
pub use error::{CatalogError, ParseError, ValidationError};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum storable price, in cents.
///
/// ## Why i32::MAX?
/// The sample store keeps prices in a signed 32-bit column. This is an
/// external storage constraint, not a property of any currency; it caps
/// clean prices at 21,474,836.47 units.
pub const MAX_PRICE_CENTS: i64 = 2_147_483_647;

// =============================================================================
// Convenience Entry Points (built-in catalog)
// =============================================================================

/// Matches free text against the built-in catalog, first match wins.
///
/// See [`Catalog::match_currency`].
pub fn match_currency(text: &str) -> Option<&'static str> {
    Catalog::builtin().match_currency(text)
}

/// Cleans a scraped price against the built-in catalog.
///
/// See [`Catalog::clean_price`].
pub fn clean_price(
    raw_amount: &str,
    raw_currency: Option<&str>,
    default_currency: &str,
) -> error::ValidationResult<(i64, String)> {
    Catalog::builtin().clean_price(raw_amount, raw_currency, default_currency)
}

// =============================================================================
// Unit Tests
// =============================================================================
