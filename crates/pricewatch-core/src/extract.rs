//! # Price Extraction
//!
//! The orchestrator composing currency resolution and amount parsing into
//! the final validated `(cents, currency_code)` result.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  scraped {raw_amount, raw_currency}                                     │
//! │       │                                                                 │
//! │       ├── raw_currency ──► match_currency ──┬── hit ──► code           │
//! │       │                                     └── miss ─► default code   │
//! │       │                    (a miss is NOT an error: the hint is        │
//! │       │                     untrusted scraped text, not a code)        │
//! │       │                                                                 │
//! │       └── raw_amount ──► parse_amount ──► cents                        │
//! │                                │                                        │
//! │                                ▼                                        │
//! │                    0 < cents <= 2147483647 ?                           │
//! │                        │              │                                 │
//! │                        ▼              ▼                                 │
//! │              (cents, code)      PriceOutOfRange                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::amount::parse_amount;
use crate::catalog::Catalog;
use crate::error::{ValidationError, ValidationResult};
use crate::MAX_PRICE_CENTS;

impl Catalog {
    /// Cleans a price as scraped from a website.
    ///
    /// Resolves the currency from the (untrusted) `raw_currency` hint, or
    /// falls back to `default_currency` when no hint is given or the hint
    /// matches nothing. The default is taken verbatim; it is the caller's
    /// contract that it is a valid code (typically `"EUR"`).
    ///
    /// The amount must land in `1..=2147483647` cents: zero is treated as
    /// "no price", and the upper bound is the i32 storage constraint of the
    /// sample store, not a property of any currency.
    ///
    /// ## Example
    /// ```rust
    /// use pricewatch_core::Catalog;
    ///
    /// let catalog = Catalog::builtin();
    /// let (cents, code) = catalog.clean_price("1,00", Some("USD"), "EUR").unwrap();
    /// assert_eq!((cents, code.as_str()), (100, "USD"));
    ///
    /// // An unmatched hint falls through to the default.
    /// let (cents, code) = catalog.clean_price("5", Some("???"), "EUR").unwrap();
    /// assert_eq!((cents, code.as_str()), (500, "EUR"));
    /// ```
    pub fn clean_price(
        &self,
        raw_amount: &str,
        raw_currency: Option<&str>,
        default_currency: &str,
    ) -> ValidationResult<(i64, String)> {
        let currency = raw_currency
            .and_then(|hint| self.match_currency(hint))
            .unwrap_or(default_currency)
            .to_string();

        let amount =
            parse_amount(raw_amount).map_err(|source| ValidationError::UnparsablePrice {
                raw: raw_amount.to_string(),
                source,
            })?;

        if amount <= 0 || amount > MAX_PRICE_CENTS {
            debug!(raw_amount, amount, "price out of range");
            return Err(ValidationError::PriceOutOfRange {
                raw: raw_amount.to_string(),
            });
        }

        Ok((amount, currency))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
