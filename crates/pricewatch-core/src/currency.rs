//! # Currency Definitions
//!
//! The raw currency description ([`CurrencySpec`]) and its compiled form
//! ([`CurrencyDefinition`]), plus display formatting.
//!
//! ## Two Representations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CurrencySpec                         CurrencyDefinition                │
//! │  (raw, serializable)    ──build──►    (compiled, immutable)             │
//! │                                                                         │
//! │  code: "EUR"                          code: "EUR"                       │
//! │  symbol: "€"                          matcher: /eur|€|&euro;/i          │
//! │  aliases: ["&euro;"]                  fraction_markup: /(,)(\d{2})/     │
//! │  decimal: ','  grouping: '.'          decimal: ','  grouping: '.'       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Specs are plain data: they derive serde so the table can live in a
//! versioned config file instead of the compiled-in default. Compilation
//! (token conflict checks, regex building) happens once, in
//! [`crate::catalog::CatalogBuilder`].
//!
//! The separators stored here are used when **formatting** amounts for this
//! currency. They are deliberately NOT used while parsing scraped text:
//! scraped sites do not reliably follow the target currency's locale, so the
//! parser infers separators from the digit groups themselves (see
//! [`crate::amount`]).

use std::collections::BTreeSet;

use regex::Regex;
use serde::{Deserialize, Serialize};

// =============================================================================
// Symbol Position
// =============================================================================

/// Whether a currency's symbol is written before or after the amount.
///
/// ## Example
/// - Precedes: `$1,234.56` (USD)
/// - Succeeds: `1.234,56 €` (EUR)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    Precedes,
    Succeeds,
}

// =============================================================================
// Currency Spec (raw)
// =============================================================================

/// Raw description of one currency, before compilation.
///
/// Field defaults mirror the most common case (dollar-style formatting with
/// two decimal places, symbol first) so that table entries only state what
/// differs. The same defaults apply when deserializing from a config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencySpec {
    /// 3-letter uppercase identifier, unique across the catalog.
    pub code: String,

    /// Human-readable display name. Defaults to the code.
    #[serde(default)]
    pub label: Option<String>,

    /// Primary glyph(s) used when formatting. Defaults to the code.
    #[serde(default)]
    pub symbol: Option<String>,

    /// Decimal separator used when formatting (not when parsing).
    #[serde(default = "default_decimal")]
    pub decimal_separator: char,

    /// Grouping (thousands) separator used when formatting.
    #[serde(default = "default_grouping")]
    pub grouping_separator: char,

    /// Number of fractional digits (0-3 across the catalog).
    #[serde(default = "default_places")]
    pub minor_unit_places: u32,

    /// Symbol placement when formatting.
    #[serde(default = "default_position")]
    pub symbol_position: SymbolPosition,

    /// Whether the symbol participates in automatic free-text matching.
    ///
    /// Set to `false` for currencies whose symbol is ambiguous (`$`, `kr`,
    /// `CFA`, ...) and already matched by an earlier, more frequent currency.
    #[serde(default = "default_symbol_match")]
    pub symbol_match: bool,

    /// Additional match tokens beyond code and symbol (HTML entities,
    /// alternate scripts, trade abbreviations).
    #[serde(default)]
    pub aliases: Vec<String>,

    /// Explicit hand-written match pattern.
    ///
    /// When present it is compiled verbatim (case-insensitive) and the
    /// currency claims NO tokens in the conflict registry. Needed where an
    /// escaped-token alternation is not precise enough, e.g. USD's `$` must
    /// not match the trailing `$` of BRL's `R$`.
    #[serde(default)]
    pub match_pattern: Option<String>,

    /// String placed between symbol and number when formatting.
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_decimal() -> char {
    '.'
}

fn default_grouping() -> char {
    ','
}

fn default_places() -> u32 {
    2
}

fn default_position() -> SymbolPosition {
    SymbolPosition::Precedes
}

fn default_symbol_match() -> bool {
    true
}

fn default_separator() -> String {
    " ".to_string()
}

impl CurrencySpec {
    /// Creates a spec with the defaults described on each field.
    pub fn new(code: &str) -> Self {
        CurrencySpec {
            code: code.to_string(),
            label: None,
            symbol: None,
            decimal_separator: default_decimal(),
            grouping_separator: default_grouping(),
            minor_unit_places: default_places(),
            symbol_position: default_position(),
            symbol_match: default_symbol_match(),
            aliases: Vec::new(),
            match_pattern: None,
            separator: default_separator(),
        }
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn symbol(mut self, symbol: &str) -> Self {
        self.symbol = Some(symbol.to_string());
        self
    }

    pub fn decimal(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    pub fn grouping(mut self, separator: char) -> Self {
        self.grouping_separator = separator;
        self
    }

    pub fn places(mut self, places: u32) -> Self {
        self.minor_unit_places = places;
        self
    }

    /// Symbol is appended after the amount (EUR style).
    pub fn succeeds(mut self) -> Self {
        self.symbol_position = SymbolPosition::Succeeds;
        self
    }

    /// Excludes the symbol from automatic matching (ambiguous glyph).
    pub fn no_symbol_match(mut self) -> Self {
        self.symbol_match = false;
        self
    }

    pub fn aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    pub fn match_pattern(mut self, pattern: &str) -> Self {
        self.match_pattern = Some(pattern.to_string());
        self
    }

    pub fn separator(mut self, separator: &str) -> Self {
        self.separator = separator.to_string();
        self
    }

    /// The symbol that will be used for formatting (defaults to the code).
    pub fn effective_symbol(&self) -> &str {
        self.symbol.as_deref().unwrap_or(&self.code)
    }

    /// The display label (defaults to the code).
    pub fn effective_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.code)
    }

    /// The lower-cased tokens this spec wants to match in free text:
    /// code + aliases, plus the symbol unless `symbol_match` is off.
    ///
    /// A `BTreeSet` keeps the generated alternation deterministic.
    pub fn match_tokens(&self) -> BTreeSet<String> {
        let mut tokens: BTreeSet<String> = BTreeSet::new();
        tokens.insert(self.code.to_lowercase());
        for alias in &self.aliases {
            tokens.insert(alias.to_lowercase());
        }
        if self.symbol_match {
            tokens.insert(self.effective_symbol().to_lowercase());
        }
        tokens
    }
}

// =============================================================================
// Currency Definition (compiled)
// =============================================================================

/// One compiled catalog entry. Immutable after construction.
#[derive(Debug)]
pub struct CurrencyDefinition {
    pub code: String,
    pub label: String,
    pub symbol: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub minor_unit_places: u32,
    pub symbol_position: SymbolPosition,
    pub separator: String,

    /// Case-insensitive pattern recognizing this currency in scraped text.
    pub(crate) matcher: Regex,

    /// Pre-compiled `(decimal-sep)(\d{places})` pattern for the HTML
    /// formatting path, so formatting never compiles regexes.
    pub(crate) fraction_markup: Regex,
}

impl CurrencyDefinition {
    /// True if this currency's match pattern finds a hit anywhere in `text`.
    pub fn matches(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }

    /// Renders an amount of minor units (cents) for display.
    ///
    /// `places` overrides the currency's own fractional digit count;
    /// `places == 0` truncates toward zero to whole major units. When `html`
    /// is set and places is non-zero, the fractional digits are wrapped in
    /// `<sup>` markup.
    ///
    /// Integer arithmetic only. This is a display utility; it plays no part
    /// in the parse path.
    ///
    /// ## Example
    /// ```rust
    /// use pricewatch_core::Catalog;
    ///
    /// let eur = Catalog::builtin().get("EUR").unwrap();
    /// assert_eq!(eur.format_cents(123456, None, false), "1.234,56 €");
    /// assert_eq!(eur.format_cents(123456, None, true), "1.234,<sup>56</sup> €");
    ///
    /// let usd = Catalog::builtin().get("USD").unwrap();
    /// assert_eq!(usd.format_cents(123456, None, false), "$1,234.56");
    /// ```
    pub fn format_cents(&self, cents: i64, places: Option<u32>, html: bool) -> String {
        let places = places.unwrap_or(self.minor_unit_places);
        let magnitude = cents.unsigned_abs() as u128;

        // Canonical rendering first ("thousands comma, decimal dot"), the
        // currency's own separators are swapped in afterwards.
        let canonical = if places == 0 {
            group_thousands(&(magnitude / 100).to_string())
        } else {
            let scaled = scale_cents(magnitude, places);
            let pow = 10u128.pow(places);
            format!(
                "{}.{:0width$}",
                group_thousands(&(scaled / pow).to_string()),
                scaled % pow,
                width = places as usize
            )
        };

        let mut body = String::with_capacity(canonical.len() + 1);
        if cents < 0 {
            body.push('-');
        }
        for c in canonical.chars() {
            body.push(match c {
                '.' => self.decimal_separator,
                ',' => self.grouping_separator,
                other => other,
            });
        }

        let result = match self.symbol_position {
            SymbolPosition::Precedes => [self.symbol.as_str(), body.as_str()].join(&self.separator),
            SymbolPosition::Succeeds => [body.as_str(), self.symbol.as_str()].join(&self.separator),
        };

        if html && places != 0 {
            self.fraction_markup
                .replace_all(&result, "${1}<sup>${2}</sup>")
                .into_owned()
        } else {
            result
        }
    }
}

/// Rescales a cents magnitude (2 implied fractional digits) to `places`
/// fractional digits. Widening to more places is exact; narrowing to one
/// place rounds half to even.
fn scale_cents(cents: u128, places: u32) -> u128 {
    if places >= 2 {
        cents * 10u128.pow(places - 2)
    } else {
        // places == 1: drop one digit with bankers rounding
        let quotient = cents / 10;
        match cents % 10 {
            r if r > 5 => quotient + 1,
            5 => quotient + (quotient & 1),
            _ => quotient,
        }
    }
}

/// Inserts a `,` between every group of three digits, from the right.
fn group_thousands(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CatalogBuilder};

    fn compile(spec: CurrencySpec) -> Catalog {
        let mut builder = CatalogBuilder::new();
        builder.currency(spec).unwrap();
        builder.build()
    }

    #[test]
    fn test_spec_defaults() {
        let spec = CurrencySpec::new("HUF").symbol("Ft").label("Hungarian Forint");
        assert_eq!(spec.decimal_separator, '.');
        assert_eq!(spec.grouping_separator, ',');
        assert_eq!(spec.minor_unit_places, 2);
        assert_eq!(spec.symbol_position, SymbolPosition::Precedes);
        assert!(spec.symbol_match);
        assert_eq!(spec.separator, " ");
    }

    #[test]
    fn test_symbol_and_label_default_to_code() {
        let spec = CurrencySpec::new("MDL");
        assert_eq!(spec.effective_symbol(), "MDL");
        assert_eq!(spec.effective_label(), "MDL");
    }

    #[test]
    fn test_match_tokens_include_symbol_and_aliases() {
        let spec = CurrencySpec::new("EUR").symbol("€").aliases(["&euro;"]);
        let tokens = spec.match_tokens();
        assert!(tokens.contains("eur"));
        assert!(tokens.contains("€"));
        assert!(tokens.contains("&euro;"));
    }

    #[test]
    fn test_no_symbol_match_drops_symbol_token_only() {
        let spec = CurrencySpec::new("AUD").symbol("$").no_symbol_match();
        let tokens = spec.match_tokens();
        assert!(tokens.contains("aud"));
        assert!(!tokens.contains("$"));
    }

    #[test]
    fn test_aliases_always_claimed_even_without_symbol_match() {
        // Mirrors CUP: the symbol is opted out but the aliases still match.
        let spec = CurrencySpec::new("CUP")
            .symbol("₱")
            .no_symbol_match()
            .aliases(["$", "$MN"]);
        let tokens = spec.match_tokens();
        assert!(tokens.contains("cup"));
        assert!(tokens.contains("$"));
        assert!(tokens.contains("$mn"));
        assert!(!tokens.contains("₱"));
    }

    #[test]
    fn test_format_symbol_precedes() {
        let catalog = compile(CurrencySpec::new("USD").symbol("$").separator(""));
        let usd = catalog.get("USD").unwrap();
        assert_eq!(usd.format_cents(123456, None, false), "$1,234.56");
        assert_eq!(usd.format_cents(500, None, false), "$5.00");
    }

    #[test]
    fn test_format_symbol_succeeds_with_swapped_separators() {
        let catalog = compile(
            CurrencySpec::new("EUR")
                .symbol("€")
                .decimal(',')
                .grouping('.')
                .succeeds(),
        );
        let eur = catalog.get("EUR").unwrap();
        assert_eq!(eur.format_cents(123456, None, false), "1.234,56 €");
        assert_eq!(eur.format_cents(74, None, false), "0,74 €");
    }

    #[test]
    fn test_format_zero_places_truncates() {
        let catalog = compile(
            CurrencySpec::new("RUB")
                .symbol("руб.")
                .decimal(',')
                .grouping(' ')
                .places(0)
                .succeeds(),
        );
        let rub = catalog.get("RUB").unwrap();
        // 12345.67 -> 12345, grouped with the currency's space separator
        assert_eq!(rub.format_cents(1234567, None, false), "12 345 руб.");
    }

    #[test]
    fn test_format_places_override() {
        let catalog = compile(CurrencySpec::new("USD").symbol("$").separator(""));
        let usd = catalog.get("USD").unwrap();
        assert_eq!(usd.format_cents(123456, Some(0), false), "$1,234");
        assert_eq!(usd.format_cents(123456, Some(3), false), "$1,234.560");
    }

    #[test]
    fn test_format_negative() {
        let catalog = compile(CurrencySpec::new("USD").symbol("$").separator(""));
        let usd = catalog.get("USD").unwrap();
        assert_eq!(usd.format_cents(-550, None, false), "$-5.50");
    }

    #[test]
    fn test_format_html_wraps_fraction() {
        let catalog = compile(
            CurrencySpec::new("EUR")
                .symbol("€")
                .decimal(',')
                .grouping('.')
                .succeeds(),
        );
        let eur = catalog.get("EUR").unwrap();
        assert_eq!(eur.format_cents(123456, None, true), "1.234,<sup>56</sup> €");
        // Zero places: nothing to wrap, html flag is a no-op.
        assert_eq!(eur.format_cents(123456, Some(0), true), "1.234 €");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn test_scale_cents_half_even() {
        assert_eq!(scale_cents(125, 1), 12); // 1.25 -> 1.2
        assert_eq!(scale_cents(135, 1), 14); // 1.35 -> 1.4
        assert_eq!(scale_cents(126, 1), 13);
        assert_eq!(scale_cents(1234, 3), 12340);
    }

    #[test]
    fn test_spec_json_defaults() {
        let spec: CurrencySpec = serde_json::from_str(r#"{ "code": "HUF", "symbol": "Ft" }"#).unwrap();
        assert_eq!(spec.code, "HUF");
        assert_eq!(spec.minor_unit_places, 2);
        assert!(spec.symbol_match);
        assert_eq!(spec.symbol_position, SymbolPosition::Precedes);
    }
}
