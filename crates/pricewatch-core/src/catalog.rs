//! # Currency Catalog
//!
//! Ordered registry of compiled currency definitions with conflict-checked
//! construction and first-match-wins free-text matching.
//!
//! ## Construction Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      CatalogBuilder                                     │
//! │                                                                         │
//! │  CurrencySpec ──► match tokens (lower-cased)                           │
//! │       │                 │                                               │
//! │       │                 ▼                                               │
//! │       │          claimed-token set ── overlap? ──► AmbiguousSymbol     │
//! │       │                 │                           (fatal, build time) │
//! │       │                 ▼                                               │
//! │       └──────► compile case-insensitive pattern                        │
//! │                         │                                               │
//! │                         ▼                                               │
//! │                ordered entry list + code index ──build()──► Catalog    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ordering Matters
//! The entry list is scanned linearly and the FIRST matching definition
//! wins. The built-in table puts the most frequent currencies (EUR, USD,
//! GBP, ...) before rarer ones sharing ambiguous glyphs. At ~100 entries a
//! linear scan of pre-compiled patterns is plenty fast; no trie needed.
//!
//! ## Why a Builder?
//! The claimed-token set is threaded explicitly through sequential
//! construction and dropped when `build()` produces the immutable
//! [`Catalog`]. No process-wide mutable registry exists at any point.

use std::collections::{BTreeSet, HashMap};

use regex::RegexBuilder;
use tracing::debug;

use crate::currency::{CurrencyDefinition, CurrencySpec};
use crate::error::{CatalogError, CatalogResult};

// =============================================================================
// Catalog Builder
// =============================================================================

/// Sequentially assembles a [`Catalog`], rejecting token conflicts.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    entries: Vec<CurrencyDefinition>,
    claimed: BTreeSet<String>,
    index: HashMap<String, usize>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        CatalogBuilder::default()
    }

    /// Compiles and appends one currency.
    ///
    /// ## Conflict Rule
    /// Without an explicit pattern, the spec's lower-cased tokens (code +
    /// aliases + symbol unless opted out) must be disjoint from everything
    /// claimed so far, and are claimed on success. An explicit hand-written
    /// pattern is compiled verbatim and claims NOTHING: it is the escape
    /// hatch for glyphs that need context (USD's `$` vs BRL's `R$`).
    pub fn currency(&mut self, spec: CurrencySpec) -> CatalogResult<&mut Self> {
        let pattern = match &spec.match_pattern {
            Some(explicit) => explicit.clone(),
            None => {
                let tokens = spec.match_tokens();
                let conflicting: Vec<String> =
                    tokens.intersection(&self.claimed).cloned().collect();
                if !conflicting.is_empty() {
                    return Err(CatalogError::AmbiguousSymbol {
                        code: spec.code.clone(),
                        conflicting_tokens: conflicting,
                    });
                }
                let alternation = tokens
                    .iter()
                    .map(|token| regex::escape(token))
                    .collect::<Vec<_>>()
                    .join("|");
                self.claimed.extend(tokens);
                alternation
            }
        };

        // Case-insensitive + multi-line, matching the scraped-text reality:
        // hints arrive in arbitrary case and sometimes span line breaks.
        let matcher = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .multi_line(true)
            .build()
            .map_err(|source| CatalogError::BadMatchPattern {
                code: spec.code.clone(),
                source,
            })?;

        // Pre-compiled `(decimal-sep)(\d{places})` for the HTML format path.
        let fraction_pattern = format!(
            "({})(\\d{{{}}})",
            regex::escape(&spec.decimal_separator.to_string()),
            spec.minor_unit_places
        );
        let fraction_markup = RegexBuilder::new(&fraction_pattern)
            .build()
            .map_err(|source| CatalogError::BadMatchPattern {
                code: spec.code.clone(),
                source,
            })?;

        let definition = CurrencyDefinition {
            code: spec.code.clone(),
            label: spec.effective_label().to_string(),
            symbol: spec.effective_symbol().to_string(),
            decimal_separator: spec.decimal_separator,
            grouping_separator: spec.grouping_separator,
            minor_unit_places: spec.minor_unit_places,
            symbol_position: spec.symbol_position,
            separator: spec.separator.clone(),
            matcher,
            fraction_markup,
        };

        self.index.insert(definition.code.clone(), self.entries.len());
        self.entries.push(definition);
        Ok(self)
    }

    /// Registers an extra code-index key for an existing currency.
    ///
    /// Contributes no matchable tokens; lookups via [`Catalog::get`] simply
    /// resolve the alias to the canonical definition (e.g. Cyrillic `РУБ`
    /// for `RUB`).
    pub fn code_alias(&mut self, alias: &str, code: &str) -> CatalogResult<&mut Self> {
        let position = *self
            .index
            .get(code)
            .ok_or_else(|| CatalogError::UnknownAliasTarget {
                alias: alias.to_string(),
                code: code.to_string(),
            })?;
        self.index.insert(alias.to_string(), position);
        Ok(self)
    }

    /// Finalizes the immutable catalog. The claimed-token set is dropped;
    /// it only exists to police construction.
    pub fn build(self) -> Catalog {
        Catalog {
            entries: self.entries,
            index: self.index,
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Immutable, ordered currency registry.
///
/// Built exactly once (see [`Catalog::builtin`] for the compiled-in table);
/// every operation afterwards is a pure read. Safe to share across threads
/// without synchronization.
#[derive(Debug)]
pub struct Catalog {
    entries: Vec<CurrencyDefinition>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from raw specs in the given order.
    ///
    /// This is the config-file entry point: deserialize a `Vec<CurrencySpec>`
    /// from a versioned JSON file and hand it here. Ordering in the file is
    /// significant (first match wins).
    pub fn from_specs<I>(specs: I) -> CatalogResult<Catalog>
    where
        I: IntoIterator<Item = CurrencySpec>,
    {
        let mut builder = CatalogBuilder::new();
        for spec in specs {
            builder.currency(spec)?;
        }
        Ok(builder.build())
    }

    /// Matches free text against the catalog, first definition in order wins.
    ///
    /// Pure function of the input: given the fixed catalog order the result
    /// is fully deterministic.
    ///
    /// ## Example
    /// ```rust
    /// use pricewatch_core::Catalog;
    ///
    /// let catalog = Catalog::builtin();
    /// assert_eq!(catalog.match_currency("132,20 €"), Some("EUR"));
    /// assert_eq!(catalog.match_currency("R$ 5,00"), Some("BRL"));
    /// assert_eq!(catalog.match_currency("???"), None);
    /// ```
    pub fn match_currency(&self, text: &str) -> Option<&str> {
        for entry in &self.entries {
            if entry.matches(text) {
                debug!(code = %entry.code, text, "parsed currency");
                return Some(entry.code.as_str());
            }
        }
        debug!(text, "could not parse currency");
        None
    }

    /// Looks up a definition by code or registered code alias.
    ///
    /// Exact-string lookup, no case folding: the index keys are the
    /// canonical codes plus explicitly registered aliases.
    pub fn get(&self, code: &str) -> Option<&CurrencyDefinition> {
        self.index.get(code).map(|&position| &self.entries[position])
    }

    /// Canonical codes in catalog order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.code.as_str())
    }

    /// Number of currency definitions (code aliases not counted).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_token_fails_construction() {
        let mut builder = CatalogBuilder::new();
        builder
            .currency(CurrencySpec::new("XAA").symbol("¤"))
            .unwrap();

        let err = builder
            .currency(CurrencySpec::new("XBB").symbol("¤"))
            .unwrap_err();
        match err {
            CatalogError::AmbiguousSymbol {
                code,
                conflicting_tokens,
            } => {
                assert_eq!(code, "XBB");
                assert_eq!(conflicting_tokens, vec!["¤".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_code_token_fails_construction() {
        let mut builder = CatalogBuilder::new();
        builder.currency(CurrencySpec::new("XAA")).unwrap();

        // Another spec declaring the first code as an alias collides on the
        // lower-cased token.
        let err = builder
            .currency(CurrencySpec::new("XBB").aliases(["xaa"]))
            .unwrap_err();
        assert!(matches!(err, CatalogError::AmbiguousSymbol { .. }));
    }

    #[test]
    fn test_symbol_opt_out_avoids_conflict() {
        let mut builder = CatalogBuilder::new();
        builder
            .currency(CurrencySpec::new("XAA").symbol("¤"))
            .unwrap();
        builder
            .currency(CurrencySpec::new("XBB").symbol("¤").no_symbol_match())
            .unwrap();

        let catalog = builder.build();
        // The glyph resolves to the earlier currency; the later one is only
        // reachable through its code.
        assert_eq!(catalog.match_currency("5 ¤"), Some("XAA"));
        assert_eq!(catalog.match_currency("XBB 5"), Some("XBB"));
    }

    #[test]
    fn test_explicit_pattern_claims_no_tokens() {
        let mut builder = CatalogBuilder::new();
        builder
            .currency(CurrencySpec::new("XAA").symbol("¤").match_pattern("XAA|¤¤"))
            .unwrap();
        // "¤" is still free for the taking.
        builder
            .currency(CurrencySpec::new("XBB").symbol("¤"))
            .unwrap();

        let catalog = builder.build();
        assert_eq!(catalog.match_currency("5 ¤¤"), Some("XAA"));
        // A single glyph misses XAA's explicit pattern and falls through.
        assert_eq!(catalog.match_currency("5 ¤"), Some("XBB"));
    }

    #[test]
    fn test_bad_explicit_pattern_fails_construction() {
        let mut builder = CatalogBuilder::new();
        let err = builder
            .currency(CurrencySpec::new("XAA").match_pattern("(("))
            .unwrap_err();
        assert!(matches!(err, CatalogError::BadMatchPattern { code, .. } if code == "XAA"));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let catalog = Catalog::from_specs([CurrencySpec::new("GBP").symbol("£")]).unwrap();
        assert_eq!(catalog.match_currency("gbp 12"), Some("GBP"));
        assert_eq!(catalog.match_currency("GBP 12"), Some("GBP"));
    }

    #[test]
    fn test_first_match_in_declared_order_wins() {
        let narrow = CurrencySpec::new("XAA").aliases(["zz"]);
        let wide = CurrencySpec::new("XBB").aliases(["zzz"]);

        // "zzz" contains both tokens; the earlier definition always wins.
        let forward = Catalog::from_specs([narrow.clone(), wide.clone()]).unwrap();
        assert_eq!(forward.match_currency("5 zzz"), Some("XAA"));

        let reversed = Catalog::from_specs([wide, narrow]).unwrap();
        assert_eq!(reversed.match_currency("5 zzz"), Some("XBB"));

        // Reordering does not change results for inputs only one can match.
        assert_eq!(forward.match_currency("5 zz."), Some("XAA"));
        assert_eq!(reversed.match_currency("5 zz."), Some("XAA"));
    }

    #[test]
    fn test_code_alias_lookup() {
        let mut builder = CatalogBuilder::new();
        builder.currency(CurrencySpec::new("RUB").symbol("руб.")).unwrap();
        builder.code_alias("РУБ", "RUB").unwrap();
        let catalog = builder.build();

        assert_eq!(catalog.get("РУБ").unwrap().code, "RUB");
        assert_eq!(catalog.get("RUB").unwrap().code, "RUB");
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_code_alias_unknown_target() {
        let mut builder = CatalogBuilder::new();
        let err = builder.code_alias("РУБ", "RUB").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownAliasTarget { .. }));
    }

    #[test]
    fn test_from_specs_json_config() {
        let config = r#"[
            { "code": "EUR", "symbol": "€", "decimal_separator": ",",
              "grouping_separator": ".", "symbol_position": "succeeds",
              "aliases": ["&euro;"], "label": "Euro" },
            { "code": "GBP", "symbol": "£" }
        ]"#;
        let specs: Vec<CurrencySpec> = serde_json::from_str(config).unwrap();
        let catalog = Catalog::from_specs(specs).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.match_currency("12,99 &euro;"), Some("EUR"));
        assert_eq!(catalog.match_currency("£12.99"), Some("GBP"));
        assert_eq!(catalog.get("EUR").unwrap().label, "Euro");
    }
}
