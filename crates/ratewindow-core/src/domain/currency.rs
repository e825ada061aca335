use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Codes the rate source is known to publish. Informational: selections are never checked against it.
pub const KNOWN_CURRENCIES: [&str; 26] = [
    "AUD", "AZN", "BYN", "CAD", "CHF", "CNY", "CZK", "DKK", "EUR", "GBP", "GEL", "ILS", "KZT",
    "NOK", "PLN", "SEK", "TMT", "UAH", "USD", "UZS", "XAU", "HUF", "JPY", "MDL", "SGD", "TRY",
];

/// Default selection when the caller names no currency.
pub const DEFAULT_CURRENCIES: [&str; 2] = ["USD", "EUR"];

const TRIMMED_PUNCTUATION: &[char] = &[',', '.', '/', '?', ':'];

pub fn is_known_currency(code: &str) -> bool {
    KNOWN_CURRENCIES.contains(&code)
}

/// Strip surrounding punctuation and whitespace from a user token.
///
/// Case is left untouched: `"usd,"` becomes `"usd"`, not `"USD"`.
pub fn normalize_token(raw: &str) -> String {
    raw.trim_matches(|ch: char| ch.is_whitespace() || TRIMMED_PUNCTUATION.contains(&ch))
        .to_owned()
}

/// Set of currency codes used as an inclusion filter.
///
/// Membership is an exact, case-sensitive string match against the code as the
/// source sends it. A lowercase `usd` therefore never matches the source's `USD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencySelection(BTreeSet<String>);

impl CurrencySelection {
    /// Normalize and deduplicate tokens; tokens that are empty after trimming are dropped.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            tokens
                .into_iter()
                .map(|token| normalize_token(token.as_ref()))
                .filter(|code| !code.is_empty())
                .collect(),
        )
    }

    /// Adds normalized tokens to the selection; empty ones are dropped.
    pub fn with_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.0.extend(Self::new(tokens).0);
        self
    }

    pub fn empty() -> Self {
        Self(BTreeSet::new())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.0.contains(code)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Selected codes absent from [`KNOWN_CURRENCIES`].
    pub fn unknown_codes(&self) -> Vec<&str> {
        self.iter().filter(|code| !is_known_currency(code)).collect()
    }
}

impl Default for CurrencySelection {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCIES)
    }
}
