//! Address value object: an absolute `https://` link with accessors for its
//! host, base path and query, and mutators that rewrite the query in place.
//!
//! Nothing here fails on malformed input. Missing parts come back as an empty
//! `&str` or `None`; use [`Address::to_url`] when validation is wanted.

mod error;
pub mod markers;
pub mod query;

pub use error::AddressError;
pub use markers::{PathMarkers, DEFAULT_MARKERS};
pub use query::Query;

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Scheme every stored address starts with.
pub const SCHEME_PREFIX: &str = "https://";

/// A link address. The stored string always starts with [`SCHEME_PREFIX`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Address {
    raw: String,
}

impl Address {
    /// Builds an address, prepending `https://` when the input lacks it.
    /// The rest of the input is stored as given.
    ///
    /// - `Address::new("example.com/a")` → `"https://example.com/a"`
    /// - `Address::new("https://example.com/a")` → unchanged
    pub fn new(input: impl Into<String>) -> Self {
        let input = input.into();
        let raw = if input.starts_with(SCHEME_PREFIX) {
            input
        } else {
            format!("{SCHEME_PREFIX}{input}")
        };
        Self { raw }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn into_string(self) -> String {
        self.raw
    }

    /// Text between the first `https://` and the next `/`.
    ///
    /// Everything up to the following `/` counts, so a query directly after the
    /// host (`https://a.com?x=1`) is part of the result.
    pub fn host_name(&self) -> &str {
        let Some((_, rest)) = self.raw.split_once(SCHEME_PREFIX) else {
            return "";
        };
        let segment = match rest.find(SCHEME_PREFIX) {
            Some(next) => &rest[..next],
            None => rest,
        };
        segment.split_once('/').map_or(segment, |(host, _)| host)
    }

    /// Everything before the first `?`.
    pub fn base_path(&self) -> &str {
        self.raw
            .split_once('?')
            .map_or(self.raw.as_str(), |(base, _)| base)
    }

    /// Raw query string after the first `?`, empty when there is none.
    pub fn url_params(&self) -> &str {
        self.raw.split_once('?').map_or("", |(_, query)| query)
    }

    /// Path heuristic using [`DEFAULT_MARKERS`]: `https://example.com/foo` → `foo`.
    pub fn relative_path(&self) -> Option<&str> {
        markers::split_after_first(&self.raw, &DEFAULT_MARKERS)
    }

    pub fn relative_path_with(&self, markers: &PathMarkers) -> Option<&str> {
        markers.split_after_first(&self.raw)
    }

    pub fn query(&self) -> Query {
        Query::parse(self.url_params())
    }

    /// Decoded value of `key`; `None` if absent or present without a value.
    pub fn query_param(&self, key: &str) -> Option<String> {
        self.query().get(key).map(str::to_owned)
    }

    /// Sets `key` to `value` (replacing all previous occurrences) and rewrites
    /// the address as `base_path?query`.
    pub fn change_query_param(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        let mut query = self.query();
        query.set(key, value);
        self.rewrite(&query);
        tracing::debug!(key, address = %self.raw, "changed query parameter");
        self
    }

    /// Applies `params` in iteration order and rewrites the address once.
    /// Entries with a `None` value are skipped; they never clear a key.
    pub fn set_query_params<I, K, V>(&mut self, params: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = self.query();
        let mut applied = 0usize;
        for (key, value) in params {
            if let Some(value) = value {
                query.set(key.as_ref(), value);
                applied += 1;
            }
        }
        self.rewrite(&query);
        tracing::debug!(applied, address = %self.raw, "set query parameters");
        self
    }

    /// Owned form of [`change_query_param`](Self::change_query_param).
    pub fn with_query_param(mut self, key: &str, value: impl Into<String>) -> Self {
        self.change_query_param(key, value);
        self
    }

    /// Strict WHATWG parse of the stored string. Never modifies the address.
    pub fn to_url(&self) -> Result<url::Url, AddressError> {
        url::Url::parse(&self.raw).map_err(|source| AddressError::Invalid {
            address: self.raw.clone(),
            source,
        })
    }

    pub fn is_well_formed(&self) -> bool {
        self.to_url().is_ok()
    }

    fn rewrite(&mut self, query: &Query) {
        self.raw = format!("{}?{}", self.base_path(), query);
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<String> for Address {
    fn from(input: String) -> Self {
        Self::new(input)
    }
}

impl From<&str> for Address {
    fn from(input: &str) -> Self {
        Self::new(input)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.raw
    }
}

impl FromStr for Address {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}
