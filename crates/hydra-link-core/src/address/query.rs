//! Query-string codec.
//!
//! Pairs keep their original order and duplicates; lookups are last-value-wins.
//! Serialization sorts pairs by key (stable) and encodes each component the way
//! `encodeURIComponent` does, with `!'()*` escaped as well.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;

/// Bytes left unescaped in a serialized key or value: RFC 3986 unreserved only.
const COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Parsed query string. A `None` value is a bare key (`?flag`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, Option<String>)>,
}

impl Query {
    /// Parses a raw query string. A leading `?` is ignored; empty pieces are skipped.
    pub fn parse(input: &str) -> Self {
        let input = input.strip_prefix('?').unwrap_or(input);
        let pairs = input
            .split('&')
            .filter(|piece| !piece.is_empty())
            .map(|piece| match piece.split_once('=') {
                Some((key, value)) => (decode(key), Some(decode(value))),
                None => (decode(piece), None),
            })
            .collect();
        Self { pairs }
    }

    /// Effective value for `key`: the last occurrence wins. A bare key has no value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Replaces every occurrence of `key` with a single `key=value` pair.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        self.pairs.retain(|(k, _)| *k != key);
        self.pairs.push((key, Some(value.into())));
    }

    /// Removes every occurrence of `key`. Returns whether anything was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.pairs.len();
        self.pairs.retain(|(k, _)| k != key);
        self.pairs.len() != before
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pairs in parse/insertion order (not the serialized order).
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sorted: Vec<&(String, Option<String>)> = self.pairs.iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(&b.0));

        for (i, (key, value)) in sorted.into_iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}", utf8_percent_encode(key, COMPONENT_SET))?;
            if let Some(value) = value {
                write!(f, "={}", utf8_percent_encode(value, COMPONENT_SET))?;
            }
        }
        Ok(())
    }
}

fn decode(component: &str) -> String {
    let spaced = component.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_get() {
        let q = Query::parse("x=1&y=2");
        assert_eq!(q.get("x"), Some("1"));
        assert_eq!(q.get("y"), Some("2"));
        assert_eq!(q.get("z"), None);
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn leading_question_mark_and_empty_pieces() {
        let q = Query::parse("?&a=1&&b=2&");
        assert_eq!(q.len(), 2);
        assert_eq!(q.get("a"), Some("1"));
        assert_eq!(q.get("b"), Some("2"));
    }

    #[test]
    fn last_value_wins() {
        let q = Query::parse("k=first&k=second");
        assert_eq!(q.get("k"), Some("second"));
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn bare_key_has_no_value() {
        let q = Query::parse("flag&x=");
        assert!(q.contains_key("flag"));
        assert_eq!(q.get("flag"), None);
        assert_eq!(q.get("x"), Some(""));
        assert_eq!(q.to_string(), "flag&x=");
    }

    #[test]
    fn decodes_percent_and_plus() {
        let q = Query::parse("q=hello+world&city=Reggio%20Emilia&e=%C3%A8");
        assert_eq!(q.get("q"), Some("hello world"));
        assert_eq!(q.get("city"), Some("Reggio Emilia"));
        assert_eq!(q.get("e"), Some("è"));
    }

    #[test]
    fn invalid_percent_sequence_kept_literally() {
        let q = Query::parse("p=100%&r=%zz");
        assert_eq!(q.get("p"), Some("100%"));
        assert_eq!(q.get("r"), Some("%zz"));
    }

    #[test]
    fn invalid_utf8_is_replaced_on_reserialize() {
        let mut q = Query::parse("k=%E0%A4&x=a+b");
        assert_eq!(q.get("k"), Some("\u{FFFD}"));
        q.set("x", "a b");
        assert_eq!(q.to_string(), "k=%EF%BF%BD&x=a%20b");
    }

    #[test]
    fn set_collapses_duplicates() {
        let mut q = Query::parse("k=1&a=0&k=2");
        q.set("k", "3");
        assert_eq!(q.len(), 2);
        assert_eq!(q.to_string(), "a=0&k=3");
    }

    #[test]
    fn remove_reports_presence() {
        let mut q = Query::parse("a=1&b=2&a=3");
        assert!(q.remove("a"));
        assert!(!q.remove("a"));
        assert_eq!(q.to_string(), "b=2");
    }

    #[test]
    fn serializes_sorted_and_stable() {
        let q = Query::parse("b=1&a=2&b=0");
        assert_eq!(q.to_string(), "a=2&b=1&b=0");
    }

    #[test]
    fn serializes_strict_component_encoding() {
        let mut q = Query::default();
        q.set("q", "a b&c=d");
        q.set("bang", "hi!(x)*'");
        q.set("safe", "A-z_0.9~");
        assert_eq!(
            q.to_string(),
            "bang=hi%21%28x%29%2A%27&q=a%20b%26c%3Dd&safe=A-z_0.9~"
        );
    }

    #[test]
    fn empty_query_serializes_empty() {
        assert_eq!(Query::parse("").to_string(), "");
        assert!(Query::parse("").is_empty());
    }
}
