//! `hydra-link set` – set several query parameters in one rewrite.

use hydra_link_core::Address;

/// Splits `key=value` at the first `=`. A bare `key` yields `None` (skipped on set).
pub fn parse_pair(pair: &str) -> (&str, Option<&str>) {
    match pair.split_once('=') {
        Some((key, value)) => (key, Some(value)),
        None => (pair, None),
    }
}

pub fn with_pairs(address: &str, pairs: &[String]) -> Address {
    let mut addr = Address::new(address);
    addr.set_query_params(pairs.iter().map(|p| parse_pair(p)));
    addr
}

pub fn run_set(address: &str, pairs: &[String]) {
    println!("{}", with_pairs(address, pairs));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_value() {
        assert_eq!(parse_pair("x=9"), ("x", Some("9")));
        assert_eq!(parse_pair("url=a=b"), ("url", Some("a=b")));
        assert_eq!(parse_pair("empty="), ("empty", Some("")));
    }

    #[test]
    fn bare_key_is_null() {
        assert_eq!(parse_pair("flag"), ("flag", None));
    }

    fn pairs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_key_is_skipped() {
        let addr = with_pairs(
            "https://example.com/path?x=1&y=2",
            &pairs(&["x=9", "y", "z=3"]),
        );
        assert_eq!(addr.as_str(), "https://example.com/path?x=9&y=2&z=3");
    }

    #[test]
    fn bare_key_does_not_add_absent_key() {
        let addr = with_pairs("https://example.com/path?x=1", &pairs(&["flag"]));
        assert_eq!(addr.query_param("x").as_deref(), Some("1"));
        assert!(!addr.query().contains_key("flag"));
    }
}
