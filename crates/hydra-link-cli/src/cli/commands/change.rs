//! `hydra-link change` – set one query parameter.

use hydra_link_core::Address;

pub fn changed(address: &str, key: &str, value: &str) -> Address {
    let mut addr = Address::new(address);
    addr.change_query_param(key, value);
    addr
}

pub fn run_change(address: &str, key: &str, value: &str) {
    println!("{}", changed(address, key, value));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrites_and_keeps_others() {
        assert_eq!(
            changed("https://example.com/path?x=1&y=2", "x", "9").as_str(),
            "https://example.com/path?x=9&y=2"
        );
    }

    #[test]
    fn prepends_scheme_and_adds_query() {
        assert_eq!(
            changed("example.com/path", "page", "2").as_str(),
            "https://example.com/path?page=2"
        );
    }
}
