//! `hydra-link get` – print one query parameter.

use anyhow::{bail, Result};
use hydra_link_core::Address;

/// Value of `key` in `address`; an error when the key is absent or has no value.
pub fn query_value(address: &str, key: &str) -> Result<String> {
    let addr = Address::new(address);
    match addr.query_param(key) {
        Some(value) => Ok(value),
        None => bail!("query parameter {key:?} has no value in {addr}"),
    }
}

pub fn run_get(address: &str, key: &str) -> Result<()> {
    println!("{}", query_value(address, key)?);
    Ok(())
}
