//! `hydra-link inspect` – show the parts of an address.

use anyhow::Result;
use hydra_link_core::config::LinkConfig;
use hydra_link_core::Address;
use serde_json::{json, Value};

/// JSON view printed by `inspect --json`.
pub fn inspect_json(addr: &Address, cfg: &LinkConfig) -> Value {
    let params: Vec<_> = addr
        .query()
        .iter()
        .map(|(key, value)| json!({ "key": key, "value": value }))
        .collect();
    json!({
        "address": addr.as_str(),
        "host": addr.host_name(),
        "base_path": addr.base_path(),
        "query": addr.url_params(),
        "relative_path": addr.relative_path_with(cfg.markers()),
        "well_formed": addr.is_well_formed(),
        "params": params,
    })
}

pub fn run_inspect(address: &str, as_json: bool, cfg: &LinkConfig) -> Result<()> {
    let addr = Address::new(address);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&inspect_json(&addr, cfg))?);
        return Ok(());
    }

    let relative = addr.relative_path_with(cfg.markers());
    println!("{:<14} {}", "ADDRESS", addr);
    println!("{:<14} {}", "HOST", addr.host_name());
    println!("{:<14} {}", "BASE PATH", addr.base_path());
    println!("{:<14} {}", "QUERY", addr.url_params());
    println!("{:<14} {}", "RELATIVE PATH", relative.unwrap_or("-"));
    if let Err(err) = addr.to_url() {
        println!("{:<14} {}", "WARNING", err);
    }
    for (key, value) in addr.query().iter() {
        println!("  {} = {}", key, value.unwrap_or("(no value)"));
    }
    Ok(())
}
