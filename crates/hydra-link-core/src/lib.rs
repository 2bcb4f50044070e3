pub mod config;
pub mod logging;

pub mod address;

pub use address::{Address, AddressError, PathMarkers, Query};
