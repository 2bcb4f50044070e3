//! Error type for the strict (validated) view of an address.

/// Returned by [`Address::to_url`](super::Address::to_url) when the stored
/// string does not survive WHATWG URL parsing. No other address operation fails.
#[derive(Debug, thiserror::Error)]
pub enum AddressError {
    #[error("address {address:?} is not a valid URL: {source}")]
    Invalid {
        address: String,
        #[source]
        source: url::ParseError,
    },
}
