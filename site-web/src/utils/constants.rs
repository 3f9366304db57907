//! Application constants

/// Query parameter selecting the market, e.g. `?market=eu`.
pub const MARKET_QUERY_PARAM: &str = "market";

/// Placeholder element in index.html shown until the WASM bundle runs.
pub const STATIC_LOADER_ID: &str = "static-loader";
