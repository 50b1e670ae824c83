//! Centralized constants for default endpoints and UA.

/// Default UA sent with every request.
pub(crate) const USER_AGENT: &str = concat!("fmp-rs/", env!("CARGO_PKG_VERSION"));

/// FMP v3 API base (paths are appended).
pub(crate) const DEFAULT_BASE_V3: &str = "https://financialmodelingprep.com/api/v3/";

/// FMP v4 API base (paths are appended).
pub(crate) const DEFAULT_BASE_V4: &str = "https://financialmodelingprep.com/api/v4/";

/// Query parameter carrying the API key.
pub(crate) const API_KEY_PARAM: &str = "apikey";
