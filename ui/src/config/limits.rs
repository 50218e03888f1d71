/// Global bounds for configuration values checked at startup

/// Longest catalog response cache window (one day)
pub const MAX_CACHE_DURATION_MINUTES: u64 = 1440;

/// Shortest reader wait bound
pub const MIN_READ_TIMEOUT_SECS: u64 = 1;

/// Longest reader wait bound; readers sit on the request path
pub const MAX_READ_TIMEOUT_SECS: u64 = 60;

/// Shortest catalog request timeout
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Longest catalog request timeout (5 minutes)
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Color modes understood by the switcher script
pub const SUPPORTED_COLOR_MODES: [&str; 3] = ["light", "dark", "auto"];
