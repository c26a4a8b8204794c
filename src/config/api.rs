//! Frankfurter-specific configuration constants and types.

/// Default values for the REST client
pub struct ClientDefaults {
    pub timeout_ms: u64,
}

/// The master configuration struct for the remote rate provider
pub struct FrankfurterConfig {
    /// Service root all endpoint paths are appended to
    pub base_url: &'static str,
    pub client: ClientDefaults,
    /// Length of the historical window requested for the chart, in days
    pub lookback_days: i64,
    /// Local hour after which the provider's daily rates are considered
    /// published. Before this hour the "last update" stamp shows yesterday.
    pub rate_cutoff_hour: u32,
}

pub const FRANKFURTER: FrankfurterConfig = FrankfurterConfig {
    base_url: "https://api.frankfurter.dev/v1",
    client: ClientDefaults { timeout_ms: 5000 },
    lookback_days: 365,
    // Frankfurter publishes ECB reference rates around 16:00 CET.
    rate_cutoff_hour: 16,
};
