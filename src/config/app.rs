use crate::config::{CHART, FRANKFURTER};

/// Runtime configuration: the compiled-in defaults from [`FRANKFURTER`] and
/// [`CHART`], optionally overridden on the command line.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub animation_interval_ms: u64,
    pub lookback_days: i64,
    pub rate_cutoff_hour: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: FRANKFURTER.base_url.to_string(),
            animation_interval_ms: CHART.animation_interval_ms,
            lookback_days: FRANKFURTER.lookback_days,
            rate_cutoff_hour: FRANKFURTER.rate_cutoff_hour,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_come_from_constants() {
        let config = AppConfig::default();

        assert_eq!(config.api_base_url, FRANKFURTER.base_url);
        assert_eq!(config.lookback_days, 365);
        assert_eq!(config.rate_cutoff_hour, 16);
        assert_eq!(config.animation_interval_ms, CHART.animation_interval_ms);
    }
}
