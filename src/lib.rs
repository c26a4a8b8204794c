// Core modules
pub mod chart;
pub mod commands;
pub mod config;
pub mod data;
pub mod domain;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use chart::ChartAnimator;
pub use commands::{CommandId, CommandRegistry, run_exchange};
pub use config::AppConfig;
pub use data::{FrankfurterClient, HttpJsonFetcher};
pub use domain::{Currency, ExchangeRate, ExchangeRateTimeSeries, Money};
pub use ui::FxLensApp;

use std::sync::Arc;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Override the rate provider's base URL
    #[arg(long)]
    pub api_base: Option<String>,

    /// Milliseconds between animated chart points
    #[arg(long)]
    pub animation_interval_ms: Option<u64>,

    /// Length of the historical chart window in days
    #[arg(long)]
    pub lookback_days: Option<i64>,

    /// Local hour after which today's rates count as published
    #[arg(long)]
    pub rate_cutoff_hour: Option<u32>,
}

impl Cli {
    /// Compiled-in defaults with any command-line overrides applied.
    pub fn to_config(&self) -> AppConfig {
        let mut config = AppConfig::default();
        if let Some(base) = &self.api_base {
            config.api_base_url = base.clone();
        }
        if let Some(interval) = self.animation_interval_ms {
            config.animation_interval_ms = interval;
        }
        if let Some(days) = self.lookback_days {
            config.lookback_days = days;
        }
        if let Some(hour) = self.rate_cutoff_hour {
            config.rate_cutoff_hour = hour;
        }
        config
    }
}

/// Main application entry point - creates the GUI app.
/// This is the public API for the binary to call.
pub fn run_app(
    cc: &eframe::CreationContext,
    currencies: Vec<Currency>,
    client: Arc<FrankfurterClient>,
    config: AppConfig,
) -> Box<dyn eframe::App> {
    let app = ui::FxLensApp::new(cc, currencies, client, config);
    Box::new(app)
}
