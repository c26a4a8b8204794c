#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use std::sync::Arc;

use anyhow::Context as _;
use clap::Parser;
use eframe::NativeOptions;

use fx_lens::config::FRANKFURTER;
use fx_lens::ui::config::UI_TEXT;
use fx_lens::{Cli, Currency, FrankfurterClient, HttpJsonFetcher, run_app};

fn main() -> eframe::Result {
    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    let config = args.to_config();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Client Setup + Currency Load (Blocking)
    let fetcher = Arc::new(HttpJsonFetcher::new(FRANKFURTER.client.timeout_ms));
    let client = Arc::new(FrankfurterClient::new(fetcher, config.api_base_url.clone()));
    let currencies = match load_currencies(&client) {
        Ok(list) => {
            log::info!("loaded {} currencies", list.len());
            list
        }
        Err(err) => {
            // The app still opens; the input panel shows the outage notice.
            log::error!("{:#}", err);
            Vec::new()
        }
    };

    // D. Run Native App
    let options = NativeOptions::default();
    eframe::run_native(
        UI_TEXT.window_title,
        options,
        Box::new(move |cc| Ok(run_app(cc, currencies, client, config))),
    )
}

fn load_currencies(client: &FrankfurterClient) -> anyhow::Result<Vec<Currency>> {
    client
        .currencies()
        .context("loading the currency list from the rate service")
}
