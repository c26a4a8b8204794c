use std::sync::Arc;

use crate::config::AppConfig;
use crate::data::frankfurter::FrankfurterClient;
use crate::domain::{Currency, Money};

use super::exchange::ExchangeJob;

/// What the central panel is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentView {
    /// Static usage notes; shown on startup and via the info command.
    #[default]
    Info,
    /// The animated rate-history chart.
    Chart,
}

/// User selections feeding the exchange command: the raw amount text and
/// the selection *indices* of the source and target currency selectors.
#[derive(Debug, Clone)]
pub struct ExchangeInputs {
    pub amount_text: String,
    pub source_idx: usize,
    pub target_idx: usize,
}

impl Default for ExchangeInputs {
    fn default() -> Self {
        Self {
            amount_text: "1".to_string(),
            source_idx: 0,
            target_idx: 1,
        }
    }
}

/// A completed conversion for the money display, plus the "last update"
/// stamp computed when the result arrived.
#[derive(Debug, Clone)]
pub struct ConversionView {
    pub source: Money,
    pub result: Money,
    pub stamp: String,
}

/// Mutable view of the application state a command may touch. Built fresh
/// by the UI for each dispatch; commands never hold on to it.
pub struct CommandContext<'a> {
    pub currencies: &'a [Currency],
    pub inputs: &'a mut ExchangeInputs,
    pub content: &'a mut ContentView,
    pub conversion: &'a mut Option<ConversionView>,
    pub exchange_job: &'a mut Option<ExchangeJob>,
    pub client: &'a Arc<FrankfurterClient>,
    pub config: &'a AppConfig,
}
