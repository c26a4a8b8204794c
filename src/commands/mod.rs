// Command dispatch: UI trigger sites invoke behavior by identifier so the
// swap command can re-run the exchange without a direct reference to it.
pub mod context;
pub mod exchange;
pub mod registry;
pub mod show_info;
pub mod swap;

pub use context::{CommandContext, ContentView, ConversionView, ExchangeInputs};
pub use exchange::{ExchangeCommand, ExchangeError, ExchangeOutcome, run_exchange};
pub use registry::{Command, CommandError, CommandId, CommandRegistry};
pub use show_info::ShowInfoCommand;
pub use swap::SwapCommand;

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::config::AppConfig;
    use crate::data::fetch::{FetchError, JsonFetcher};
    use crate::data::frankfurter::FrankfurterClient;
    use crate::domain::Currency;

    use super::context::{CommandContext, ContentView, ConversionView, ExchangeInputs};
    use super::exchange::ExchangeJob;

    /// Fetcher double that counts calls and replays canned bodies in order.
    pub(crate) struct SpyFetcher {
        calls: AtomicUsize,
        responses: std::sync::Mutex<Vec<String>>,
    }

    impl SpyFetcher {
        pub(crate) fn new(responses: Vec<&str>) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                responses: std::sync::Mutex::new(
                    responses.into_iter().rev().map(String::from).collect(),
                ),
            })
        }

        pub(crate) fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl JsonFetcher for SpyFetcher {
        fn fetch(&self, _url: &str) -> Result<String, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses
                .lock()
                .expect("spy lock")
                .pop()
                .ok_or(FetchError::Status(404))
        }
    }

    /// Owns everything a `CommandContext` borrows, so command tests can
    /// build a context without the GUI.
    pub(crate) struct ContextFixture {
        pub currencies: Vec<Currency>,
        pub inputs: ExchangeInputs,
        pub content: ContentView,
        pub conversion: Option<ConversionView>,
        pub exchange_job: Option<ExchangeJob>,
        pub client: Arc<FrankfurterClient>,
        pub config: AppConfig,
    }

    impl ContextFixture {
        pub(crate) fn new(fetcher: Arc<SpyFetcher>) -> Self {
            Self {
                currencies: vec![
                    Currency::new("EUR", "Euro"),
                    Currency::new("USD", "United States Dollar"),
                    Currency::new("GBP", "British Pound"),
                ],
                inputs: ExchangeInputs::default(),
                content: ContentView::Info,
                conversion: None,
                exchange_job: None,
                client: Arc::new(FrankfurterClient::new(fetcher, "http://localhost")),
                config: AppConfig::default(),
            }
        }

        pub(crate) fn context(&mut self) -> CommandContext<'_> {
            CommandContext {
                currencies: &self.currencies,
                inputs: &mut self.inputs,
                content: &mut self.content,
                conversion: &mut self.conversion,
                exchange_job: &mut self.exchange_job,
                client: &self.client,
                config: &self.config,
            }
        }
    }
}
