use eframe::{Frame, egui};
use std::sync::Arc;

use crate::chart::ChartAnimator;
use crate::commands::{
    CommandContext, CommandError, CommandId, CommandRegistry, ContentView, ConversionView,
    ExchangeCommand, ExchangeError, ExchangeInputs, ShowInfoCommand, SwapCommand,
};
use crate::commands::exchange::ExchangeJob;
use crate::config::AppConfig;
use crate::data::frankfurter::FrankfurterClient;
use crate::domain::Currency;
use crate::ui::config::UI_TEXT;
use crate::ui::utils::setup_custom_visuals;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

pub struct FxLensApp {
    pub(super) currencies: Vec<Currency>,
    pub(super) inputs: ExchangeInputs,
    pub(super) content: ContentView,
    pub(super) conversion: Option<ConversionView>,
    pub(super) last_error: Option<String>,
    pub(super) exchange_job: Option<ExchangeJob>,
    pub(super) animator: ChartAnimator,
    pub(super) registry: CommandRegistry,
    pub(super) client: Arc<FrankfurterClient>,
    pub(super) config: AppConfig,
}

impl FxLensApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        currencies: Vec<Currency>,
        client: Arc<FrankfurterClient>,
        config: AppConfig,
    ) -> Self {
        setup_custom_visuals(&cc.egui_ctx);

        let mut registry = CommandRegistry::new();
        registry.register(CommandId::ExchangeMoney, Arc::new(ExchangeCommand));
        registry.register(CommandId::Swap, Arc::new(SwapCommand));
        registry.register(CommandId::ShowInfo, Arc::new(ShowInfoCommand));

        let inputs = ExchangeInputs {
            target_idx: 1.min(currencies.len().saturating_sub(1)),
            ..ExchangeInputs::default()
        };

        let animator = ChartAnimator::new(config.animation_interval_ms);

        Self {
            currencies,
            inputs,
            // The app opens on the info view, like running "show info" at
            // startup.
            content: ContentView::Info,
            conversion: None,
            last_error: None,
            exchange_job: None,
            animator,
            registry,
            client,
            config,
        }
    }

    /// Runs a command against the current state and maps any failure to the
    /// user-facing message. This is the single place that decides what the
    /// user sees when a command fails; lower layers never touch the UI.
    pub(super) fn dispatch(&mut self, id: CommandId) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_command_dispatch {
            log::info!("dispatching \"{}\"", id);
        }

        let mut ctx = CommandContext {
            currencies: &self.currencies,
            inputs: &mut self.inputs,
            content: &mut self.content,
            conversion: &mut self.conversion,
            exchange_job: &mut self.exchange_job,
            client: &self.client,
            config: &self.config,
        };

        match self.registry.invoke(id, &mut ctx) {
            Ok(()) => {}
            Err(CommandError::Exchange(ExchangeError::InvalidInput)) => {
                self.last_error = Some(UI_TEXT.invalid_input.to_string());
            }
            Err(CommandError::Exchange(err)) => {
                log::error!("command \"{}\" failed: {}", id, err);
                self.last_error = Some(err.to_string());
            }
            Err(CommandError::Unknown(missing)) => {
                // Missing registration is a programmer error, not a user one.
                log::error!("no command registered for \"{}\"", missing);
                debug_assert!(false, "no command registered for \"{missing}\"");
            }
        }
    }

    pub(super) fn is_fetching(&self) -> bool {
        self.exchange_job.is_some()
    }
}

impl eframe::App for FxLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.poll_exchange(ctx);

        self.render_input_panel(ctx);
        self.render_money_panel(ctx);
        self.render_central_panel(ctx);
        self.render_error_window(ctx);
    }
}
