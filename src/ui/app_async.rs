use chrono::Local;
use eframe::egui;

use crate::commands::{ContentView, ConversionView, ExchangeError};
use crate::ui::app::FxLensApp;
use crate::ui::config::UI_TEXT;
use crate::utils::time_utils::last_update_stamp;

impl FxLensApp {
    /// Polls the in-flight exchange job, if any, and applies the outcome on
    /// the egui thread: numeric display first, then the chart refresh.
    pub(super) fn poll_exchange(&mut self, ctx: &egui::Context) {
        let Some(promise) = self.exchange_job.take() else {
            return;
        };

        match promise.try_take() {
            Ok(Ok(outcome)) => {
                log::info!(
                    "exchanged {} -> {} (rate {} on {})",
                    outcome.source,
                    outcome.result,
                    outcome.rate.rate(),
                    outcome.rate.date()
                );

                self.conversion = Some(ConversionView {
                    source: outcome.source,
                    result: outcome.result,
                    stamp: last_update_stamp(Local::now(), self.config.rate_cutoff_hour),
                });
                self.content = ContentView::Chart;
                self.animator.render(&outcome.series, outcome.spec, ctx);
            }
            Ok(Err(err)) => {
                log::error!("exchange failed: {}", err);
                // A failed refresh leaves the previous chart and result
                // visible; only the error dialog is added.
                self.last_error = Some(match err {
                    ExchangeError::InvalidInput => UI_TEXT.invalid_input.to_string(),
                    other => other.to_string(),
                });
            }
            Err(still_running) => {
                self.exchange_job = Some(still_running);
                ctx.request_repaint();
            }
        }
    }
}
