use eframe::egui::{
    Align2, CentralPanel, ComboBox, Context, Frame, RichText, ScrollArea, TextEdit,
    TopBottomPanel, Window,
};
use egui_plot::{AxisHints, HPlacement, Line, Plot, PlotPoints};

use crate::commands::{CommandId, ContentView};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::utils::time_utils::plot_x_to_day;

use super::app::FxLensApp;

impl FxLensApp {
    pub(super) fn render_input_panel(&mut self, ctx: &Context) {
        let mut clicked: Option<CommandId> = None;

        let panel_frame = Frame::new().fill(UI_CONFIG.colors.top_panel);
        TopBottomPanel::top("input_panel")
            .frame(panel_frame)
            .show(ctx, |ui| {
                ui.add_space(8.0);

                if self.currencies.is_empty() {
                    ui.label_error(UI_TEXT.no_currencies);
                    ui.add_space(8.0);
                    return;
                }

                let currencies = &self.currencies;
                let inputs = &mut self.inputs;

                ui.horizontal(|ui| {
                    ui.label(UI_TEXT.amount_label);
                    ui.add(TextEdit::singleline(&mut inputs.amount_text).desired_width(90.0));

                    ui.separator();

                    ui.label(UI_TEXT.from_label);
                    ComboBox::from_id_salt("source_currency").width(230.0).show_index(
                        ui,
                        &mut inputs.source_idx,
                        currencies.len(),
                        |i| {
                            currencies
                                .get(i)
                                .map(|c| c.to_string())
                                .unwrap_or_default()
                        },
                    );

                    ui.label(UI_TEXT.to_label);
                    ComboBox::from_id_salt("target_currency").width(230.0).show_index(
                        ui,
                        &mut inputs.target_idx,
                        currencies.len(),
                        |i| {
                            currencies
                                .get(i)
                                .map(|c| c.to_string())
                                .unwrap_or_default()
                        },
                    );

                    ui.separator();

                    if ui.button(UI_TEXT.convert_button).clicked() {
                        clicked = Some(CommandId::ExchangeMoney);
                    }
                    if ui.button(UI_TEXT.swap_button).clicked() {
                        clicked = Some(CommandId::Swap);
                    }
                    if ui.button(UI_TEXT.info_button).clicked() {
                        clicked = Some(CommandId::ShowInfo);
                    }
                });
                ui.add_space(8.0);
            });

        if let Some(id) = clicked {
            self.dispatch(id);
        }
    }

    pub(super) fn render_money_panel(&mut self, ctx: &Context) {
        let Some(conversion) = self.conversion.clone() else {
            return;
        };

        let panel_frame = Frame::new().fill(UI_CONFIG.colors.top_panel);
        TopBottomPanel::bottom("money_display")
            .frame(panel_frame)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                ui.label(RichText::new(conversion.source.to_string()).size(16.0));
                ui.label(
                    RichText::new(conversion.result.to_string())
                        .size(26.0)
                        .strong()
                        .color(UI_CONFIG.colors.result),
                );
                ui.label_subdued(format!(
                    "{}{}",
                    UI_TEXT.last_update_prefix, conversion.stamp
                ));
                ui.add_space(6.0);
            });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let panel_frame = Frame::new().fill(UI_CONFIG.colors.central_panel);
        CentralPanel::default().frame(panel_frame).show(ctx, |ui| {
            if self.is_fetching() {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.spinner();
                    ui.add_space(12.0);
                    ui.heading(UI_TEXT.fetching_heading);
                    ui.add_space(6.0);
                    ui.label_subdued(UI_TEXT.fetching_hint);
                });
                return;
            }

            match self.content {
                ContentView::Info => Self::render_info(ui),
                ContentView::Chart => self.render_chart(ui),
            }
        });
    }

    fn render_info(ui: &mut eframe::egui::Ui) {
        ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(20.0);
            ui.label_header(UI_TEXT.info_heading);
            ui.add_space(10.0);
            ui.label(UI_TEXT.info_body);
        });
    }

    fn render_chart(&mut self, ui: &mut eframe::egui::Ui) {
        let Some(spec) = self.animator.spec().cloned() else {
            return;
        };
        let points = self.animator.snapshot();

        ui.add_space(6.0);
        ui.label_header(spec.title.clone());
        ui.add_space(4.0);

        let x_axis = AxisHints::new_x()
            .label(spec.x_axis_label.clone())
            .formatter(|mark, _range| plot_x_to_day(mark.value));
        let y_axis = AxisHints::new_y()
            .label(spec.y_axis_label.clone())
            .placement(HPlacement::Left);

        Plot::new("rate_history")
            .custom_x_axes(vec![x_axis])
            .custom_y_axes(vec![y_axis])
            .show(ui, |plot_ui| {
                let line = Line::new(spec.title.clone(), PlotPoints::new(points))
                    .color(UI_CONFIG.colors.rate_line);
                plot_ui.line(line);
            });
    }

    pub(super) fn render_error_window(&mut self, ctx: &Context) {
        let Some(message) = self.last_error.clone() else {
            return;
        };

        Window::new(UI_TEXT.error_title)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                if ui.button(UI_TEXT.error_dismiss).clicked() {
                    self.last_error = None;
                }
            });
    }
}
