use eframe::egui::{self, Color32, RichText};
use rfd::FileDialog;

use super::DocxUploaderApp;
use crate::upload::MAX_UPLOAD_MB;

const SUCCESS_GREEN: Color32 = Color32::from_rgb(0, 180, 0);
const ERROR_RED: Color32 = Color32::from_rgb(220, 50, 50);

impl DocxUploaderApp {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(20.0);
                ui.vertical_centered(|ui| {
                    ui.heading("Customer Details Analyser");
                    ui.add_space(5.0);
                    let dim = ui.visuals().text_color().gamma_multiply(0.7);
                    ui.label(
                        RichText::new("Upload a .docx and send it to the analysis endpoint.")
                            .color(dim),
                    );
                    ui.label(
                        RichText::new(format!("Max file size: {MAX_UPLOAD_MB} MB · Allowed: .docx"))
                            .color(dim),
                    );
                });

                ui.add_space(20.0);
                self.render_dropzone(ui);
                self.render_selection(ui);
                self.render_error(ui);
                self.render_actions(ui);
                self.render_result(ui);
                ui.add_space(20.0);
            });
        });
    }

    fn render_dropzone(&mut self, ui: &mut egui::Ui) {
        let (stroke, fill) = if self.state.drag_active {
            (
                egui::Stroke::new(2.0, ui.visuals().selection.stroke.color),
                ui.visuals().extreme_bg_color,
            )
        } else {
            (
                egui::Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color),
                ui.visuals().faint_bg_color,
            )
        };

        let response = egui::Frame::none()
            .stroke(stroke)
            .fill(fill)
            .rounding(egui::Rounding::same(8.0))
            .inner_margin(egui::Margin::symmetric(16.0, 24.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("⬆").size(28.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new("Click to choose or drag & drop a .docx here").strong());
                    ui.label(
                        RichText::new(format!("Up to {MAX_UPLOAD_MB} MB"))
                            .color(ui.visuals().text_color().gamma_multiply(0.7)),
                    );
                });
            })
            .response
            .interact(egui::Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand);

        if response.clicked() {
            if let Some(path) = FileDialog::new()
                .add_filter("Word document", &["docx"])
                .pick_file()
            {
                self.select_path(path);
            }
        }
    }

    fn render_selection(&mut self, ui: &mut egui::Ui) {
        let Some(file) = self.state.selected.clone() else {
            return;
        };
        ui.add_space(10.0);
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&file.name).strong());
                ui.label(
                    RichText::new(file.size_human())
                        .color(ui.visuals().text_color().gamma_multiply(0.7)),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Remove").clicked() {
                        self.clear_file();
                    }
                });
            });
        });
    }

    fn render_error(&self, ui: &mut egui::Ui) {
        if let Some(error) = &self.state.error_message {
            ui.add_space(10.0);
            ui.colored_label(ERROR_RED, format!("⚠ {error}"));
        }
    }

    fn render_actions(&mut self, ui: &mut egui::Ui) {
        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            let can_send = self.state.selected.is_some() && !self.state.is_loading();
            ui.add_enabled_ui(can_send, |ui| {
                let label = if self.state.is_loading() {
                    "⏳ Uploading…"
                } else {
                    "Send"
                };
                let button = egui::Button::new(label).min_size(egui::vec2(160.0, 36.0));
                if ui.add(button).clicked() {
                    self.submit();
                }
            });
            if self.state.is_loading() {
                ui.add_space(4.0);
                ui.spinner();
            }
        });
    }

    fn render_result(&self, ui: &mut egui::Ui) {
        let Some(result) = &self.state.last_result else {
            return;
        };
        ui.add_space(12.0);
        ui.colored_label(SUCCESS_GREEN, "✅ Upload successful");
        ui.add_space(6.0);
        let pretty = serde_json::to_string_pretty(result).unwrap_or_default();
        egui::ScrollArea::vertical().max_height(220.0).show(ui, |ui| {
            egui::Frame::none()
                .fill(ui.style().visuals.extreme_bg_color)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.add_space(8.0);
                    ui.monospace(pretty);
                    ui.add_space(8.0);
                });
        });
    }
}
