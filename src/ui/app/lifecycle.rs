use super::StudioApp;
use crate::models::selection::{Day, DisplayType};
use crate::services::template;
use crate::ui::card;
use crate::ui::select::OptionSelect;

const FORM_MAX_WIDTH: f32 = 440.0;
const FIELD_SPACING: f32 = 12.0;

impl StudioApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let app = Self::default();
        app.theme.apply_to_context(&cc.egui_ctx);
        log::info!("Ramadan Studio ready");
        app
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Consume a screenshot requested on an earlier frame before painting
        self.handle_screenshot_events(ctx);

        let background = egui::Frame::none()
            .fill(self.theme.app_background)
            .inner_margin(egui::Margin::same(16.0));

        egui::CentralPanel::default()
            .frame(background)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(FORM_MAX_WIDTH);
                        self.render_form(ui);
                    });
                });
            });
    }

    fn render_form(&mut self, ui: &mut egui::Ui) {
        let panel = egui::Frame::none()
            .fill(self.theme.panel_background)
            .rounding(egui::Rounding::from(10.0))
            .inner_margin(egui::Margin::same(24.0))
            .shadow(egui::epaint::Shadow {
                offset: egui::vec2(0.0, 2.0),
                blur: 12.0,
                spread: 0.0,
                color: egui::Color32::from_black_alpha(25),
            });

        panel.show(ui, |ui| {
            self.field_label(ui, "Day:");
            let day_choice = OptionSelect::new(
                "day_select",
                "Day",
                self.state.selection.day.as_ref(),
                &Day::ALL,
                &mut self.state.day_open,
            )
            .show(ui);
            if let Some(day) = day_choice {
                self.state.selection.day = Some(day);
            }

            ui.add_space(FIELD_SPACING);
            self.field_label(ui, "Type:");
            let type_choice = OptionSelect::new(
                "type_select",
                "Type",
                self.state.selection.display_type.as_ref(),
                &DisplayType::ALL,
                &mut self.state.type_open,
            )
            .show(ui);
            if let Some(display_type) = type_choice {
                self.state.selection.display_type = Some(display_type);
            }

            ui.add_space(FIELD_SPACING);
            self.field_label(ui, "Content:");
            ui.add(
                egui::TextEdit::multiline(&mut self.state.selection.content)
                    .hint_text("Enter content")
                    .desired_rows(6)
                    .desired_width(f32::INFINITY),
            );

            ui.add_space(18.0);

            // Live preview; the rect is the capture region for export
            let face = template::compose(&self.state.selection);
            let card_rect = card::render_card(ui, &face, &self.palette);
            self.state.card_rect = Some(card_rect);

            ui.add_space(14.0);
            let download = ui.add_sized(
                [ui.available_width(), 36.0],
                egui::Button::new(
                    egui::RichText::new("Download Image")
                        .color(self.theme.accent_text)
                        .strong(),
                )
                .fill(self.theme.accent)
                .rounding(egui::Rounding::from(8.0)),
            );
            if download.clicked() {
                self.request_card_export(ui.ctx());
            }
        });
    }

    fn field_label(&self, ui: &mut egui::Ui, text: &str) {
        ui.label(egui::RichText::new(text).color(self.theme.text_secondary));
        ui.add_space(4.0);
    }
}
