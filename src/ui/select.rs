//! Closed-set single-choice dropdown.
//!
//! Unlike `egui::ComboBox`, the open/closed flag is owned by the caller, one
//! flag per instance. Nothing enforces that only one dropdown is open at a
//! time, and the list is dismissed only by the toggle button or a selection.

use egui::{Align, Align2, Color32, FontId, Layout, Rounding, Sense, Stroke};

const BUTTON_HEIGHT: f32 = 32.0;
const BUTTON_ROUNDING: f32 = 6.0;
const MAX_LIST_HEIGHT: f32 = 200.0;

/// A generic dropdown over a closed slice of options.
///
/// `show` returns the chosen option exactly once, on the frame the user
/// clicks it, and collapses the list.
pub struct OptionSelect<'a, T> {
    id: egui::Id,
    label: &'a str,
    selected: Option<&'a T>,
    options: &'a [T],
    open: &'a mut bool,
}

impl<'a, T> OptionSelect<'a, T>
where
    T: std::fmt::Display + Clone + PartialEq,
{
    pub fn new(
        id_source: impl std::hash::Hash,
        label: &'a str,
        selected: Option<&'a T>,
        options: &'a [T],
        open: &'a mut bool,
    ) -> Self {
        Self {
            id: egui::Id::new(id_source),
            label,
            selected,
            options,
            open,
        }
    }

    pub fn show(self, ui: &mut egui::Ui) -> Option<T> {
        let desired = egui::vec2(ui.available_width(), BUTTON_HEIGHT);
        let (rect, response) = ui.allocate_exact_size(desired, Sense::click());

        if response.clicked() {
            *self.open = !*self.open;
        }

        let border = if response.hovered() || *self.open {
            Color32::from_gray(140)
        } else {
            Color32::from_gray(200)
        };
        let painter = ui.painter();
        painter.rect(
            rect,
            Rounding::from(BUTTON_ROUNDING),
            Color32::WHITE,
            Stroke::new(1.0, border),
        );

        let button_text = match self.selected {
            Some(value) => value.to_string(),
            None => format!("Select {}", self.label),
        };
        painter.text(
            egui::pos2(rect.left() + 10.0, rect.center().y),
            Align2::LEFT_CENTER,
            button_text,
            FontId::proportional(14.0),
            Color32::from_gray(20),
        );

        let chevron = if *self.open { "▲" } else { "▼" };
        painter.text(
            egui::pos2(rect.right() - 10.0, rect.center().y),
            Align2::RIGHT_CENTER,
            chevron,
            FontId::proportional(12.0),
            Color32::from_gray(90),
        );

        let mut choice = None;

        // An empty closed set renders as permanently collapsed.
        if *self.open && !self.options.is_empty() {
            let list_pos = egui::pos2(rect.left(), rect.bottom() + 4.0);
            egui::Area::new(self.id.with("options"))
                .order(egui::Order::Foreground)
                .fixed_pos(list_pos)
                .show(ui.ctx(), |area_ui| {
                    egui::Frame::popup(area_ui.style()).show(area_ui, |list_ui| {
                        list_ui.set_min_width(rect.width() - 14.0);
                        egui::ScrollArea::vertical()
                            .max_height(MAX_LIST_HEIGHT)
                            .show(list_ui, |list_ui| {
                                list_ui.with_layout(
                                    Layout::top_down_justified(Align::Min),
                                    |list_ui| {
                                        for option in self.options {
                                            let is_current = self.selected == Some(option);
                                            if list_ui
                                                .selectable_label(is_current, option.to_string())
                                                .clicked()
                                            {
                                                choice = Some(option.clone());
                                            }
                                        }
                                    },
                                );
                            });
                    });
                });
        }

        if choice.is_some() {
            *self.open = false;
        }

        choice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::selection::DisplayType;

    fn run_frame(mut run_ui: impl FnMut(&mut egui::Ui)) {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| run_ui(ui));
        });
    }

    #[test]
    fn empty_options_render_without_reporting_a_choice() {
        run_frame(|ui| {
            let mut open = true;
            let options: [DisplayType; 0] = [];
            let choice = OptionSelect::new("empty", "Type", None, &options, &mut open).show(ui);
            assert!(choice.is_none());
        });
    }

    #[test]
    fn rendering_does_not_consume_the_open_flag() {
        run_frame(|ui| {
            let mut open = true;
            let choice = OptionSelect::new(
                "type",
                "Type",
                Some(&DisplayType::Countdown),
                &DisplayType::ALL,
                &mut open,
            )
            .show(ui);
            // No click happened, so the list stays open and nothing is chosen.
            assert!(choice.is_none());
            assert!(open);
        });
    }

    #[test]
    fn unset_value_renders_the_placeholder_without_panic() {
        run_frame(|ui| {
            let mut open = false;
            let choice =
                OptionSelect::new("day", "Day", None, &DisplayType::ALL, &mut open).show(ui);
            assert!(choice.is_none());
            assert!(!open);
        });
    }
}
