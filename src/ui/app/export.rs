//! The app-side half of the snapshot exporter: ask the viewport for a
//! screenshot when the user hits Download, then crop, scale, and write the
//! PNG when the event arrives on a later frame.

use chrono::Local;

use super::state::PendingExport;
use super::StudioApp;
use crate::services::export;

impl StudioApp {
    /// Start an export of the current card region.
    ///
    /// A no-op when the card has not been rendered yet, or when the user
    /// cancels the save dialog.
    pub(super) fn request_card_export(&mut self, ctx: &egui::Context) {
        let Some(card_rect) = self.state.card_rect else {
            log::debug!("Download requested before the card was rendered; ignoring");
            return;
        };

        let file_name = export::export_file_name(Local::now().date_naive());
        let Some(path) = rfd::FileDialog::new()
            .set_title("Download Image")
            .set_file_name(&file_name)
            .add_filter("PNG image", &["png"])
            .save_file()
        else {
            return;
        };

        self.state.pending_export = Some(PendingExport { path, card_rect });
        ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot);
    }

    /// Consume a screenshot event and finish the pending export, if any.
    pub(super) fn handle_screenshot_events(&mut self, ctx: &egui::Context) {
        if self.state.pending_export.is_none() {
            return;
        }

        let screenshot = ctx.input(|input| {
            input.events.iter().find_map(|event| match event {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });
        let Some(image) = screenshot else {
            return;
        };
        let pending = self
            .state
            .pending_export
            .take()
            .expect("pending export just checked");

        let card = image.region(&pending.card_rect, Some(ctx.pixels_per_point()));
        let rgba: Vec<u8> = card
            .pixels
            .iter()
            .flat_map(|pixel| pixel.to_array())
            .collect();
        let target =
            export::oversampled_size(pending.card_rect.width(), pending.card_rect.height());

        match export::write_card_png(&pending.path, &rgba, card.size, target) {
            Ok(()) => log::info!("Exported card image to {}", pending.path.display()),
            Err(err) => log::error!("Failed to export card image: {err:#}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn pending_export_consumes_the_screenshot_and_writes_the_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("card.png");

        let card_rect = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(40.0, 30.0));
        let mut app = StudioApp::default();
        app.state.card_rect = Some(card_rect);
        app.state.pending_export = Some(PendingExport {
            path: path.clone(),
            card_rect,
        });

        // Synthetic viewport screenshot covering the card region
        let image = Arc::new(egui::ColorImage::new(
            [80, 60],
            egui::Color32::from_rgb(212, 158, 70),
        ));
        let mut input = egui::RawInput::default();
        input.events.push(egui::Event::Screenshot {
            viewport_id: egui::ViewportId::ROOT,
            image,
        });

        let ctx = egui::Context::default();
        let _ = ctx.run(input, |ctx| app.handle_screenshot_events(ctx));

        assert!(app.state.pending_export.is_none());
        let written = image::open(&path).unwrap();
        assert_eq!(written.width(), 400);
        assert_eq!(written.height(), 300);
    }

    #[test]
    fn frames_without_a_screenshot_leave_the_export_pending() {
        let card_rect = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(40.0, 30.0));
        let mut app = StudioApp::default();
        app.state.card_rect = Some(card_rect);
        app.state.pending_export = Some(PendingExport {
            path: std::path::PathBuf::from("unused.png"),
            card_rect,
        });

        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            app.handle_screenshot_events(ctx);
        });

        assert!(app.state.pending_export.is_some());
    }
}
