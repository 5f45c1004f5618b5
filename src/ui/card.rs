//! Fixed-layout painting of the composed card.
//!
//! The card is painted entirely with primitive shapes and text so the
//! preview and the exported bitmap are the same pixels. Layout is a fixed
//! vertical arrangement: ornament row with the type badge and seasonal mark,
//! the two digit cells, then the content paragraph.

use egui::{Align2, FontId, Painter, Pos2, Rect, Rounding, Sense, Stroke, Vec2};

use crate::services::template::CardFace;
use crate::ui::theme::CardPalette;

/// Logical card height; width follows the form panel.
pub const CARD_HEIGHT: f32 = 300.0;

const CARD_ROUNDING: f32 = 6.0;
const BADGE_HEIGHT: f32 = 22.0;
const BADGE_FONT_SIZE: f32 = 12.0;
const MIN_BADGE_WIDTH: f32 = 96.0;
const CRESCENT_RADIUS: f32 = 22.0;
const DIGIT_CELL_SIZE: Vec2 = Vec2::new(64.0, 84.0);
const DIGIT_CELL_GAP: f32 = 8.0;
const DIGIT_ROW_TOP: f32 = 110.0;
const DIGIT_FONT_SIZE: f32 = 44.0;
const BODY_TOP: f32 = 210.0;
const BODY_FONT_SIZE: f32 = 15.0;
const BODY_SIDE_PADDING: f32 = 24.0;
const LANTERN_SIZE: Vec2 = Vec2::new(34.0, 64.0);

/// Paint the card and return the rectangle it occupies on screen.
///
/// The returned rect is the capture region for export; the caller records it
/// each frame.
pub fn render_card(ui: &mut egui::Ui, face: &CardFace, palette: &CardPalette) -> Rect {
    let size = egui::vec2(ui.available_width(), CARD_HEIGHT);
    let (rect, _response) = ui.allocate_exact_size(size, Sense::hover());
    let painter = ui.painter_at(rect);

    painter.rect(
        rect,
        Rounding::from(CARD_ROUNDING),
        palette.card_background,
        Stroke::new(1.0, palette.card_border),
    );

    // Ornamental lanterns on both sides of the header
    paint_lantern(
        &painter,
        Rect::from_min_size(
            egui::pos2(rect.left() + 14.0, rect.top() + 10.0),
            LANTERN_SIZE,
        ),
        palette,
    );
    paint_lantern(
        &painter,
        Rect::from_min_size(
            egui::pos2(rect.right() - 14.0 - LANTERN_SIZE.x, rect.top() + 10.0),
            LANTERN_SIZE,
        ),
        palette,
    );

    // Type badge, rounded only at the bottom so it hangs off the top edge.
    // Painted even when the label is empty, matching the live template.
    let badge_galley = painter.layout_no_wrap(
        face.badge.clone(),
        FontId::proportional(BADGE_FONT_SIZE),
        palette.badge_text,
    );
    let badge_width = (badge_galley.size().x + 24.0).max(MIN_BADGE_WIDTH);
    let badge_rect = Rect::from_min_size(
        egui::pos2(rect.center().x - badge_width / 2.0, rect.top()),
        egui::vec2(badge_width, BADGE_HEIGHT),
    );
    painter.rect_filled(
        badge_rect,
        Rounding {
            nw: 0.0,
            ne: 0.0,
            sw: 6.0,
            se: 6.0,
        },
        palette.gold,
    );
    painter.galley(
        badge_rect.center() - badge_galley.size() / 2.0,
        badge_galley,
        palette.badge_text,
    );

    // Seasonal crescent mark below the badge
    paint_crescent(
        &painter,
        egui::pos2(rect.center().x, badge_rect.bottom() + 38.0),
        CRESCENT_RADIUS,
        palette,
    );

    // Two-cell numeric display
    for (cell, digit) in digit_cell_rects(rect).iter().zip(face.digits) {
        painter.rect_filled(*cell, Rounding::from(4.0), palette.gold);
        painter.text(
            cell.center(),
            Align2::CENTER_CENTER,
            digit,
            FontId::monospace(DIGIT_FONT_SIZE),
            palette.digit_text,
        );
    }

    // Content paragraph, centered and wrapped
    let wrap_width = rect.width() - 2.0 * BODY_SIDE_PADDING;
    let mut job = egui::text::LayoutJob::simple(
        face.body.clone(),
        FontId::proportional(BODY_FONT_SIZE),
        palette.gold,
        wrap_width,
    );
    job.halign = egui::Align::Center;
    let body_galley = ui.fonts(|fonts| fonts.layout_job(job));
    painter.galley(
        egui::pos2(rect.center().x, rect.top() + BODY_TOP),
        body_galley,
        palette.gold,
    );

    rect
}

/// The two digit-cell rectangles, centered as a pair.
pub fn digit_cell_rects(card: Rect) -> [Rect; 2] {
    let top = card.top() + DIGIT_ROW_TOP;
    let left = card.center().x - DIGIT_CELL_GAP / 2.0 - DIGIT_CELL_SIZE.x;
    let first = Rect::from_min_size(egui::pos2(left, top), DIGIT_CELL_SIZE);
    let second = first.translate(egui::vec2(DIGIT_CELL_SIZE.x + DIGIT_CELL_GAP, 0.0));
    [first, second]
}

fn paint_lantern(painter: &Painter, rect: Rect, palette: &CardPalette) {
    let center_x = rect.center().x;

    // Hanging ring
    painter.circle_stroke(
        egui::pos2(center_x, rect.top() + 4.0),
        3.5,
        Stroke::new(1.5, palette.deep_gold),
    );

    // Cap
    let cap = Rect::from_center_size(
        egui::pos2(center_x, rect.top() + 11.0),
        egui::vec2(rect.width() * 0.45, 5.0),
    );
    painter.rect_filled(cap, Rounding::from(2.0), palette.deep_gold);

    // Body
    let body = Rect::from_min_max(
        egui::pos2(rect.left(), rect.top() + 14.0),
        egui::pos2(rect.right(), rect.bottom() - 8.0),
    );
    painter.rect_filled(body, Rounding::from(6.0), palette.gold);

    // Glass panes
    let pane_top = body.top() + 6.0;
    let pane_bottom = body.bottom() - 6.0;
    for fraction in [0.3, 0.5, 0.7] {
        let x = body.left() + body.width() * fraction;
        painter.line_segment(
            [egui::pos2(x, pane_top), egui::pos2(x, pane_bottom)],
            Stroke::new(1.0, palette.card_background),
        );
    }

    // Base
    let base = Rect::from_center_size(
        egui::pos2(center_x, rect.bottom() - 4.0),
        egui::vec2(rect.width() * 0.35, 5.0),
    );
    painter.rect_filled(base, Rounding::from(2.0), palette.deep_gold);
}

fn paint_crescent(painter: &Painter, center: Pos2, radius: f32, palette: &CardPalette) {
    painter.circle_filled(center, radius, palette.gold);
    // Bite the card background out of the disc to leave a crescent
    painter.circle_filled(
        center + egui::vec2(radius * 0.42, -radius * 0.12),
        radius * 0.82,
        palette.card_background,
    );
    // Companion star
    painter.circle_filled(
        center + egui::vec2(radius * 0.95, -radius * 0.85),
        radius * 0.16,
        palette.gold,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::CardPalette;

    #[test]
    fn digit_cells_sit_symmetrically_around_the_card_center() {
        let card = Rect::from_min_size(Pos2::ZERO, egui::vec2(400.0, CARD_HEIGHT));
        let [first, second] = digit_cell_rects(card);

        assert!((second.left() - first.right() - DIGIT_CELL_GAP).abs() < 0.001);
        let pair_center = (first.left() + second.right()) / 2.0;
        assert!((pair_center - card.center().x).abs() < 0.001);
        assert_eq!(first.size(), DIGIT_CELL_SIZE);
        assert_eq!(second.size(), DIGIT_CELL_SIZE);
    }

    #[test]
    fn renders_markup_shaped_content_verbatim_without_panic() {
        let face = CardFace {
            badge: String::new(),
            digits: ['0', '0'],
            body: "<script>alert('iftar')</script>".to_string(),
        };

        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let rect = render_card(ui, &face, &CardPalette::default());
                assert_eq!(rect.height(), CARD_HEIGHT);
            });
        });
    }

    #[test]
    fn card_spans_the_available_width() {
        let face = CardFace {
            badge: "Countdown".to_string(),
            digits: ['2', '7'],
            body: String::new(),
        };

        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let available = ui.available_width();
                let rect = render_card(ui, &face, &CardPalette::default());
                assert!((rect.width() - available).abs() < 0.001);
            });
        });
    }
}
