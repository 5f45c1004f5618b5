mod export;
mod lifecycle;
mod state;

use self::state::AppState;
use crate::ui::theme::{CardPalette, StudioTheme};

/// The single-window card studio.
pub struct StudioApp {
    /// Form state and the transient export bookkeeping
    state: AppState,
    /// Shell colors applied to the egui context
    theme: StudioTheme,
    /// Fixed seasonal palette of the card itself
    palette: CardPalette,
}

impl Default for StudioApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
            theme: StudioTheme::light(),
            palette: CardPalette::default(),
        }
    }
}

impl eframe::App for StudioApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }
}
