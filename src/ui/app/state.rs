use std::path::PathBuf;

use crate::models::selection::Selection;

/// An export that has asked the viewport for a screenshot and is waiting for
/// the event to come back on a later frame.
#[derive(Debug, Clone)]
pub struct PendingExport {
    /// Destination chosen in the save dialog
    pub path: PathBuf,
    /// Card region recorded at the moment of the request
    pub card_rect: egui::Rect,
}

/// Everything the app mutates between frames.
pub struct AppState {
    /// The (day, type, content) triple driving the card
    pub selection: Selection,
    /// Open flag of the day dropdown; independent of the type dropdown
    pub day_open: bool,
    /// Open flag of the type dropdown; independent of the day dropdown
    pub type_open: bool,
    /// Card region painted last frame; `None` until the first render,
    /// which makes an early export request a no-op
    pub card_rect: Option<egui::Rect>,
    /// In-flight export, if any
    pub pending_export: Option<PendingExport>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            selection: Selection::default(),
            day_open: false,
            type_open: false,
            card_rect: None,
            pending_export: None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_has_no_capture_target() {
        let state = AppState::new();
        assert!(state.card_rect.is_none());
        assert!(state.pending_export.is_none());
        assert_eq!(state.selection, Selection::default());
        assert!(!state.day_open);
        assert!(!state.type_open);
    }
}
