//! Theme module for the studio window.
//!
//! Defines the shell colors applied to the egui context and the fixed
//! seasonal palette the card is painted with.

use egui::Color32;

/// Colors for the form shell around the card.
#[derive(Debug, Clone)]
pub struct StudioTheme {
    /// Window background behind the form panel
    pub app_background: Color32,

    /// Form panel background
    pub panel_background: Color32,

    /// Primary text color
    pub text_primary: Color32,

    /// Field label color
    pub text_secondary: Color32,

    /// Download button fill
    pub accent: Color32,

    /// Download button label color
    pub accent_text: Color32,
}

impl StudioTheme {
    pub fn light() -> Self {
        Self {
            app_background: Color32::from_rgb(243, 244, 246),
            panel_background: Color32::from_rgb(255, 255, 255),
            text_primary: Color32::from_rgb(31, 41, 55),
            text_secondary: Color32::from_rgb(55, 65, 81),
            accent: Color32::from_rgb(59, 130, 246),
            accent_text: Color32::WHITE,
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::light();

        visuals.window_fill = self.panel_background;
        visuals.panel_fill = self.app_background;
        visuals.extreme_bg_color = self.panel_background;

        visuals.widgets.noninteractive.bg_fill = self.panel_background;
        visuals.widgets.inactive.bg_fill = self.panel_background;

        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}

/// The card's fixed seasonal palette.
///
/// These values come from the card design and are not user-configurable:
/// gold `#D49E46`, deep gold `#BF8B3F`, and a pale cream background.
#[derive(Debug, Clone)]
pub struct CardPalette {
    pub gold: Color32,
    pub deep_gold: Color32,
    pub card_background: Color32,
    pub card_border: Color32,
    pub digit_text: Color32,
    pub badge_text: Color32,
}

impl Default for CardPalette {
    fn default() -> Self {
        Self {
            gold: Color32::from_rgb(212, 158, 70),
            deep_gold: Color32::from_rgb(191, 139, 63),
            card_background: Color32::from_rgb(254, 253, 246),
            card_border: Color32::from_rgb(235, 230, 210),
            digit_text: Color32::WHITE,
            badge_text: Color32::WHITE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_uses_a_neutral_shell() {
        let theme = StudioTheme::light();
        assert_eq!(theme.app_background, Color32::from_rgb(243, 244, 246));
        assert_eq!(theme.panel_background, Color32::WHITE);
    }

    #[test]
    fn card_palette_matches_the_design_gold() {
        let palette = CardPalette::default();
        assert_eq!(palette.gold, Color32::from_rgb(212, 158, 70));
        assert_eq!(palette.deep_gold, Color32::from_rgb(191, 139, 63));
    }

    #[test]
    fn applying_the_theme_sets_light_visuals() {
        let ctx = egui::Context::default();
        StudioTheme::light().apply_to_context(&ctx);
        assert!(!ctx.style().visuals.dark_mode);
    }
}
