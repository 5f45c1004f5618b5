//! Pure composition of form state into a paint-ready card face.
//!
//! Nothing here touches the UI: [`compose`] turns the current [`Selection`]
//! into the exact strings and characters the card painter displays, so the
//! day-split and fallback rules stay testable without a window.

use crate::models::selection::Selection;

/// Character shown in a digit cell when no day is selected.
pub const DIGIT_FALLBACK: char = '0';

/// Everything the card painter needs, derived from the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFace {
    /// Badge label; empty when no display type is chosen.
    pub badge: String,
    /// The two digit-cell characters as (tens, ones).
    pub digits: [char; 2],
    /// Verbatim user content.
    pub body: String,
}

/// Compose the card face for the current selection.
///
/// Content is carried verbatim: no validation and no escaping happen here,
/// and the text renderer never interprets it as markup.
pub fn compose(selection: &Selection) -> CardFace {
    let digits = match selection.day {
        Some(day) => {
            let (tens, ones) = day.digits();
            [tens, ones]
        }
        None => [DIGIT_FALLBACK, DIGIT_FALLBACK],
    };

    CardFace {
        badge: selection
            .display_type
            .map(|display_type| display_type.label().to_string())
            .unwrap_or_default(),
        digits,
        body: selection.content.clone(),
    }
}
