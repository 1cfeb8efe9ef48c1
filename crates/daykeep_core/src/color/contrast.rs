//! WCAG-style contrast resolution for legible foreground text.
//!
//! # Responsibility
//! - Compute relative luminance and contrast ratios.
//! - Pick black or white foreground text for an arbitrary background.
//!
//! # Invariants
//! - Every function here is pure, deterministic and total over RGB inputs;
//!   there is no failure path.
//! - The decision threshold is a parameter, not a constant: the product has
//!   shipped with both AA (4.5) and AAA (7.0) call sites.

use crate::color::Color;

/// WCAG AA body-text contrast threshold. The default decision threshold.
pub const WCAG_AA: f64 = 4.5;

/// WCAG AAA body-text contrast threshold.
pub const WCAG_AAA: f64 = 7.0;

/// Foreground text color choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Foreground {
    Black,
    White,
}

impl Foreground {
    /// The concrete color value for this choice.
    pub fn color(self) -> Color {
        match self {
            Foreground::Black => Color::BLACK,
            Foreground::White => Color::WHITE,
        }
    }
}

/// WCAG relative luminance of a color.
///
/// Each channel `c` is linearized as `c / 12.92` when `c <= 0.03928`, else
/// `((c + 0.055) / 1.055)^2.4`, then weighted `0.2126 / 0.7152 / 0.0722`.
pub fn relative_luminance(color: Color) -> f64 {
    fn linearize(channel: f64) -> f64 {
        if channel <= 0.03928 {
            channel / 12.92
        } else {
            ((channel + 0.055) / 1.055).powf(2.4)
        }
    }
    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

/// WCAG contrast ratio between two luminances: `(max + 0.05) / (min + 0.05)`.
pub fn contrast_ratio(l1: f64, l2: f64) -> f64 {
    let lighter = l1.max(l2);
    let darker = l1.min(l2);
    (lighter + 0.05) / (darker + 0.05)
}

/// Picks black or white foreground text for the given background.
///
/// White wins when its contrast ratio against the background reaches
/// `threshold` and is at least black's ratio; otherwise black is used.
pub fn contrasting_text_color(background: Color, threshold: f64) -> Foreground {
    let background_luminance = relative_luminance(background);
    let white_ratio = contrast_ratio(background_luminance, relative_luminance(Color::WHITE));
    let black_ratio = contrast_ratio(background_luminance, relative_luminance(Color::BLACK));

    if white_ratio >= threshold && white_ratio >= black_ratio {
        Foreground::White
    } else {
        Foreground::Black
    }
}

#[cfg(test)]
mod tests {
    use super::{contrast_ratio, relative_luminance, Color};

    #[test]
    fn luminance_spans_the_unit_range() {
        assert_eq!(relative_luminance(Color::BLACK), 0.0);
        assert!((relative_luminance(Color::WHITE) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn black_on_white_is_maximal_contrast() {
        let ratio = contrast_ratio(
            relative_luminance(Color::BLACK),
            relative_luminance(Color::WHITE),
        );
        assert!((ratio - 21.0).abs() < 1e-6);
    }

    #[test]
    fn contrast_ratio_is_symmetric() {
        assert_eq!(contrast_ratio(0.2, 0.8), contrast_ratio(0.8, 0.2));
    }
}
