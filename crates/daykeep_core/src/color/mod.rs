//! Color value type and resolution/contrast helpers.
//!
//! # Responsibility
//! - Define the plain RGB value type shared by palette, tags and contrast.
//! - Keep every resolution path total: malformed persisted color data must
//!   degrade to a fallback, never fail rendering.

pub mod contrast;
pub mod palette;

/// Plain RGB color with channels in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
    pub const PURPLE: Color = Color::rgb(0.5, 0.0, 0.5);
    pub const ORANGE: Color = Color::rgb(1.0, 0.647, 0.0);
    pub const TEAL: Color = Color::rgb(0.0, 0.5, 0.5);
    pub const PINK: Color = Color::rgb(1.0, 0.753, 0.796);

    /// Builds a color from channel values in `[0.0, 1.0]`.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Formats as uppercase `#RRGGBB`, clamping channels to the unit range.
    pub fn to_hex(self) -> String {
        fn byte(channel: f64) -> u8 {
            (channel.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        format!("#{:02X}{:02X}{:02X}", byte(self.r), byte(self.g), byte(self.b))
    }
}
