//! Tint palette and tag color resolution.
//!
//! # Responsibility
//! - Resolve item tint identifiers against the fixed selectable palette.
//! - Resolve tag color strings (named set or `#RRGGBB` hex).
//!
//! # Invariants
//! - Resolution never errors: unknown tints fall back to the palette
//!   default, unknown tag colors fall back to gray.
//! - Palette entries are ordered; the first matching entry wins.

use crate::color::Color;
use once_cell::sync::Lazy;
use regex::Regex;

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("valid hex color regex"));

static BUILTIN_PALETTE: Lazy<Palette> = Lazy::new(Palette::builtin);

/// Tint identifier used when an item is created without an explicit choice.
pub const DEFAULT_TINT: &str = "blue";

/// One selectable palette entry: tint identifier plus resolved color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteEntry {
    pub name: &'static str,
    pub color: Color,
}

/// The fixed selectable tint palette, in picker order.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
    default_color: Color,
}

impl Palette {
    /// Builds a palette from ordered entries and a fallback default.
    pub fn new(entries: Vec<PaletteEntry>, default_color: Color) -> Self {
        Self {
            entries,
            default_color,
        }
    }

    /// The built-in tint palette shipped with the app.
    pub fn builtin() -> Self {
        Self::new(
            vec![
                PaletteEntry {
                    name: "red",
                    color: Color::RED,
                },
                PaletteEntry {
                    name: "orange",
                    color: Color::ORANGE,
                },
                PaletteEntry {
                    name: "yellow",
                    color: Color::YELLOW,
                },
                PaletteEntry {
                    name: "green",
                    color: Color::GREEN,
                },
                PaletteEntry {
                    name: "teal",
                    color: Color::TEAL,
                },
                PaletteEntry {
                    name: "blue",
                    color: Color::BLUE,
                },
                PaletteEntry {
                    name: "purple",
                    color: Color::PURPLE,
                },
                PaletteEntry {
                    name: "pink",
                    color: Color::PINK,
                },
                PaletteEntry {
                    name: "gray",
                    color: Color::GRAY,
                },
            ],
            Color::BLUE,
        )
    }

    /// Ordered palette entries for picker rendering.
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Resolves a tint identifier to its color.
    ///
    /// Returns the first matching entry's color, or the configured default
    /// when the identifier is unknown. Never errors.
    pub fn resolve(&self, identifier: &str) -> Color {
        self.entries
            .iter()
            .find(|entry| entry.name == identifier)
            .map(|entry| entry.color)
            .unwrap_or(self.default_color)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Resolves a tint identifier against the built-in palette.
pub fn resolve_color(identifier: &str) -> Color {
    BUILTIN_PALETTE.resolve(identifier)
}

/// Resolves a tag color string to a renderable color.
///
/// Resolution order:
/// 1. case-insensitive named color
///    (`red|blue|green|yellow|purple|orange|gray|black|white`),
/// 2. 7-character `#RRGGBB` hex (each channel = byte / 255),
/// 3. gray fallback.
pub fn resolve_tag_color(value: &str) -> Color {
    if let Some(named) = named_tag_color(value) {
        return named;
    }
    parse_hex_color(value).unwrap_or(Color::GRAY)
}

fn named_tag_color(value: &str) -> Option<Color> {
    match value.to_ascii_lowercase().as_str() {
        "red" => Some(Color::RED),
        "blue" => Some(Color::BLUE),
        "green" => Some(Color::GREEN),
        "yellow" => Some(Color::YELLOW),
        "purple" => Some(Color::PURPLE),
        "orange" => Some(Color::ORANGE),
        "gray" => Some(Color::GRAY),
        "black" => Some(Color::BLACK),
        "white" => Some(Color::WHITE),
        _ => None,
    }
}

fn parse_hex_color(value: &str) -> Option<Color> {
    if !HEX_COLOR_RE.is_match(value) {
        return None;
    }
    let r = u8::from_str_radix(&value[1..3], 16).ok()?;
    let g = u8::from_str_radix(&value[3..5], 16).ok()?;
    let b = u8::from_str_radix(&value[5..7], 16).ok()?;
    Some(Color::rgb(
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
    ))
}

#[cfg(test)]
mod tests {
    use super::{parse_hex_color, resolve_color, resolve_tag_color, Color, Palette};

    #[test]
    fn shared_palette_matches_builtin() {
        let fresh = Palette::builtin();
        for entry in fresh.entries() {
            assert_eq!(resolve_color(entry.name), entry.color);
        }
        assert_eq!(resolve_color("not a tint"), fresh.resolve("not a tint"));
    }

    #[test]
    fn hex_parse_requires_exact_shape() {
        assert!(parse_hex_color("#00FF00").is_some());
        assert!(parse_hex_color("00FF00").is_none());
        assert!(parse_hex_color("#00FF0").is_none());
        assert!(parse_hex_color("#00FF001").is_none());
        assert!(parse_hex_color("#00GG00").is_none());
    }

    #[test]
    fn named_lookup_is_case_insensitive() {
        assert_eq!(resolve_tag_color("RED"), resolve_tag_color("red"));
        assert_eq!(resolve_tag_color("White"), Color::WHITE);
    }
}
