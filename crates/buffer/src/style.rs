// Chunk: docs/chunks/attribute_runs - Per-character display attributes

//! Display styling carried by attribute runs.
//!
//! This is the subset of styling a highlighter assigns to text: colors and
//! the three font flags. Rendering is the host's concern.

// =============================================================================
// Color
// =============================================================================

/// A foreground or background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// The host's default color for the slot.
    #[default]
    Default,
    /// 24-bit RGB color.
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    /// Builds an RGB color from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Color::Rgb {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }
}

// =============================================================================
// Style
// =============================================================================

/// Text styling attributes.
///
/// The default style is unstyled text: default colors, no attributes.
///
/// # Example
///
/// ```
/// use dux_buffer::{Color, Style};
///
/// let keyword = Style {
///     fg: Color::from_hex(0xcba6f7),
///     bold: true,
///     ..Style::default()
/// };
/// assert_ne!(keyword, Style::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Foreground color.
    pub fg: Color,
    /// Background color.
    pub bg: Color,
    /// Bold weight.
    pub bold: bool,
    /// Italic slant.
    pub italic: bool,
    pub underline: bool,
}

impl Style {
    /// A style with only a foreground color.
    pub const fn fg(color: Color) -> Self {
        Style {
            fg: color,
            bg: Color::Default,
            bold: false,
            italic: false,
            underline: false,
        }
    }
}
