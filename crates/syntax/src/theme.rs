// Chunk: docs/chunks/incremental_highlighting - Catppuccin Mocha theme for token categories

//! Syntax theme mapping token categories to styles.
//!
//! This module provides a `SyntaxTheme` that maps each [`TokenCategory`]
//! to a visual style using the Catppuccin Mocha color palette.

use std::collections::HashMap;

use dux_buffer::{Attributes, Style, TokenCategory};

/// Catppuccin Mocha color palette constants.
mod catppuccin {
    use dux_buffer::Color;

    // Accent colors
    pub const MAUVE: Color = Color::from_hex(0xcba6f7);
    pub const BLUE: Color = Color::from_hex(0x89b4fa);
    pub const SAPPHIRE: Color = Color::from_hex(0x74c7ec);
    pub const GREEN: Color = Color::from_hex(0xa6e3a1);
    pub const PINK: Color = Color::from_hex(0xf5c2e7);
    pub const PEACH: Color = Color::from_hex(0xfab387);
    pub const YELLOW: Color = Color::from_hex(0xf9e2af);
    pub const MAROON: Color = Color::from_hex(0xeba0ac);
    pub const SKY: Color = Color::from_hex(0x89dceb);

    // Surface/text colors
    pub const TEXT: Color = Color::from_hex(0xcdd6f4);
    pub const OVERLAY0: Color = Color::from_hex(0x6c7086);
    pub const SUBTEXT0: Color = Color::from_hex(0xa6adc8);
}

/// A mapping from token categories to visual styles.
///
/// Categories without an entry render with the default style.
#[derive(Debug, Clone)]
pub struct SyntaxTheme {
    styles: HashMap<TokenCategory, Style>,
}

impl SyntaxTheme {
    /// A theme with no styles; every category renders as default text.
    pub fn empty() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }

    /// Creates the Catppuccin Mocha theme.
    pub fn default_dark() -> Self {
        use catppuccin::*;

        let mut theme = Self::empty();
        theme.set(TokenCategory::Keyword, Style::fg(MAUVE));
        theme.set(TokenCategory::Function, Style::fg(BLUE));
        theme.set(
            TokenCategory::Type,
            Style {
                fg: YELLOW,
                italic: true,
                ..Style::default()
            },
        );
        theme.set(TokenCategory::String, Style::fg(GREEN));
        theme.set(TokenCategory::Escape, Style::fg(PINK));
        theme.set(TokenCategory::Number, Style::fg(PEACH));
        theme.set(TokenCategory::Constant, Style::fg(PEACH));
        theme.set(
            TokenCategory::Comment,
            Style {
                fg: OVERLAY0,
                italic: true,
                ..Style::default()
            },
        );
        theme.set(TokenCategory::Operator, Style::fg(SKY));
        theme.set(TokenCategory::Punctuation, Style::fg(SUBTEXT0));
        theme.set(TokenCategory::Preprocessor, Style::fg(PINK));
        theme.set(TokenCategory::Tag, Style::fg(SAPPHIRE));
        theme.set(TokenCategory::Attribute, Style::fg(YELLOW));
        theme.set(TokenCategory::Variable, Style::fg(TEXT));
        theme.set(
            TokenCategory::Heading,
            Style {
                fg: MAUVE,
                bold: true,
                ..Style::default()
            },
        );
        theme.set(
            TokenCategory::Emphasis,
            Style {
                fg: MAROON,
                italic: true,
                ..Style::default()
            },
        );
        theme.set(TokenCategory::Plain, Style::fg(TEXT));
        theme
    }

    pub fn set(&mut self, category: TokenCategory, style: Style) {
        self.styles.insert(category, style);
    }

    /// Returns the style for a category.
    pub fn style_for(&self, category: TokenCategory) -> Style {
        self.styles.get(&category).copied().unwrap_or_default()
    }

    /// The attribute set written to the buffer for a token of `category`.
    pub fn attributes(&self, category: TokenCategory) -> Attributes {
        Attributes::new(category, self.style_for(category))
    }
}

impl Default for SyntaxTheme {
    fn default() -> Self {
        Self::default_dark()
    }
}
