//! Color themes for the UI.

use crate::app::Theme;
use ratatui::style::Color;

/// Theme color palette (gruvbox).
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Main background.
    pub bg0: Color,
    /// Raised background (bars, focused field).
    pub bg1: Color,
    /// Border color.
    pub bg2: Color,
    /// Emphasis text.
    pub fg0: Color,
    /// Normal text.
    pub fg1: Color,
    /// De-emphasized elements (grid lines, hints).
    pub gray: Color,
    /// First series color.
    pub red: Color,
    /// Second series color.
    pub green: Color,
    /// Third series color.
    pub blue: Color,
    /// Highlights (probe cursor, titles, focused border).
    pub yellow: Color,
    /// Toggles and key hints.
    pub aqua: Color,
    /// Headings and warnings.
    pub orange: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg0: Color::Rgb(40, 40, 40),
                bg1: Color::Rgb(60, 56, 54),
                bg2: Color::Rgb(80, 73, 69),
                fg0: Color::Rgb(251, 241, 199),
                fg1: Color::Rgb(235, 219, 178),
                gray: Color::Rgb(146, 131, 116),
                red: Color::Rgb(251, 73, 52),
                green: Color::Rgb(184, 187, 38),
                blue: Color::Rgb(131, 165, 152),
                yellow: Color::Rgb(250, 189, 47),
                aqua: Color::Rgb(142, 192, 124),
                orange: Color::Rgb(254, 128, 25),
            },
            Theme::GruvboxLight => Self {
                bg0: Color::Rgb(251, 241, 199),
                bg1: Color::Rgb(235, 219, 178),
                bg2: Color::Rgb(213, 196, 161),
                fg0: Color::Rgb(40, 40, 40),
                fg1: Color::Rgb(60, 56, 54),
                gray: Color::Rgb(146, 131, 116),
                red: Color::Rgb(157, 0, 6),
                green: Color::Rgb(121, 116, 14),
                blue: Color::Rgb(7, 102, 120),
                yellow: Color::Rgb(181, 118, 20),
                aqua: Color::Rgb(66, 123, 88),
                orange: Color::Rgb(175, 58, 3),
            },
        }
    }

    /// Series color by selection position: red, green, blue, wrapping.
    pub fn series(&self, idx: usize) -> Color {
        [self.red, self.green, self.blue][idx % 3]
    }
}
