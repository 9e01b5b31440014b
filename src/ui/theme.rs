//! Color themes for the TUI.

use ratatui::style::{Color, Modifier, Style};

use crate::config::ThemeName;

/// Resolved colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub name: ThemeName,
    pub background: Color,
    pub surface: Color,
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    pub secondary: Color,
    pub highlight: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Theme {
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self::night(),
            ThemeName::Light => Self::day(),
        }
    }

    /// Tokyo Night
    pub fn night() -> Self {
        Self {
            name: ThemeName::Dark,
            background: Color::Rgb(0x1a, 0x1b, 0x26),
            surface: Color::Rgb(0x2d, 0x33, 0x4d),
            foreground: Color::Rgb(0xc0, 0xca, 0xf5),
            muted: Color::Rgb(0x56, 0x5f, 0x89),
            accent: Color::Rgb(0x7a, 0xa2, 0xf7),
            secondary: Color::Rgb(0x7d, 0xcf, 0xff),
            highlight: Color::Rgb(0x33, 0x46, 0x7c),
            success: Color::Rgb(0x9e, 0xce, 0x6a),
            warning: Color::Rgb(0xe0, 0xaf, 0x68),
            error: Color::Rgb(0xf7, 0x76, 0x8e),
        }
    }

    /// Tokyo Night Day
    pub fn day() -> Self {
        Self {
            name: ThemeName::Light,
            background: Color::Rgb(0xe1, 0xe2, 0xe7),
            surface: Color::Rgb(0xd0, 0xd5, 0xe3),
            foreground: Color::Rgb(0x37, 0x60, 0xbf),
            muted: Color::Rgb(0x84, 0x8c, 0xb5),
            accent: Color::Rgb(0x2e, 0x7d, 0xe9),
            secondary: Color::Rgb(0x00, 0x71, 0x97),
            highlight: Color::Rgb(0xb6, 0xbf, 0xe2),
            success: Color::Rgb(0x58, 0x75, 0x39),
            warning: Color::Rgb(0x8c, 0x6c, 0x3e),
            error: Color::Rgb(0xf5, 0x2a, 0x65),
        }
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn muted_text(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.muted)
        }
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error_text(&self) -> Style {
        Style::default().fg(self.error)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::night()
    }
}
