//! Theme configuration for TUI and CLI
//!
//! Centralizes color and style definitions. Provides both ratatui styles
//! (for the full-screen interface) and ANSI escape codes (for CLI output).

use ratatui::style::{Color, Modifier, Style};

/// Color scheme for the interface.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (most content)
    pub text_primary: Color,
    /// Secondary/dimmed text color (hints, footers)
    pub text_secondary: Color,
    /// Accent color (nav highlight, borders, toasts)
    pub accent: Color,
    /// Command echoes in the console
    pub command: Color,
    /// Error color
    pub error: Color,
    /// Success color
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::garden()
    }
}

impl Theme {
    /// Default scheme - gray text with a garden-green accent and the
    /// console's cyan command echoes.
    pub fn garden() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Green,
            command: Color::Cyan,
            error: Color::Red,
            success: Color::Green,
        }
    }

    // Style helpers

    /// Style for primary text content.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for accented/highlighted text.
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for bold accented text (active tab, keybindings).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for console command echoes.
    pub fn command_style(&self) -> Style {
        Style::default().fg(self.command)
    }

    /// Style for success text.
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Style for error text.
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    // ANSI helpers for CLI output

    /// Format text with the accent color (for CLI output).
    pub fn accent_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.accent), text, ANSI_RESET)
    }

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.text_primary), text, ANSI_RESET)
    }

    /// Format text with the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.text_secondary), text, ANSI_RESET)
    }

    /// Format text with the success color (for CLI output).
    pub fn success_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.success), text, ANSI_RESET)
    }

    /// Format text with the error color (for CLI output).
    pub fn error_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.error), text, ANSI_RESET)
    }
}

/// Current theme.
pub fn current_theme() -> Theme {
    Theme::default()
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::White => "\x1b[97m",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ansi_helpers_wrap_with_reset() {
        let theme = Theme::garden();
        let text = theme.accent_text("hi");
        assert!(text.starts_with("\x1b[32m"));
        assert!(text.ends_with(ANSI_RESET));
    }

    #[test]
    fn unknown_color_maps_to_empty_prefix() {
        assert_eq!(color_to_ansi(Color::Rgb(1, 2, 3)), "");
    }
}
