//! Output styles using owo-colors stylesheet pattern

use owo_colors::Style;

/// Centralized stylesheet for CLI output colors.
#[derive(Default, Clone)]
pub struct Styles {
    /// Success messages (green)
    pub success: Style,
    /// Warning messages (yellow)
    pub warning: Style,
    /// Info messages (blue)
    pub info: Style,
    /// In-progress steps (cyan)
    pub step: Style,
    /// Bold text, used for credentials
    pub bold: Style,
}

impl Styles {
    /// Apply colors to the stylesheet.
    pub fn colorize(&mut self) {
        self.success = Style::new().green();
        self.warning = Style::new().yellow();
        self.info = Style::new().blue();
        self.step = Style::new().cyan();
        self.bold = Style::new().bold();
    }
}
