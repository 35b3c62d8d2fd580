//! Output configuration types

use std::io::IsTerminal;

use clap::ValueEnum;
use termcolor::ColorChoice;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorMode {
    /// Decide whether stdout gets colors.
    pub fn use_color(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    pub fn choice(self) -> ColorChoice {
        if self.use_color() {
            ColorChoice::AlwaysAnsi
        } else {
            ColorChoice::Never
        }
    }
}
