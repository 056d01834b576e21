use crate::samples::HexColor;
use clap::ValueEnum;
use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }

    /// Resolve the color mode from the environment, letting an explicit
    /// `always`/`never` from the command line win.
    pub fn from_env_with(requested: ColorMode) -> Self {
        match requested {
            ColorMode::Auto => Self::from_env(),
            explicit => Self::new(explicit),
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Pure function resolving the color variables through `lookup`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        // Check NO_COLOR environment variable (per no-color.org standard)
        if lookup("NO_COLOR").is_some() {
            config.color = ColorMode::Never;
        }

        // Check CLICOLOR environment variable
        if lookup("CLICOLOR").as_deref() == Some("0") {
            config.color = ColorMode::Never;
        }

        // Check CLICOLOR_FORCE environment variable
        if lookup("CLICOLOR_FORCE").as_deref() == Some("1") {
            config.color = ColorMode::Always;
        }

        config
    }
}

/// Styles palette values; all other text is written as-is.
pub trait OutputFormatter {
    fn swatch(&self, text: &str, color: HexColor) -> String;
}

pub struct ColoredFormatter {
    enabled: bool,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        let enabled = config.color.should_use_color();
        // Set colored control based on configuration
        colored::control::set_override(enabled);
        Self { enabled }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn swatch(&self, text: &str, color: HexColor) -> String {
        if self.enabled {
            let (r, g, b) = color.rgb();
            text.truecolor(r, g, b).to_string()
        } else {
            text.to_string()
        }
    }
}

pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn swatch(&self, text: &str, _color: HexColor) -> String {
        text.to_string()
    }
}

fn detect_color_support() -> bool {
    // Check if we're in a dumb terminal
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    // Check if stdout is a TTY
    std::io::stdout().is_terminal()
}
