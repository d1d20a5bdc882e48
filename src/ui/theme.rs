//! Styles shared by the menu widgets.

use crate::config::ThemeConfig;
use crate::error::ConfigError;
use ratatui::prelude::*;
use std::str::FromStr;

/// Resolved menu styles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Menu region while focused
    pub focused: Style,
    /// Menu region while unfocused
    pub unfocused: Style,
    /// The current item
    pub current: Style,
    /// Every other item
    pub item: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            focused: Style::default().fg(Color::White),
            unfocused: Style::default().fg(Color::Gray),
            current: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            item: Style::default(),
        }
    }
}

impl Theme {
    /// Build a theme from colour names
    pub fn from_config(config: &ThemeConfig) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            focused: fg(&config.focused)?,
            unfocused: fg(&config.unfocused)?,
            current: match parse_color(&config.current)? {
                Some(color) => defaults.current.bg(color),
                None => defaults.current,
            },
            item: fg(&config.item)?,
        })
    }

    /// Region style for the given focus state
    pub fn region(&self, focused: bool) -> Style {
        if focused {
            self.focused
        } else {
            self.unfocused
        }
    }
}

fn fg(name: &str) -> Result<Style, ConfigError> {
    Ok(match parse_color(name)? {
        Some(color) => Style::default().fg(color),
        None => Style::default(),
    })
}

fn parse_color(name: &str) -> Result<Option<Color>, ConfigError> {
    let name = name.trim();
    if name.is_empty() {
        return Ok(None);
    }
    Color::from_str(name)
        .map(Some)
        .map_err(|_| ConfigError::Invalid(format!("unknown colour '{}'", name)))
}
