//! Light and dark colour themes

use std::{fmt, str::FromStr};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Selectable colour theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// The other theme
    pub fn opposite(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        })
    }
}

impl FromStr for Theme {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(AppError::UnknownTheme(s.to_string())),
        }
    }
}

/// Named colour slots a presentation layer paints with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    WindowBg,
    TextPrimary,
    TextSecondary,
    Border,
    ButtonPrimaryBg,
    ButtonPrimaryText,
    ButtonDangerBg,
    ButtonDangerText,
    ButtonSecondaryBg,
    ButtonSecondaryText,
    InputBg,
    InputBorder,
}

/// Hex colours for every [`ColorRole`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub window_bg: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub border: &'static str,
    pub button_primary_bg: &'static str,
    pub button_primary_text: &'static str,
    pub button_danger_bg: &'static str,
    pub button_danger_text: &'static str,
    pub button_secondary_bg: &'static str,
    pub button_secondary_text: &'static str,
    pub input_bg: &'static str,
    pub input_border: &'static str,
}

impl Palette {
    pub fn color(&self, role: ColorRole) -> &'static str {
        match role {
            ColorRole::WindowBg => self.window_bg,
            ColorRole::TextPrimary => self.text_primary,
            ColorRole::TextSecondary => self.text_secondary,
            ColorRole::Border => self.border,
            ColorRole::ButtonPrimaryBg => self.button_primary_bg,
            ColorRole::ButtonPrimaryText => self.button_primary_text,
            ColorRole::ButtonDangerBg => self.button_danger_bg,
            ColorRole::ButtonDangerText => self.button_danger_text,
            ColorRole::ButtonSecondaryBg => self.button_secondary_bg,
            ColorRole::ButtonSecondaryText => self.button_secondary_text,
            ColorRole::InputBg => self.input_bg,
            ColorRole::InputBorder => self.input_border,
        }
    }

    /// Colour of the clock: danger once the countdown has run out
    pub fn clock_color(&self, expired: bool) -> &'static str {
        if expired {
            self.button_danger_bg
        } else {
            self.text_primary
        }
    }
}

static LIGHT: Palette = Palette {
    window_bg: "#FFFFFF",
    text_primary: "#000000",
    text_secondary: "#555555",
    border: "#CCCCCC",
    button_primary_bg: "#4CAF50",
    button_primary_text: "#FFFFFF",
    button_danger_bg: "#D9534F",
    button_danger_text: "#FFFFFF",
    button_secondary_bg: "#F0F0F0",
    button_secondary_text: "#000000",
    input_bg: "#FFFFFF",
    input_border: "#AAAAAA",
};

static DARK: Palette = Palette {
    window_bg: "#2D2D2D",
    text_primary: "#EAEAEA",
    text_secondary: "#AAAAAA",
    border: "#555555",
    button_primary_bg: "#5DBB63",
    button_primary_text: "#000000",
    button_danger_bg: "#E57373",
    button_danger_text: "#000000",
    button_secondary_bg: "#4A4A4A",
    button_secondary_text: "#EAEAEA",
    input_bg: "#3A3A3A",
    input_border: "#666666",
};

/// Holds the currently selected theme
#[derive(Debug, Clone)]
pub struct ThemeManager {
    current: Theme,
}

impl ThemeManager {
    pub fn new(theme: Theme) -> Self {
        Self { current: theme }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn palette(&self) -> &'static Palette {
        self.current.palette()
    }

    pub fn color(&self, role: ColorRole) -> &'static str {
        self.palette().color(role)
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.current = theme;
    }

    /// Switch to the other theme and return it
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.opposite();
        self.current
    }

    /// Icon for the theme switch button: the theme it would switch to
    pub fn toggle_icon(&self) -> &'static str {
        match self.current {
            Theme::Dark => "☀️",
            Theme::Light => "🌙",
        }
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new(Theme::Light)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_alternates_between_light_and_dark() {
        let mut themes = ThemeManager::default();
        assert_eq!(themes.current(), Theme::Light);
        assert_eq!(themes.toggle(), Theme::Dark);
        assert_eq!(themes.toggle(), Theme::Light);
    }

    #[test]
    fn palette_follows_current_theme() {
        let mut themes = ThemeManager::new(Theme::Dark);
        assert_eq!(themes.color(ColorRole::WindowBg), "#2D2D2D");
        themes.set_theme(Theme::Light);
        assert_eq!(themes.color(ColorRole::WindowBg), "#FFFFFF");
        assert_eq!(themes.color(ColorRole::InputBorder), "#AAAAAA");
    }

    #[test]
    fn toggle_icon_points_at_the_other_theme() {
        let mut themes = ThemeManager::new(Theme::Light);
        assert_eq!(themes.toggle_icon(), "🌙");
        themes.toggle();
        assert_eq!(themes.toggle_icon(), "☀️");
    }

    #[test]
    fn clock_turns_danger_colour_on_expiry() {
        let palette = Theme::Light.palette();
        assert_eq!(palette.clock_color(false), "#000000");
        assert_eq!(palette.clock_color(true), "#D9534F");
    }

    #[test]
    fn parses_theme_names() {
        assert_eq!("Dark".parse::<Theme>().ok(), Some(Theme::Dark));
        assert_eq!(" light ".parse::<Theme>().ok(), Some(Theme::Light));
        assert!(matches!(
            "solarized".parse::<Theme>(),
            Err(AppError::UnknownTheme(name)) if name == "solarized"
        ));
    }
}
