use ratatui::style::Color;
use tracing::warn;

/// Runtime theme
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg: Color,
    pub surface: Color,
    pub text: Color,
    pub title: Color,
    pub dim: Color,
    pub border: Color,
    pub border_active: Color,
    pub accent: Color,
    pub button: Color,
    pub button_disabled: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(0x1d, 0x20, 0x21),
            surface: Color::Rgb(0x28, 0x2b, 0x2e),
            text: Color::Rgb(0xd4, 0xd4, 0xc8),
            title: Color::Rgb(0xe8, 0xc2, 0x6c),
            dim: Color::Rgb(0x7c, 0x80, 0x78),
            border: Color::Rgb(0x50, 0x54, 0x50),
            border_active: Color::Rgb(0x8a, 0xb8, 0x72),
            accent: Color::Rgb(0x8a, 0xb8, 0x72),
            button: Color::Rgb(0x7d, 0xae, 0xa3),
            button_disabled: Color::Rgb(0x50, 0x54, 0x50),
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(0xf5, 0xf1, 0xe4),
            surface: Color::Rgb(0xea, 0xe5, 0xd4),
            text: Color::Rgb(0x3a, 0x3a, 0x34),
            title: Color::Rgb(0xa0, 0x62, 0x10),
            dim: Color::Rgb(0x90, 0x8c, 0x80),
            border: Color::Rgb(0xb8, 0xb2, 0xa0),
            border_active: Color::Rgb(0x4a, 0x78, 0x3c),
            accent: Color::Rgb(0x4a, 0x78, 0x3c),
            button: Color::Rgb(0x2f, 0x62, 0x58),
            button_disabled: Color::Rgb(0xb8, 0xb2, 0xa0),
        }
    }
}

/// Resolve a theme by its configured name
pub fn load_theme(name: &str) -> Theme {
    match name {
        "dark" => Theme::dark(),
        "light" => Theme::light(),
        other => {
            warn!("Unknown theme '{}', falling back to dark", other);
            Theme::dark()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_theme_by_name() {
        assert_eq!(load_theme("light").bg, Theme::light().bg);
        assert_eq!(load_theme("dark").bg, Theme::dark().bg);
    }

    #[test]
    fn test_unknown_theme_falls_back_to_dark() {
        assert_eq!(load_theme("solarized").bg, Theme::dark().bg);
    }
}
