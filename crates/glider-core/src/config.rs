use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            ui: UiConfig::default(),
            animation: AnimationConfig::default(),
            keymap: KeymapConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Slide width in terminal columns; 0 = measure from slide content
    #[serde(default = "default_slide_width")]
    pub slide_width: u16,
    /// Gap between slides in terminal columns
    #[serde(default = "default_slide_gap")]
    pub slide_gap: u16,
    /// Show "slide i/N" in the status bar
    #[serde(default = "default_true")]
    pub show_slide_numbers: bool,
    /// Theme name ("dark" or "light")
    #[serde(default = "default_theme_name")]
    pub theme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            slide_width: default_slide_width(),
            slide_gap: default_slide_gap(),
            show_slide_numbers: default_true(),
            theme: default_theme_name(),
        }
    }
}

/// Easing curve applied to the slide transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// No easing: jump to the target at completion
    None,
    /// Constant velocity
    Linear,
    /// Cubic ease-in-out: slow start, fast middle, slow settle
    CubicInOut,
}

impl Default for EasingType {
    fn default() -> Self {
        EasingType::CubicInOut
    }
}

/// Slide transition animation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Enable animated transitions (disabled = instant jumps)
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Transition duration in milliseconds
    #[serde(default = "default_animation_duration")]
    pub duration_ms: u64,
    /// Easing function
    #[serde(default)]
    pub easing: EasingType,
    /// Animation frame rate while a transition is in flight
    #[serde(default = "default_animation_fps")]
    pub fps: u16,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            duration_ms: default_animation_duration(),
            easing: EasingType::default(),
            fps: default_animation_fps(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Advance to the next slide
    #[serde(default = "default_key_next")]
    pub next: String,
    /// Go back to the previous slide
    #[serde(default = "default_key_previous")]
    pub previous: String,
    /// Jump to the first slide
    #[serde(default = "default_key_first")]
    pub first: String,
    /// Jump to the last slide
    #[serde(default = "default_key_last")]
    pub last: String,
    /// Toggle the help overlay
    #[serde(default = "default_key_help")]
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            next: default_key_next(),
            previous: default_key_previous(),
            first: default_key_first(),
            last: default_key_last(),
            help: default_key_help(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            debug!("No config file at {}, using defaults", config_path.display());
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/glider/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("glider")
            .join("config.toml")
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_rate() -> u64 {
    100
}

fn default_slide_width() -> u16 {
    32
}

fn default_slide_gap() -> u16 {
    2
}

fn default_true() -> bool {
    true
}

fn default_theme_name() -> String {
    "dark".to_string()
}

fn default_animation_duration() -> u64 {
    1000
}

fn default_animation_fps() -> u16 {
    60
}

fn default_key_quit() -> String {
    "q".to_string()
}

fn default_key_next() -> String {
    "l".to_string()
}

fn default_key_previous() -> String {
    "h".to_string()
}

fn default_key_first() -> String {
    "g".to_string()
}

fn default_key_last() -> String {
    "G".to_string()
}

fn default_key_help() -> String {
    "?".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.ui.slide_width, 32);
        assert_eq!(config.ui.slide_gap, 2);
        assert!(config.animation.enabled);
        assert_eq!(config.animation.duration_ms, 1000);
        assert_eq!(config.animation.easing, EasingType::CubicInOut);
        assert_eq!(config.animation.fps, 60);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [animation]
            duration_ms = 250
            "#,
        )
        .unwrap();
        assert_eq!(config.animation.duration_ms, 250);
        assert!(config.animation.enabled);
        assert_eq!(config.animation.easing, EasingType::CubicInOut);
        assert_eq!(config.ui.slide_width, 32);
    }

    #[test]
    fn test_easing_type_from_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [animation]
            easing = "linear"
            "#,
        )
        .unwrap();
        assert_eq!(config.animation.easing, EasingType::Linear);
    }

    #[test]
    fn test_config_round_trip() {
        let config = AppConfig::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.animation.duration_ms, config.animation.duration_ms);
        assert_eq!(parsed.keymap.next, config.keymap.next);
    }
}
