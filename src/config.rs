//! Tweaks Extra Configuration
//!
//! Optional `config.toml` controlling the window variant, icon location and
//! startup checks. Every field has a default, so running without a file
//! behaves like running with an empty one.

use crate::geometry::Size;
use crate::icons::DEFAULT_ICONS_DIR;
use crate::theme::Variant;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Directory name under the XDG config directory
pub const CONFIG_DIR_NAME: &str = "tweaks-extra";

/// The main configuration structure matching config.toml
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub variant: Variant,

    /// Directory holding the title bar SVG icons
    #[serde(default = "default_icons_dir")]
    pub icons_dir: PathBuf,

    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default)]
    pub session: SessionConfig,
}

/// Initial window geometry
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct WindowConfig {
    /// Fraction of the monitor width (default: 0.35)
    #[serde(default = "default_width_fraction")]
    pub width_fraction: f64,

    /// Fraction of the monitor height (default: 0.40)
    #[serde(default = "default_height_fraction")]
    pub height_fraction: f64,

    /// Initial sidebar width in the Extra variant
    #[serde(default = "default_sidebar_width")]
    pub sidebar_width: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width_fraction: default_width_fraction(),
            height_fraction: default_height_fraction(),
            sidebar_width: default_sidebar_width(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Refuse to run outside GNOME sessions (default: true)
    #[serde(default = "default_true")]
    pub check: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { check: true }
    }
}

fn default_icons_dir() -> PathBuf {
    PathBuf::from(DEFAULT_ICONS_DIR)
}

fn default_width_fraction() -> f64 {
    0.35
}

fn default_height_fraction() -> f64 {
    0.40
}

fn default_sidebar_width() -> i32 {
    200
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            icons_dir: default_icons_dir(),
            window: WindowConfig::default(),
            session: SessionConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a file path
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&contents)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from a TOML string
    pub fn from_str(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str).context("Failed to parse config.toml")?;
        config.validate()?;
        Ok(config)
    }

    /// Load the explicit file if given, else the user config if present,
    /// else the defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match default_path() {
            Some(path) if path.exists() => {
                tracing::debug!("Using config file {}", path.display());
                Self::from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("width_fraction", self.window.width_fraction),
            ("height_fraction", self.window.height_fraction),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                anyhow::bail!("window.{} must be in (0, 1], got: {}", name, value);
            }
        }

        if self.window.sidebar_width < 0 {
            anyhow::bail!(
                "window.sidebar_width must not be negative, got: {}",
                self.window.sidebar_width
            );
        }

        Ok(())
    }

    /// Window size for a monitor of the given size
    pub fn initial_window_size(&self, monitor: Size) -> Size {
        monitor.scaled(self.window.width_fraction, self.window.height_fraction)
    }
}

/// `$XDG_CONFIG_HOME/tweaks-extra/config.toml`
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config = AppConfig::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.variant, Variant::Extra);
        assert_eq!(config.icons_dir, PathBuf::from("icons"));
        assert!(config.session.check);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            variant = "classic"
            icons_dir = "/usr/share/tweaks-extra/icons"

            [window]
            width_fraction = 0.5
            height_fraction = 0.6
            sidebar_width = 240

            [session]
            check = false
        "#;

        let config = AppConfig::from_str(toml).unwrap();
        assert_eq!(config.variant, Variant::Classic);
        assert_eq!(config.icons_dir, PathBuf::from("/usr/share/tweaks-extra/icons"));
        assert_eq!(config.window.sidebar_width, 240);
        assert!(!config.session.check);
    }

    #[test]
    fn test_rejects_bad_fraction() {
        assert!(AppConfig::from_str("[window]\nwidth_fraction = 0.0").is_err());
        assert!(AppConfig::from_str("[window]\nheight_fraction = 1.5").is_err());
    }

    #[test]
    fn test_rejects_unknown_variant() {
        assert!(AppConfig::from_str(r#"variant = "compact""#).is_err());
    }

    #[test]
    fn test_initial_window_size() {
        let config = AppConfig::default();
        assert_eq!(
            config.initial_window_size(Size::new(2560, 1440)),
            Size::new(896, 576)
        );
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "variant = \"classic\"\n").unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.variant, Variant::Classic);
    }
}
