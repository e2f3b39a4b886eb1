//! Themes - hardcoded palettes and layout for the two window variants
//!
//! A [`Theme`] is the value object the window and title bar are built from,
//! so both variants share one title bar implementation.

use serde::Deserialize;
use std::fmt;

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(0xff, 0xff, 0xff);
    pub const TRANSPARENT: Rgba = Rgba::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 0xff
    }
}

/// CSS hex notation: `#rrggbb`, or `#rrggbbaa` when not opaque
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if !self.is_opaque() {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

/// Layout variant of the main window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Light title bar over a placeholder workspace
    Classic,
    /// Dark title bar, sidebar of actions and a status bar
    #[default]
    Extra,
}

impl Variant {
    pub fn theme(self) -> Theme {
        match self {
            Variant::Classic => Theme::classic(),
            Variant::Extra => Theme::extra(),
        }
    }
}

/// Sections listed in the Extra variant's sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    AudioInputs,
    AudioOutputs,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::AudioInputs, Section::AudioOutputs];

    pub fn label(self) -> &'static str {
        match self {
            Section::AudioInputs => "Audio Input (Source) Devices",
            Section::AudioOutputs => "Audio Output (Sink) Devices",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub variant: Variant,
    /// Window title shown in the title bar
    pub title: &'static str,
    pub title_uppercase: bool,
    /// CSS `font-weight` of the title
    pub title_font_weight: &'static str,
    /// CSS `font-size` of the title
    pub title_font_size: &'static str,

    pub container_background: Rgba,
    pub container_foreground: Rgba,
    pub corner_radius: u32,

    pub title_bar_background: Rgba,
    pub title_foreground: Rgba,
    pub button_foreground: Rgba,
    pub button_checked_foreground: Rgba,
    /// Edge length of the square title bar buttons
    pub button_size: i32,
    /// Edge length icons are rasterized to
    pub icon_size: u32,
    /// Color title bar icons are tinted with; `None` keeps the source colors
    pub icon_tint: Option<Rgba>,

    /// Placeholder text for the central workspace
    pub workspace_placeholder: Option<&'static str>,
    pub sidebar: bool,
    pub status_bar: bool,
    pub status_bar_height: i32,
}

impl Theme {
    /// Light variant: "GNOME Hidden Settings Editor"
    pub fn classic() -> Self {
        Self {
            variant: Variant::Classic,
            title: "GNOME Hidden Settings Editor",
            title_uppercase: false,
            title_font_weight: "bold",
            title_font_size: "14px",

            container_background: Rgba::rgb(0xef, 0xef, 0xef),
            container_foreground: Rgba::rgb(0x24, 0x24, 0x24),
            corner_radius: 7,

            title_bar_background: Rgba::rgb(0xfa, 0xfa, 0xfa),
            title_foreground: Rgba::rgb(0x24, 0x24, 0x24),
            button_foreground: Rgba::rgb(0x24, 0x24, 0x24),
            button_checked_foreground: Rgba::rgb(0x15, 0x53, 0x9e),
            button_size: 36,
            icon_size: 16,
            icon_tint: None,

            workspace_placeholder: Some("Hello, World!"),
            sidebar: false,
            status_bar: false,
            status_bar_height: 0,
        }
    }

    /// Dark variant: "Tweaks - Extra!"
    pub fn extra() -> Self {
        Self {
            variant: Variant::Extra,
            title: "Tweaks - Extra!",
            title_uppercase: true,
            title_font_weight: "normal",
            title_font_size: "16pt",

            container_background: Rgba::rgb(0x0f, 0x14, 0x19),
            container_foreground: Rgba::WHITE,
            corner_radius: 5,

            title_bar_background: Rgba::rgb(0x28, 0x32, 0x3f),
            title_foreground: Rgba::WHITE,
            button_foreground: Rgba::rgb(0x7b, 0x81, 0x87),
            button_checked_foreground: Rgba::WHITE,
            button_size: 32,
            icon_size: 32,
            icon_tint: Some(Rgba::WHITE),

            workspace_placeholder: None,
            sidebar: true,
            status_bar: true,
            status_bar_height: 30,
        }
    }

    /// Title as it should be rendered
    pub fn display_title(&self) -> String {
        if self.title_uppercase {
            self.title.to_uppercase()
        } else {
            self.title.to_string()
        }
    }

    /// GTK CSS for the window chrome in this theme
    pub fn stylesheet(&self) -> String {
        let radius = self.corner_radius;
        format!(
            r#"window.tweaks-window {{
    background: transparent;
}}
.tweaks-container {{
    background-color: {container_bg};
    color: {container_fg};
    font-size: 14px;
    border-radius: {radius}px;
}}
.tweaks-title-bar {{
    background-color: {bar_bg};
    border-top-left-radius: {radius}px;
    border-top-right-radius: {radius}px;
}}
.tweaks-title {{
    font-weight: {title_weight};
    font-size: {title_size};
    color: {title_fg};
    margin: 2px;
    margin-left: 48px;
}}
.tweaks-title-button {{
    background: {bar_bg};
    color: {button_fg};
    border: none;
    border-radius: 0;
    box-shadow: none;
    min-width: 0;
    min-height: 0;
    padding: 0;
}}
.tweaks-title-button:checked {{
    color: {button_checked_fg};
}}
.tweaks-sidebar {{
    background-color: {bar_bg};
}}
.tweaks-sidebar button {{
    background: {bar_bg};
    color: {button_fg};
    border: none;
    border-radius: 0;
    font-size: 14pt;
    padding: 10px 30px;
}}
.tweaks-sidebar button:checked {{
    color: {button_checked_fg};
}}
.tweaks-status-bar {{
    background-color: {bar_bg};
    color: {button_fg};
    border-bottom-left-radius: {radius}px;
    border-bottom-right-radius: {radius}px;
    padding: 0 10px;
}}
"#,
            container_bg = self.container_background,
            container_fg = self.container_foreground,
            bar_bg = self.title_bar_background,
            title_weight = self.title_font_weight,
            title_size = self.title_font_size,
            title_fg = self.title_foreground,
            button_fg = self.button_foreground,
            button_checked_fg = self.button_checked_foreground,
        )
    }
}

impl Default for Theme {
    fn default() -> Self {
        Variant::default().theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_css_hex() {
        assert_eq!(Rgba::rgb(0x28, 0x32, 0x3f).to_string(), "#28323f");
        assert_eq!(Rgba::rgba(0xff, 0, 0, 0x80).to_string(), "#ff000080");
        assert_eq!(Rgba::TRANSPARENT.to_string(), "#00000000");
    }

    #[test]
    fn test_variant_themes() {
        let classic = Variant::Classic.theme();
        assert_eq!(classic.title, "GNOME Hidden Settings Editor");
        assert!(classic.icon_tint.is_none());
        assert!(!classic.sidebar);

        let extra = Variant::Extra.theme();
        assert_eq!(extra.display_title(), "TWEAKS - EXTRA!");
        assert_eq!(extra.icon_tint, Some(Rgba::WHITE));
        assert!(extra.sidebar && extra.status_bar);
        assert_eq!(extra.status_bar_height, 30);
    }

    #[test]
    fn test_default_variant_is_extra() {
        assert_eq!(Theme::default().variant, Variant::Extra);
    }

    #[test]
    fn test_stylesheet_uses_palette() {
        let css = Theme::extra().stylesheet();
        assert!(css.contains("background-color: #0f1419"));
        assert!(css.contains("background-color: #28323f"));
        assert!(css.contains("color: #7b8187"));
        assert!(css.contains("border-radius: 5px"));
        assert!(css.contains("font-size: 16pt"));
        assert!(!css.contains("font:"));

        let css = Theme::classic().stylesheet();
        assert!(css.contains("background-color: #efefef"));
        assert!(css.contains("border-radius: 7px"));
        assert!(css.contains("font-weight: bold"));
        assert!(css.contains("font-size: 14px"));
    }

    #[test]
    fn test_section_labels() {
        let labels: Vec<_> = Section::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            vec!["Audio Input (Source) Devices", "Audio Output (Sink) Devices"]
        );
    }
}
