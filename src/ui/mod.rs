//! UI Module - GTK4 + Libadwaita Interface
//!
//! A frameless main window with a custom title bar, drawn from a [`Theme`].
//!
//! [`Theme`]: tweaks_extra::theme::Theme

pub mod app;
pub mod sidebar;
pub mod title_bar;
pub mod window;
