//! Tweaks Extra Library - toolkit-independent pieces of the settings editor
//!
//! This library provides:
//! - The title bar drag controller
//! - Window state mirroring and title bar commands
//! - The desktop session guard
//! - Icon rasterization and recoloring
//! - Themes and configuration parsing

pub mod config;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod icons;
pub mod session;
pub mod theme;
pub mod window_state;
