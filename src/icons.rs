//! Title bar icons - SVG rasterization and recoloring
//!
//! Icons are rendered into square premultiplied-RGBA bitmaps. Recoloring
//! uses source-in compositing: every pixel takes the tint color and keeps
//! the coverage (alpha) of the source, so only previously opaque pixels
//! are painted.

use crate::error::IconError;
use crate::theme::Rgba;
use crate::window_state::TitleBarCommand;
use resvg::tiny_skia::{Pixmap, PremultipliedColorU8, Transform};
use resvg::usvg;
use std::path::{Path, PathBuf};

/// Default icons directory, relative to the working directory
pub const DEFAULT_ICONS_DIR: &str = "icons";

/// The icon assets the title bar uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Minimize,
    Restore,
    Maximize,
    Close,
}

impl IconKind {
    pub fn file_name(self) -> &'static str {
        match self {
            IconKind::Minimize => "window-shrink-symbolic.svg",
            IconKind::Restore => "arrows-pointing-inward-symbolic.svg",
            IconKind::Maximize => "window-grow-symbolic.svg",
            IconKind::Close => "cross-large-symbolic.svg",
        }
    }

    /// Themed icon to fall back on when the asset can't be loaded
    pub fn fallback_icon_name(self) -> &'static str {
        match self {
            IconKind::Minimize => "window-minimize-symbolic",
            IconKind::Restore => "window-restore-symbolic",
            IconKind::Maximize => "window-maximize-symbolic",
            IconKind::Close => "window-close-symbolic",
        }
    }

    pub fn path_in(self, icons_dir: &Path) -> PathBuf {
        icons_dir.join(self.file_name())
    }
}

impl From<TitleBarCommand> for IconKind {
    fn from(command: TitleBarCommand) -> Self {
        match command {
            TitleBarCommand::Minimize => IconKind::Minimize,
            TitleBarCommand::Restore => IconKind::Restore,
            TitleBarCommand::Maximize => IconKind::Maximize,
            TitleBarCommand::Close => IconKind::Close,
        }
    }
}

/// Rasterize an SVG file into a transparent `size` x `size` bitmap
pub fn rasterize(svg_path: &Path, size: u32) -> Result<Pixmap, IconError> {
    let mut pixmap = Pixmap::new(size, size).ok_or(IconError::InvalidSize { size })?;

    let data = std::fs::read(svg_path).map_err(|source| IconError::Read {
        path: svg_path.to_path_buf(),
        source,
    })?;

    let tree = usvg::Tree::from_data(&data, &usvg::Options::default()).map_err(|source| {
        IconError::Parse {
            path: svg_path.to_path_buf(),
            source,
        }
    })?;

    let svg_size = tree.size();
    let transform = Transform::from_scale(
        size as f32 / svg_size.width(),
        size as f32 / svg_size.height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Ok(pixmap)
}

/// Rasterize an SVG file and tint it with `color`
pub fn recolor(svg_path: &Path, color: Rgba, size: u32) -> Result<Pixmap, IconError> {
    let mut pixmap = rasterize(svg_path, size)?;
    tint_source_in(&mut pixmap, color);
    Ok(pixmap)
}

/// Rasterize an icon, tinting it when a tint is given
pub fn render_icon(svg_path: &Path, size: u32, tint: Option<Rgba>) -> Result<Pixmap, IconError> {
    match tint {
        Some(color) => recolor(svg_path, color, size),
        None => rasterize(svg_path, size),
    }
}

/// Fill `pixmap` with `color` using source-in compositing
pub fn tint_source_in(pixmap: &mut Pixmap, color: Rgba) {
    for pixel in pixmap.pixels_mut() {
        let alpha = mul_u8(pixel.alpha(), color.a);
        *pixel = PremultipliedColorU8::from_rgba(
            mul_u8(color.r, alpha),
            mul_u8(color.g, alpha),
            mul_u8(color.b, alpha),
            alpha,
        )
        .unwrap_or(PremultipliedColorU8::TRANSPARENT);
    }
}

/// `a * b / 255`, rounded
fn mul_u8(a: u8, b: u8) -> u8 {
    ((a as u16 * b as u16 + 127) / 255) as u8
}
