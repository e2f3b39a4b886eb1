//! Error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("Failed to read icon {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse SVG {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: resvg::usvg::Error,
    },

    #[error("Invalid icon size {size}x{size}")]
    InvalidSize { size: u32 },
}
