//! CPU raster backend.
//!
//! `PixmapCanvas` implements [`crate::canvas::Canvas2d`] over a `tiny-skia`
//! pixmap (re-exported by `resvg`); `PixmapSurface` adds the background clear
//! and PNG encoding through `image`.

mod canvas;
mod path;
mod surface;

use std::fmt;

pub use canvas::PixmapCanvas;
pub use surface::PixmapSurface;

/// Errors raised while creating or encoding raster surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    /// The requested pixmap dimensions cannot be allocated.
    PixmapSize { width: u32, height: u32 },
    /// PNG encoding or file write failed.
    Encode(String),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::PixmapSize { width, height } => {
                write!(f, "raster error: cannot allocate {width}x{height} pixmap")
            }
            RasterError::Encode(msg) => write!(f, "raster error: {msg}"),
        }
    }
}

impl std::error::Error for RasterError {}
