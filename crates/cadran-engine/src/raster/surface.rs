use std::path::Path;

use crate::canvas::Surface;
use crate::coords::Viewport;
use crate::paint::Color;
use crate::text::FontSystem;

use super::{PixmapCanvas, RasterError};

/// Offscreen raster surface: a [`PixmapCanvas`] plus the color `clear` paints.
pub struct PixmapSurface {
    canvas: PixmapCanvas,
    background: Color,
}

impl PixmapSurface {
    pub fn new(
        width: u32,
        height: u32,
        fonts: FontSystem,
        background: Color,
    ) -> Result<Self, RasterError> {
        let mut canvas = PixmapCanvas::new(width, height, fonts)?;
        canvas.clear(background);
        Ok(Self { canvas, background })
    }

    /// Demultiplied RGBA8 copy of the current frame.
    pub fn to_rgba_image(&self) -> Result<image::RgbaImage, RasterError> {
        let pixmap = self.canvas.pixmap();
        let mut buf = Vec::with_capacity(pixmap.data().len());
        for px in pixmap.pixels() {
            let c = px.demultiply();
            buf.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        image::RgbaImage::from_raw(pixmap.width(), pixmap.height(), buf)
            .ok_or(RasterError::PixmapSize { width: pixmap.width(), height: pixmap.height() })
    }

    /// Encodes the current frame as PNG at `path`.
    pub fn write_png(&self, path: impl AsRef<Path>) -> Result<(), RasterError> {
        let path = path.as_ref();
        self.to_rgba_image()?
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|e| RasterError::Encode(format!("{}: {e}", path.display())))?;
        log::debug!("frame written to {}", path.display());
        Ok(())
    }
}

impl Surface for PixmapSurface {
    type Canvas = PixmapCanvas;

    fn viewport(&self) -> Viewport {
        Viewport::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn canvas(&mut self) -> &mut PixmapCanvas {
        &mut self.canvas
    }

    fn clear(&mut self) {
        self.canvas.clear(self.background);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas2d;
    use crate::coords::Vec2;

    #[test]
    fn viewport_matches_pixmap() {
        let s = PixmapSurface::new(64, 32, FontSystem::new(), Color::black()).unwrap();
        assert_eq!(s.viewport(), Viewport::new(64.0, 32.0));
    }

    #[test]
    fn clear_restores_background() {
        let bg = Color::parse("#102030").unwrap();
        let mut s = PixmapSurface::new(8, 8, FontSystem::new(), bg).unwrap();
        let c = s.canvas();
        c.set_fill_style(Color::white());
        c.begin_path();
        c.arc(Vec2::new(4.0, 4.0), 4.0, 0.0, core::f32::consts::TAU);
        c.fill();
        s.clear();

        let img = s.to_rgba_image().unwrap();
        assert!(img.pixels().all(|p| p.0 == [0x10, 0x20, 0x30, 255]));
    }

    #[test]
    fn rgba_image_has_surface_size() {
        let s = PixmapSurface::new(5, 3, FontSystem::new(), Color::white()).unwrap();
        let img = s.to_rgba_image().unwrap();
        assert_eq!(img.dimensions(), (5, 3));
    }
}
