//! Rasterization of SVG markup to PNG.

use std::sync::{Arc, OnceLock};

use usvg::fontdb::Database;

use crate::errors::ExportError;

/// Turns a serialized drawing into PNG bytes
pub trait Rasterizer {
    /// Render `svg` at `scale` times its natural size over opaque white
    fn render_document(&self, svg: &str, scale: f64) -> Result<Vec<u8>, ExportError>;
}

fn system_fonts() -> Arc<Database> {
    static FONTS: OnceLock<Arc<Database>> = OnceLock::new();
    FONTS
        .get_or_init(|| {
            let mut db = Database::new();
            db.load_system_fonts();
            crate::log::debug!(faces = db.len(), "loaded system fonts");
            Arc::new(db)
        })
        .clone()
}

/// [`Rasterizer`] backed by resvg and tiny-skia
#[derive(Clone)]
pub struct ResvgRasterizer {
    fonts: Arc<Database>,
}

impl std::fmt::Debug for ResvgRasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResvgRasterizer")
            .field("faces", &self.fonts.len())
            .finish()
    }
}

impl Default for ResvgRasterizer {
    fn default() -> Self {
        Self {
            fonts: system_fonts(),
        }
    }
}

impl ResvgRasterizer {
    /// Rasterizer with a custom font database
    pub fn with_fonts(fonts: Arc<Database>) -> Self {
        Self { fonts }
    }
}

impl Rasterizer for ResvgRasterizer {
    fn render_document(&self, svg: &str, scale: f64) -> Result<Vec<u8>, ExportError> {
        let mut options = usvg::Options::default();
        options.fontdb = self.fonts.clone();

        let tree = usvg::Tree::from_str(svg, &options).map_err(|e| ExportError::DocumentDecode {
            reason: e.to_string(),
        })?;

        let size = tree.size();
        let width = (f64::from(size.width()) * scale).round() as u32;
        let height = (f64::from(size.height()) * scale).round() as u32;
        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or(ExportError::SurfaceUnavailable { width, height })?;
        pixmap.fill(tiny_skia::Color::WHITE);

        let transform = tiny_skia::Transform::from_scale(scale as f32, scale as f32);
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        crate::log::debug!(width, height, scale, "rasterized document");
        pixmap.encode_png().map_err(|e| ExportError::Encode {
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="10" viewBox="0 0 20 10"><rect x="10" width="10" height="10" fill="#ff0000"/></svg>"##;

    fn rasterizer() -> ResvgRasterizer {
        ResvgRasterizer::with_fonts(Arc::new(Database::new()))
    }

    #[test]
    fn upscales_over_white() {
        let png = rasterizer().render_document(SQUARE, 2.0).unwrap();
        let img = image::load_from_memory(&png).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (40, 20));
        assert_eq!(img.get_pixel(5, 5).0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(30, 10).0, [255, 0, 0, 255]);
    }

    #[test]
    fn undecodable_document() {
        let err = rasterizer().render_document("<svg", 1.0).unwrap_err();
        assert!(matches!(err, ExportError::DocumentDecode { .. }));
    }

    #[test]
    fn zero_scale_has_no_surface() {
        let err = rasterizer().render_document(SQUARE, 0.0).unwrap_err();
        assert!(matches!(
            err,
            ExportError::SurfaceUnavailable {
                width: 0,
                height: 0
            }
        ));
    }
}
