//! Paginated document assets.
//!
//! The first page is rendered to a bitmap and treated as a raster asset from
//! then on. When rendering fails the asset becomes a placeholder bitmap that
//! names the file and its size.

use apron_svg::{Presentation, Rect, Svg, Text};

use super::raster::encode_png;
use super::{Asset, AssetContent, MimeCategory, Upload};
use crate::errors::AssetError;
use crate::export::{Rasterizer, ResvgRasterizer};

/// Scale applied when rendering a document page
pub const PAGE_RENDER_SCALE: f64 = 1.5;

const PLACEHOLDER_WIDTH: u32 = 600;
const PLACEHOLDER_HEIGHT: u32 = 400;
const MAX_NAME_CHARS: usize = 35;

/// Renders the first page of a paginated document
pub trait PageRenderer {
    fn render_first_page(&self, bytes: &[u8], scale: f64) -> Result<image::RgbaImage, AssetError>;
}

/// Page renderer for builds without a document backend: every document
/// takes the placeholder path.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPageRenderer;

impl PageRenderer for NoPageRenderer {
    fn render_first_page(&self, _bytes: &[u8], _scale: f64) -> Result<image::RgbaImage, AssetError> {
        Err(AssetError::PageRender {
            file_name: String::new(),
            reason: "no page renderer is available".to_string(),
        })
    }
}

pub(crate) fn normalize<P: PageRenderer>(
    upload: &Upload,
    bytes: &[u8],
    pages: &P,
    rasterizer: &ResvgRasterizer,
) -> Asset {
    let rendered = if bytes.starts_with(b"%PDF-") {
        pages.render_first_page(bytes, PAGE_RENDER_SCALE)
    } else {
        Err(AssetError::PageRender {
            file_name: upload.name.clone(),
            reason: "missing document header".to_string(),
        })
    };

    let page = rendered.and_then(|bitmap| {
        let (width, height) = bitmap.dimensions();
        encode_png(&bitmap)
            .map(|png| (png, width, height))
            .map_err(|e| AssetError::PageRender {
                file_name: upload.name.clone(),
                reason: e.to_string(),
            })
    });

    match page {
        Ok((png, width, height)) => raster_asset(upload, png, width, height, false),
        Err(err) => {
            crate::log::warn!(file = %upload.name, error = %err, "document page render failed, using placeholder");
            let png = placeholder_png(upload, rasterizer);
            raster_asset(upload, png, PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT, true)
        }
    }
}

fn raster_asset(upload: &Upload, png: Vec<u8>, width: u32, height: u32, placeholder: bool) -> Asset {
    Asset {
        file_name: upload.name.clone(),
        category: MimeCategory::Document,
        width: width as f64,
        height: height as f64,
        content: AssetContent::Raster {
            mime: "image/png".to_string(),
            data: png,
        },
        placeholder,
    }
}

/// Informational bitmap naming the file; never empty
fn placeholder_png(upload: &Upload, rasterizer: &ResvgRasterizer) -> Vec<u8> {
    let svg = placeholder_svg(upload);
    match rasterizer.render_document(&svg, 1.0) {
        Ok(png) => png,
        Err(err) => {
            crate::log::warn!(error = %err, "placeholder rasterization failed, using a blank card");
            let card = image::RgbaImage::from_pixel(
                PLACEHOLDER_WIDTH,
                PLACEHOLDER_HEIGHT,
                image::Rgba([240, 240, 240, 255]),
            );
            // Encoding an in-memory RGBA buffer to PNG only fails on allocation
            encode_png(&card).unwrap_or_default()
        }
    }
}

fn display_name(name: &str) -> String {
    if name.chars().count() > MAX_NAME_CHARS {
        let head: String = name.chars().take(MAX_NAME_CHARS - 3).collect();
        format!("{head}...")
    } else {
        name.to_string()
    }
}

fn format_megabytes(size: u64) -> String {
    format!("{:.2}MB", size as f64 / (1024.0 * 1024.0))
}

pub(crate) fn placeholder_svg(upload: &Upload) -> String {
    let w = PLACEHOLDER_WIDTH as f64;
    let h = PLACEHOLDER_HEIGHT as f64;
    let mut svg = Svg::new(w, h);
    svg.push(Rect {
        x: Some(10.0),
        y: Some(10.0),
        width: Some(w - 20.0),
        height: Some(h - 20.0),
        rx: Some(8.0),
        presentation: Presentation {
            fill: Some("#f0f0f0".to_string()),
            stroke: Some("#999999".to_string()),
            stroke_width: Some(2.0),
            stroke_dasharray: Some("8,4".to_string()),
            ..Default::default()
        },
    });
    let lines = [
        ("PDF document".to_string(), 28.0, h / 2.0 - 40.0),
        (display_name(&upload.name), 18.0, h / 2.0),
        (format_megabytes(upload.size), 16.0, h / 2.0 + 30.0),
        ("Preview unavailable".to_string(), 14.0, h / 2.0 + 60.0),
    ];
    for (content, size, y) in lines {
        svg.push(Text {
            x: Some(w / 2.0),
            y: Some(y),
            font_family: Some("Arial, sans-serif".to_string()),
            font_size: Some(size),
            text_anchor: Some("middle".to_string()),
            presentation: Presentation {
                fill: Some("#555555".to_string()),
                ..Default::default()
            },
            content,
            ..Default::default()
        });
    }
    // Serializing a tree built from typed elements cannot fail
    apron_svg::to_string(&svg.into()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_names_are_truncated() {
        let name = "a".repeat(40) + ".pdf";
        let shown = display_name(&name);
        assert_eq!(shown.chars().count(), 35);
        assert!(shown.ends_with("..."));
        assert_eq!(display_name("short.pdf"), "short.pdf");
    }

    #[test]
    fn size_in_megabytes() {
        assert_eq!(format_megabytes(1024 * 1024 * 3 / 2), "1.50MB");
        assert_eq!(format_megabytes(0), "0.00MB");
    }

    #[test]
    fn placeholder_names_the_file() {
        let upload = Upload::new("spec-sheet.pdf", "application/pdf", 2 * 1024 * 1024);
        let root = apron_svg::parse(&placeholder_svg(&upload)).unwrap();
        let text = root.text();
        assert!(text.contains("spec-sheet.pdf"), "{text}");
        assert!(text.contains("2.00MB"), "{text}");
    }

    #[test]
    fn corrupt_document_yields_placeholder_bitmap() {
        let upload = Upload::new("broken.pdf", "application/pdf", 11);
        let asset = normalize(&upload, b"%PDF-garbage", &NoPageRenderer, &ResvgRasterizer::default());
        assert!(asset.placeholder);
        assert_eq!((asset.width, asset.height), (600.0, 400.0));
        let AssetContent::Raster { data, mime } = &asset.content else {
            panic!("expected raster content");
        };
        assert_eq!(mime, "image/png");
        assert!(!data.is_empty());
        assert!(image::load_from_memory(data).is_ok());
    }

    struct SolidPage;

    impl PageRenderer for SolidPage {
        fn render_first_page(&self, _bytes: &[u8], scale: f64) -> Result<image::RgbaImage, AssetError> {
            let side = (100.0 * scale) as u32;
            Ok(image::RgbaImage::from_pixel(side * 2, side, image::Rgba([0, 0, 255, 255])))
        }
    }

    #[test]
    fn rendered_page_becomes_raster_asset() {
        let upload = Upload::new("page.pdf", "application/pdf", 100);
        let asset = normalize(&upload, b"%PDF-1.7 ...", &SolidPage, &ResvgRasterizer::default());
        assert!(!asset.placeholder);
        assert_eq!((asset.width, asset.height), (300.0, 150.0));
        assert_eq!(asset.aspect_ratio(), 2.0);
    }
}
