//! Parametric apron technical drawings.
//!
//! A [`DesignConfig`] plus optional pattern and logo uploads becomes an SVG
//! drawing with dimension annotations, which can then be exported as SVG, as
//! PNG, or as a zip bundle with a parameter manifest and specification sheet.

pub mod asset;
pub mod config;
pub mod errors;
pub mod export;
pub mod fill;
pub mod geometry;
mod log;
pub mod render;
pub mod session;
pub mod types;

pub use asset::{AcceptedUpload, Asset, AssetNormalizer, AssetReader, FsAssetReader, Upload};
pub use config::{DesignConfig, RenderOptions};
pub use errors::{AssetError, ConfigError, ExportError, RenderError, UploadError};
pub use export::{Export, ExportKind, ExportStamp, Rasterizer, ResvgRasterizer};
pub use session::{RenderOutcome, RenderSession, RenderedDesign, Uploads};

/// Draw a configuration without uploaded artwork.
///
/// A pattern fill is drawn as its textual placeholder.
pub fn draw(config: &DesignConfig) -> Result<String, RenderError> {
    let options = RenderOptions::default();
    let area = geometry::fill_area(config, &options);
    let fill = fill::resolve_fill(&config.fill, None, area);
    render::assemble(&geometry::layout(config, &fill, None, &options))
}
