//! Export Pipeline: vector file, raster image and bundle archive.
//!
//! Each export is a one-shot operation over an already serialized drawing
//! and fails only for its own reasons.

pub mod bundle;
mod raster;
mod sheet;

pub use raster::{Rasterizer, ResvgRasterizer};
pub use sheet::{ExportStamp, specification_sheet};

use std::path::{Path, PathBuf};

use crate::asset::AssetReader;
use crate::config::DesignConfig;
use crate::errors::ExportError;

pub const VECTOR_FILE_NAME: &str = "apron-design.svg";
pub const RASTER_FILE_NAME: &str = "apron-design.png";
pub const BUNDLE_FILE_NAME: &str = "apron-design-package.zip";

/// Default upscale factor of raster exports
pub const DEFAULT_RASTER_SCALE: f64 = 2.0;

/// Export format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportKind {
    Vector,
    Raster,
    Bundle,
}

impl ExportKind {
    pub const ALL: [ExportKind; 3] = [ExportKind::Vector, ExportKind::Raster, ExportKind::Bundle];

    pub fn file_name(self) -> &'static str {
        match self {
            ExportKind::Vector => VECTOR_FILE_NAME,
            ExportKind::Raster => RASTER_FILE_NAME,
            ExportKind::Bundle => BUNDLE_FILE_NAME,
        }
    }
}

/// An export ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub kind: ExportKind,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Export {
    fn new(kind: ExportKind, bytes: Vec<u8>) -> Self {
        Self {
            kind,
            file_name: kind.file_name().to_string(),
            bytes,
        }
    }

    /// Write into `dir` under the export's file name
    pub async fn write_into(&self, dir: impl AsRef<Path>) -> Result<PathBuf, ExportError> {
        let path = dir.as_ref().join(&self.file_name);
        tokio::fs::write(&path, &self.bytes)
            .await
            .map_err(|source| ExportError::Io {
                path: path.display().to_string(),
                source,
            })?;
        crate::log::info!(path = %path.display(), bytes = self.bytes.len(), "export written");
        Ok(path)
    }
}

/// The drawing verbatim
pub fn export_vector(svg: &str) -> Export {
    Export::new(ExportKind::Vector, svg.as_bytes().to_vec())
}

/// The drawing rasterized at `scale` times its size over white
pub fn export_raster(
    rasterizer: &impl Rasterizer,
    svg: &str,
    scale: f64,
) -> Result<Export, ExportError> {
    let png = rasterizer.render_document(svg, scale)?;
    Ok(Export::new(ExportKind::Raster, png))
}

/// Drawing, parameter manifest, specification sheet and pattern file
pub async fn export_bundle<R: AssetReader>(
    svg: &str,
    config: &DesignConfig,
    reader: &R,
    stamp: ExportStamp,
) -> Result<Export, ExportError> {
    let bytes = bundle::bundle(svg, config, reader, stamp).await?;
    Ok(Export::new(ExportKind::Bundle, bytes))
}
