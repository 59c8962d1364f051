//! Asset Normalizer: turns uploaded artwork into drawable content.
//!
//! Uploads are classified by MIME type first ([`Upload::accept`]); only an
//! [`AcceptedUpload`] can reach [`AssetNormalizer::normalize`]. Vector markup
//! is parsed into an element tree, raster images are decoded for their natural
//! size, and paginated documents are rendered to a bitmap through an injected
//! [`PageRenderer`], falling back to a synthesized placeholder bitmap.

mod document;
mod generation;
mod raster;
mod reader;
mod vector;

pub use document::{NoPageRenderer, PAGE_RENDER_SCALE, PageRenderer};
pub use generation::{DecodeTracker, Slot, Ticket};
pub use reader::{AssetReader, FsAssetReader, MemoryAssetReader};
pub use vector::{NOMINAL_VECTOR_SIZE, ViewBox};

use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::errors::{AssetError, UploadError};
use crate::export::ResvgRasterizer;

/// Handle for an uploaded file. Never part of a saved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

impl Upload {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size,
        }
    }

    /// Guess the MIME type from the file extension
    pub fn from_file_name(name: impl Into<String>, size: u64) -> Self {
        let name = name.into();
        let ext = name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        let mime = match ext.as_str() {
            "svg" => "image/svg+xml",
            "pdf" => "application/pdf",
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "txt" => "text/plain",
            _ => "application/octet-stream",
        };
        Self::new(name, mime, size)
    }

    /// File name without its last extension
    pub fn stem(&self) -> &str {
        match self.name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => &self.name,
        }
    }

    /// Classify the upload, rejecting unsupported types
    pub fn accept(self) -> Result<AcceptedUpload, UploadError> {
        let category = MimeCategory::classify(&self)?;
        Ok(AcceptedUpload {
            upload: self,
            category,
        })
    }
}

/// Reference to uploaded pattern artwork, as stored in a configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRef {
    pub file_name: String,
    pub mime: String,
    pub size: u64,
}

impl From<&Upload> for AssetRef {
    fn from(upload: &Upload) -> Self {
        Self {
            file_name: upload.name.clone(),
            mime: upload.mime.clone(),
            size: upload.size,
        }
    }
}

impl From<&AssetRef> for Upload {
    fn from(asset: &AssetRef) -> Self {
        Upload::new(asset.file_name.clone(), asset.mime.clone(), asset.size)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MimeCategory {
    Vector,
    Raster,
    Document,
}

impl MimeCategory {
    pub fn classify(upload: &Upload) -> Result<Self, UploadError> {
        match upload.mime.trim().to_ascii_lowercase().as_str() {
            "image/svg+xml" => Ok(MimeCategory::Vector),
            "image/png" | "image/jpeg" | "image/jpg" => Ok(MimeCategory::Raster),
            "application/pdf" => Ok(MimeCategory::Document),
            _ => Err(UploadError::UnsupportedType {
                file_name: upload.name.clone(),
                mime: upload.mime.clone(),
            }),
        }
    }
}

/// An upload whose type passed classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedUpload {
    pub upload: Upload,
    pub category: MimeCategory,
}

/// Drawable payload of an asset
#[derive(Debug, Clone, PartialEq)]
pub enum AssetContent {
    /// Parsed vector artwork: its coordinate box and the root's children
    Vector {
        view_box: ViewBox,
        /// Prefixed `xmlns:*` declarations of the root, which the children
        /// may still use
        namespaces: Vec<(String, String)>,
        children: Vec<apron_svg::Node>,
    },
    /// Encoded bitmap (PNG or JPEG)
    Raster { mime: String, data: Vec<u8> },
}

/// A normalized upload, held for one render pass and export
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    pub file_name: String,
    pub category: MimeCategory,
    /// Intrinsic width in the artwork's own units
    pub width: f64,
    /// Intrinsic height in the artwork's own units
    pub height: f64,
    pub content: AssetContent,
    /// The content is a synthesized stand-in for artwork that failed to render
    pub placeholder: bool,
}

impl Asset {
    /// Intrinsic width / height (1 when degenerate)
    pub fn aspect_ratio(&self) -> f64 {
        let ratio = self.width / self.height;
        if ratio.is_finite() && ratio > 0.0 {
            ratio
        } else {
            1.0
        }
    }

    /// `data:` URL for raster content
    pub fn data_url(&self) -> Option<String> {
        match &self.content {
            AssetContent::Raster { mime, data } => Some(format!(
                "data:{};base64,{}",
                mime,
                base64::engine::general_purpose::STANDARD.encode(data)
            )),
            AssetContent::Vector { .. } => None,
        }
    }
}

/// Decodes accepted uploads, reading bytes through an [`AssetReader`]
pub struct AssetNormalizer<R, P = NoPageRenderer> {
    reader: R,
    pages: P,
    rasterizer: ResvgRasterizer,
}

impl<R: AssetReader> AssetNormalizer<R, NoPageRenderer> {
    pub fn new(reader: R) -> Self {
        Self::with_page_renderer(reader, NoPageRenderer)
    }
}

impl<R: AssetReader, P: PageRenderer> AssetNormalizer<R, P> {
    pub fn with_page_renderer(reader: R, pages: P) -> Self {
        Self {
            reader,
            pages,
            rasterizer: ResvgRasterizer::default(),
        }
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    /// Decode an upload into an [`Asset`].
    ///
    /// Vector and raster failures are returned so the caller can substitute a
    /// textual placeholder; document render failures never surface, a
    /// placeholder bitmap is synthesized instead.
    pub async fn normalize(&self, accepted: &AcceptedUpload) -> Result<Asset, AssetError> {
        let upload = &accepted.upload;
        let bytes = self.reader.read(upload).await?;
        crate::log::debug!(file = %upload.name, bytes = bytes.len(), "normalizing upload");
        match accepted.category {
            MimeCategory::Vector => vector::normalize(&upload.name, &bytes),
            MimeCategory::Raster => raster::normalize(&upload.name, &upload.mime, &bytes),
            MimeCategory::Document => Ok(document::normalize(
                upload,
                &bytes,
                &self.pages,
                &self.rasterizer,
            )),
        }
    }

    /// Decode an upload, logging and discarding failures
    pub async fn normalize_or_warn(&self, accepted: &AcceptedUpload) -> Option<Asset> {
        match self.normalize(accepted).await {
            Ok(asset) => Some(asset),
            Err(err) => {
                crate::log::warn!(file = %accepted.upload.name, error = %err, "asset decode failed, drawing a placeholder");
                None
            }
        }
    }
}
