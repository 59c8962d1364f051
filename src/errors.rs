//! Error types with rich diagnostics using miette
//!
//! Only uploads, configuration loading and the export operations can fail in
//! a way the caller observes. Asset decode failures are recovered inside the
//! render pass and exist as a type mostly so they can be logged uniformly.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Source context for error reporting
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// Name of the source (filename or "<input>")
    pub name: String,
    /// The full source text
    pub source: String,
}

impl SourceContext {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Create a NamedSource for miette
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.source.clone())
    }

    /// Byte offset of a 1-based line/column pair, clamped to the source length
    pub fn offset_of(&self, line: usize, column: usize) -> usize {
        let mut offset = 0;
        for (idx, text) in self.source.split_inclusive('\n').enumerate() {
            if idx + 1 == line {
                return (offset + column.saturating_sub(1)).min(self.source.len());
            }
            offset += text.len();
        }
        self.source.len()
    }
}

// ============================================================================
// Upload Errors
// ============================================================================

/// Rejection of an uploaded file before any processing happens
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum UploadError {
    #[error("unsupported file type `{mime}` for {file_name}")]
    #[diagnostic(
        code(apron::upload::unsupported_type),
        help("upload SVG, PDF, PNG or JPEG artwork")
    )]
    UnsupportedType { file_name: String, mime: String },
}

// ============================================================================
// Asset Errors
// ============================================================================

/// Failures while decoding an uploaded asset (always recovered by the caller)
#[derive(Error, Diagnostic, Debug)]
pub enum AssetError {
    #[error("could not read {file_name}: {reason}")]
    #[diagnostic(code(apron::asset::read))]
    Read { file_name: String, reason: String },

    #[error("malformed vector markup in {file_name}")]
    #[diagnostic(code(apron::asset::vector_markup))]
    VectorMarkup {
        file_name: String,
        #[source]
        source: apron_svg::SvgError,
    },

    #[error("could not decode image {file_name}: {reason}")]
    #[diagnostic(code(apron::asset::raster_decode))]
    RasterDecode { file_name: String, reason: String },

    #[error("could not render first page of {file_name}: {reason}")]
    #[diagnostic(
        code(apron::asset::page_render),
        help("a placeholder image naming the file is used instead")
    )]
    PageRender { file_name: String, reason: String },
}

// ============================================================================
// Render Errors
// ============================================================================

/// Failures of the render pass itself
#[derive(Error, Diagnostic, Debug)]
pub enum RenderError {
    #[error("could not serialize the drawing")]
    #[diagnostic(code(apron::render::markup))]
    Markup(#[from] apron_svg::SvgError),
}

// ============================================================================
// Export Errors
// ============================================================================

/// Errors reported by the export operations
#[derive(Error, Diagnostic, Debug)]
pub enum ExportError {
    #[error("cannot create a {width}x{height} rendering surface")]
    #[diagnostic(
        code(apron::export::surface_unavailable),
        help("lower the upscale factor")
    )]
    SurfaceUnavailable { width: u32, height: u32 },

    #[error("document failed to load: {reason}")]
    #[diagnostic(code(apron::export::document_decode))]
    DocumentDecode { reason: String },

    #[error("image conversion failed: {reason}")]
    #[diagnostic(code(apron::export::encode))]
    Encode { reason: String },

    #[error("could not write archive entry {entry}")]
    #[diagnostic(code(apron::export::archive))]
    Archive {
        entry: String,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("could not serialize design parameters")]
    #[diagnostic(code(apron::export::manifest))]
    Manifest(#[source] serde_json::Error),

    #[error(transparent)]
    #[diagnostic(code(apron::export::asset))]
    Asset(#[from] AssetError),

    #[error("could not write {path}")]
    #[diagnostic(code(apron::export::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Errors loading a design configuration document
#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("invalid design configuration: {message}")]
    #[diagnostic(code(apron::config::json))]
    Json {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("could not read {path}")]
    #[diagnostic(code(apron::config::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    pub(crate) fn json(ctx: &SourceContext, err: &serde_json::Error) -> Self {
        let offset = ctx.offset_of(err.line(), err.column());
        ConfigError::Json {
            message: err.to_string(),
            src: ctx.named_source(),
            span: SourceSpan::from(offset..offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_of_counts_previous_lines() {
        let ctx = SourceContext::new("<input>", "{\n  \"a\": x\n}");
        assert_eq!(ctx.offset_of(1, 1), 0);
        assert_eq!(ctx.offset_of(2, 8), 9);
        assert_eq!(ctx.offset_of(9, 1), ctx.source.len());
    }

    #[test]
    fn upload_error_names_file_and_type() {
        let err = UploadError::UnsupportedType {
            file_name: "notes.txt".into(),
            mime: "text/plain".into(),
        };
        assert_eq!(err.to_string(), "unsupported file type `text/plain` for notes.txt");
    }
}
