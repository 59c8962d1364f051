//! Bundle archive: drawing, parameter manifest, specification sheet and the
//! original pattern file.

use std::io::{Cursor, Write};
use std::path::Path;

use serde::Serialize;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use super::sheet::{ExportStamp, specification_sheet};
use crate::asset::{AssetReader, Upload};
use crate::config::DesignConfig;
use crate::errors::ExportError;

pub const DRAWING_ENTRY: &str = "design.svg";
pub const MANIFEST_ENTRY: &str = "design-parameters.json";
pub const SHEET_ENTRY: &str = "README.txt";
pub const PATTERN_DIR: &str = "pattern-files";

pub const MANIFEST_VERSION: &str = "2.0";
pub const MANIFEST_SPECIFICATION: &str = "Professional Apron Design Standard";

#[derive(Serialize)]
struct Manifest<'a> {
    #[serde(flatten)]
    design: &'a DesignConfig,
    exported_at: String,
    version: &'static str,
    specification: &'static str,
}

/// Parameter manifest: the full configuration plus export metadata
pub fn manifest(config: &DesignConfig, stamp: ExportStamp) -> Result<String, ExportError> {
    serde_json::to_string_pretty(&Manifest {
        design: config,
        exported_at: stamp.to_rfc3339(),
        version: MANIFEST_VERSION,
        specification: MANIFEST_SPECIFICATION,
    })
    .map_err(ExportError::Manifest)
}

struct Archive {
    zip: ZipWriter<Cursor<Vec<u8>>>,
    options: SimpleFileOptions,
}

impl Archive {
    fn new() -> Self {
        Self {
            zip: ZipWriter::new(Cursor::new(Vec::new())),
            options: SimpleFileOptions::default()
                .compression_method(zip::CompressionMethod::Deflated),
        }
    }

    fn add(&mut self, entry: &str, bytes: &[u8]) -> Result<(), ExportError> {
        let archive_err = |source| ExportError::Archive {
            entry: entry.to_string(),
            source,
        };
        self.zip.start_file(entry, self.options).map_err(archive_err)?;
        self.zip
            .write_all(bytes)
            .map_err(|e| archive_err(zip::result::ZipError::Io(e)))
    }

    fn finish(self) -> Result<Vec<u8>, ExportError> {
        self.zip
            .finish()
            .map(Cursor::into_inner)
            .map_err(|source| ExportError::Archive {
                entry: "<central directory>".to_string(),
                source,
            })
    }
}

/// Archive entry name for an attached pattern file, without directories
pub fn pattern_entry(file_name: &str) -> String {
    let base = Path::new(file_name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(file_name);
    format!("{PATTERN_DIR}/{base}")
}

/// Build the bundle archive bytes.
///
/// The pattern file is included exactly when the fill is a pattern with an
/// attached asset; its bytes come from `reader`.
pub async fn bundle<R: AssetReader>(
    svg: &str,
    config: &DesignConfig,
    reader: &R,
    stamp: ExportStamp,
) -> Result<Vec<u8>, ExportError> {
    let mut archive = Archive::new();
    archive.add(DRAWING_ENTRY, svg.as_bytes())?;
    archive.add(MANIFEST_ENTRY, manifest(config, stamp)?.as_bytes())?;
    archive.add(SHEET_ENTRY, specification_sheet(config, stamp).as_bytes())?;

    if let Some(asset) = config.fill.asset() {
        let bytes = reader.read(&Upload::from(asset)).await?;
        let entry = pattern_entry(&asset.file_name);
        crate::log::debug!(entry = %entry, bytes = bytes.len(), "bundling pattern file");
        archive.add(&entry, &bytes)?;
    }

    archive.finish()
}
