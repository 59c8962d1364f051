//! File reading capability, injected so the engine never touches ambient I/O.

use std::collections::HashMap;
use std::future::Future;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::Upload;
use crate::errors::AssetError;

/// Reads the raw bytes of an uploaded file
pub trait AssetReader {
    fn read(&self, upload: &Upload) -> impl Future<Output = Result<Vec<u8>, AssetError>> + Send;
}

/// Reads uploads from files under a base directory
#[derive(Debug, Clone)]
pub struct FsAssetReader {
    base: PathBuf,
}

impl FsAssetReader {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

impl AssetReader for FsAssetReader {
    async fn read(&self, upload: &Upload) -> Result<Vec<u8>, AssetError> {
        let path = self.base.join(&upload.name);
        tokio::fs::read(&path).await.map_err(|e| AssetError::Read {
            file_name: upload.name.clone(),
            reason: e.to_string(),
        })
    }
}

/// In-memory uploads keyed by file name; counts every read
#[derive(Debug, Default)]
pub struct MemoryAssetReader {
    files: HashMap<String, Vec<u8>>,
    reads: AtomicUsize,
}

impl MemoryAssetReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(name, bytes);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.files.insert(name.into(), bytes.into());
    }

    /// Upload handle for a stored file, typed from its extension
    pub fn upload(&self, name: &str) -> Option<Upload> {
        self.files
            .get(name)
            .map(|bytes| Upload::from_file_name(name, bytes.len() as u64))
    }

    /// Number of reads served so far
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::Relaxed)
    }
}

impl AssetReader for MemoryAssetReader {
    async fn read(&self, upload: &Upload) -> Result<Vec<u8>, AssetError> {
        self.reads.fetch_add(1, Ordering::Relaxed);
        self.files
            .get(&upload.name)
            .cloned()
            .ok_or_else(|| AssetError::Read {
                file_name: upload.name.clone(),
                reason: "no such file".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_reader_serves_and_counts() {
        let reader = MemoryAssetReader::new().with_file("a.png", vec![1, 2, 3]);
        let upload = reader.upload("a.png").unwrap();
        assert_eq!(upload.mime, "image/png");
        assert_eq!(reader.read(&upload).await.unwrap(), vec![1, 2, 3]);
        assert!(reader.read(&Upload::new("b.png", "image/png", 0)).await.is_err());
        assert_eq!(reader.reads(), 2);
    }

    #[tokio::test]
    async fn fs_reader_reads_relative_to_base() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(dir.path().join("art.svg"), b"<svg/>").await.unwrap();
        let reader = FsAssetReader::new(dir.path());
        let upload = Upload::from_file_name("art.svg", 6);
        assert_eq!(reader.read(&upload).await.unwrap(), b"<svg/>");
        assert!(matches!(
            reader.read(&Upload::from_file_name("missing.svg", 0)).await,
            Err(AssetError::Read { .. })
        ));
    }
}
