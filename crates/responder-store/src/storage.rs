//! Storage port for the question document.
//!
//! The whole collection is one JSON array. Every `load` parses it from
//! scratch and every `save` replaces it entirely.

use crate::error::StoreError;
use responder_core::Question;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

pub trait DocumentStorage: Send + Sync {
    /// Read and parse the full collection.
    fn load(&self) -> Result<Vec<Question>, StoreError>;

    /// Replace the full collection.
    fn save(&self, questions: &[Question]) -> Result<(), StoreError>;
}

fn parse_document(origin: &str, data: &[u8]) -> Result<Vec<Question>, StoreError> {
    serde_json::from_slice(data).map_err(|source| StoreError::Malformed {
        origin: origin.to_string(),
        source,
    })
}

fn render_document(questions: &[Question]) -> Result<Vec<u8>, StoreError> {
    serde_json::to_vec(questions).map_err(StoreError::Serialize)
}

/// The question document as a file on disk.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create the document at `path` holding an empty collection.
    ///
    /// Fails with `DocumentExists` rather than truncating an existing file.
    pub fn initialize(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let write_err = |source: io::Error| StoreError::Write {
            path: path.display().to_string(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let mut file = match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
        {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Err(StoreError::DocumentExists(path.display().to_string()));
            }
            Err(e) => return Err(write_err(e)),
        };
        file.write_all(&render_document(&[])?)
            .and_then(|_| file.sync_all())
            .map_err(write_err)?;

        tracing::info!(path = %path.display(), "initialized question document");
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentStorage for FileStorage {
    fn load(&self) -> Result<Vec<Question>, StoreError> {
        let data = fs::read(&self.path).map_err(|source| StoreError::Read {
            path: self.path.display().to_string(),
            source,
        })?;
        parse_document(&self.path.display().to_string(), &data)
    }

    /// Writes a temp file next to the document and renames it over the
    /// target. Readers see either the old or the new document, and
    /// overlapping saves both succeed with the last rename winning.
    fn save(&self, questions: &[Question]) -> Result<(), StoreError> {
        let data = render_document(questions)?;
        let write_err = |source: io::Error| StoreError::Write {
            path: self.path.display().to_string(),
            source,
        };

        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(&data)
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(write_err)?;
        tmp.persist(&self.path).map_err(|e| write_err(e.error))?;
        Ok(())
    }
}

/// In-process document, serialized exactly like the file.
///
/// Used to exercise the store without touching disk. `snapshot` exposes the
/// raw bytes so callers can check that a document was left unchanged.
#[derive(Debug)]
pub struct MemoryStorage {
    document: Mutex<Vec<u8>>,
    read_only: AtomicBool,
}

impl MemoryStorage {
    const ORIGIN: &'static str = "<memory>";

    pub fn new() -> Self {
        Self::from_text("[]")
    }

    /// Seed the document with arbitrary text, valid or not.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            document: Mutex::new(text.into().into_bytes()),
            read_only: AtomicBool::new(false),
        }
    }

    /// When set, every `save` fails with a permission error.
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> Vec<u8> {
        self.document
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStorage for MemoryStorage {
    fn load(&self) -> Result<Vec<Question>, StoreError> {
        let data = self.snapshot();
        parse_document(Self::ORIGIN, &data)
    }

    fn save(&self, questions: &[Question]) -> Result<(), StoreError> {
        if self.read_only.load(Ordering::SeqCst) {
            return Err(StoreError::Write {
                path: Self::ORIGIN.into(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "storage is read-only"),
            });
        }
        let data = render_document(questions)?;
        *self
            .document
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = data;
        Ok(())
    }
}
