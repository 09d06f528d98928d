//! # Record Store
//!
//! Load and save of keyed JSON documents. Every store is a single file holding one
//! JSON object that maps a string identifier to a record (itself a JSON object):
//!
//! ```json
//! {
//!     "101": {
//!         "name": "Ada",
//!         "email": "ada@example.com"
//!     }
//! }
//! ```
//!
//! There is no caching: [`RecordStore::load`] re-reads the file every time and
//! [`RecordStore::save`] overwrites it with the full document. A missing file reads
//! as an empty document, and so does a file that is not a valid document. The
//! second case is logged, because the next save will replace its contents.

use crate::error::StoreError;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A single record: field name to value.
pub type Record = Map<String, Value>;

/// A whole store: identifier to record, in key order.
pub type Document = BTreeMap<String, Record>;

/// Directory-rooted collection of named JSON stores.
#[derive(Debug, Clone)]
pub struct RecordStore {
    root: PathBuf,
}

impl RecordStore {
    /// Creates a store rooted at `root`. The directory is created on first save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a store name to its file path under the root.
    pub fn path_of(&self, store: &str) -> PathBuf {
        self.root.join(store)
    }

    /// Reads the document persisted under `store`.
    ///
    /// Returns an empty document when the file does not exist or does not parse as
    /// an object of objects. Only genuine I/O failures are reported as errors.
    pub async fn load(&self, store: &str) -> Result<Document, StoreError> {
        let path = self.path_of(store);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(store, "Store missing, treating as empty");
                return Ok(Document::new());
            }
            Err(source) => return Err(StoreError::Read { path, source }),
        };

        match serde_json::from_slice::<Document>(&bytes) {
            Ok(document) => {
                debug!(store, records = document.len(), "Loaded");
                Ok(document)
            }
            Err(e) => {
                warn!(
                    store,
                    path = %path.display(),
                    error = %e,
                    "Malformed store, treating as empty"
                );
                Ok(Document::new())
            }
        }
    }

    /// Serializes `document` and replaces whatever `store` held before.
    pub async fn save(&self, store: &str, document: &Document) -> Result<(), StoreError> {
        let path = self.path_of(store);
        let bytes = encode_document(document).map_err(|source| StoreError::Encode {
            store: store.to_string(),
            source,
        })?;

        let root = self.root.clone();
        let target = path.clone();
        tokio::task::spawn_blocking(move || write_replacing(&root, &target, &bytes))
            .await
            .map_err(|e| StoreError::Write {
                path,
                source: io::Error::other(e),
            })??;

        debug!(store, records = document.len(), "Saved");
        Ok(())
    }
}

/// Writes `bytes` to a uniquely named file beside `path`, then renames it over
/// `path`. Readers never see a partial file, and no other store's file is touched.
fn write_replacing(root: &Path, path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let write_error = |source: io::Error| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };
    let dir = path.parent().unwrap_or(root);
    std::fs::create_dir_all(dir).map_err(|source| StoreError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    let prefix = match path.file_name() {
        Some(name) => format!(".{}.", name.to_string_lossy()),
        None => ".store.".to_string(),
    };
    let mut tmp = tempfile::Builder::new()
        .prefix(&prefix)
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(write_error)?;
    tmp.write_all(bytes).map_err(write_error)?;
    tmp.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}

/// Pretty-prints with four-space indentation.
fn encode_document(document: &Document) -> Result<Vec<u8>, serde_json::Error> {
    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    serde::Serialize::serialize(document, &mut serializer)?;
    Ok(out)
}
