// Whole-file JSON store, one file per collection

use crate::error::{Error, Result};
use crate::record::Record;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File-backed store holding one JSON array per collection.
///
/// The unit of I/O is the whole collection: `load` reads and parses the
/// entire file, `save` replaces it. No state is cached between calls and no
/// locking is performed, so overlapping read-modify-write cycles race and
/// the last writer wins.
#[derive(Debug, Clone)]
pub struct Store {
    data_dir: PathBuf,
}

impl Store {
    /// Open or create a store rooted at the given path.
    ///
    /// Collections live in a `data` subdirectory of the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data_dir = path.as_ref().join("data");
        let store = Self { data_dir };
        store.ensure_data_dir()?;
        Ok(store)
    }

    /// Get the data directory of this store
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the collection file for `collection`
    pub fn collection_path(&self, collection: &str) -> PathBuf {
        self.data_dir.join(format!("{collection}.json"))
    }

    // Safe to call before every read and write; create_dir_all is a no-op
    // once the directory exists.
    fn ensure_data_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir).map_err(|source| Error::WriteFailed {
            path: self.data_dir.clone(),
            source,
        })
    }

    /// Load every record of the collection for `T`.
    ///
    /// A collection that has never been written reads as empty. Any other
    /// read or parse failure is fatal for the calling operation.
    pub fn load<T: Record>(&self) -> Result<Vec<T>> {
        self.ensure_data_dir()?;

        let path = self.collection_path(T::collection_name());
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(
                    collection = T::collection_name(),
                    "collection file absent, treating as empty"
                );
                return Ok(Vec::new());
            }
            Err(source) => return Err(Error::ReadFailed { path, source }),
        };

        let records: Vec<T> =
            serde_json::from_str(&raw).map_err(|source| Error::Corrupt { path, source })?;

        debug!(
            collection = T::collection_name(),
            count = records.len(),
            "loaded collection"
        );

        Ok(records)
    }

    /// Replace the persisted collection for `T` with exactly `records`.
    ///
    /// The new contents are written to a sibling temp file and renamed into
    /// place, so a failed save leaves the previous file untouched. Writers
    /// are not coordinated with each other: a save started from a stale
    /// load silently clobbers whatever landed in between.
    pub fn save<T: Record>(&self, records: &[T]) -> Result<()> {
        self.ensure_data_dir()?;

        let path = self.collection_path(T::collection_name());
        let json = serde_json::to_string_pretty(records).map_err(|source| Error::Encode {
            path: path.clone(),
            source,
        })?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|source| Error::WriteFailed {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| Error::WriteFailed {
            path: path.clone(),
            source,
        })?;

        debug!(
            collection = T::collection_name(),
            count = records.len(),
            "saved collection"
        );

        Ok(())
    }
}
