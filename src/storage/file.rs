//! JSON-file store
//!
//! Each key is a file `<dir>/<key>.json`. Writes go to a temporary file that is
//! renamed over the target so a crash never leaves a half-written record.

use super::{StorageError, Store};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Store backed by a directory of JSON files
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store rooted at `dir`; the directory is created on first write
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File that holds `key`
    ///
    /// # Errors
    /// Returns `StorageError::InvalidKey` for keys that could escape the directory.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }

    fn ensure_dir(&self) -> Result<(), StorageError> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(|source| StorageError::Io {
                path: self.dir.clone(),
                source,
            })?;
            debug!(dir = %self.dir.display(), "created data directory");
        }
        Ok(())
    }
}

impl Store for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        self.ensure_dir()?;

        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, value).map_err(|source| StorageError::Io {
            path: tmp_path.clone(),
            source,
        })?;
        fs::rename(&tmp_path, &path).map_err(|source| StorageError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(())
    }
}
