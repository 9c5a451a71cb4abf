use std::path::{Path, PathBuf};

use dockhost_common::{write_atomic, PersistError};
use dockhost_layout::ResolvedLayoutConfig;
use tracing::debug;

use super::{decode, encode, LayoutPersistence};

/// One JSON file per storage key, `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct JsonFilePersistence {
    path: PathBuf,
}

impl JsonFilePersistence {
    pub fn new(directory: impl AsRef<Path>, storage_key: &str) -> Self {
        Self {
            path: directory.as_ref().join(format!("{storage_key}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, path: &Path, source: std::io::Error) -> PersistError {
        PersistError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl LayoutPersistence for JsonFilePersistence {
    fn patch(&self, layout: &ResolvedLayoutConfig) -> Result<(), PersistError> {
        let raw = encode(layout)?;

        write_atomic(&self.path, &raw).map_err(|e| self.io_error(&self.path, e))?;

        debug!(path = %self.path.display(), "layout saved");
        Ok(())
    }

    fn load(&self) -> Result<Option<ResolvedLayoutConfig>, PersistError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw =
            std::fs::read_to_string(&self.path).map_err(|e| self.io_error(&self.path, e))?;
        decode(&raw).map(Some)
    }

    fn remove(&self) -> Result<(), PersistError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "stored layout removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(&self.path, e)),
        }
    }
}
