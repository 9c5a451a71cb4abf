//! Atomic file writes shared by the config and layout stores.

use std::path::Path;

use tracing::warn;

/// Write `contents` to `path` through a `<ext>.tmp` sibling that is renamed
/// into place, creating parent directories. Falls back to writing `path`
/// directly if the rename fails.
pub fn write_atomic(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let tmp_path = match path.extension() {
        Some(ext) => path.with_extension(format!("{}.tmp", ext.to_string_lossy())),
        None => path.with_extension("tmp"),
    };
    std::fs::write(&tmp_path, contents)?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        warn!("atomic rename failed ({}), falling back to direct write", e);
        let _ = std::fs::remove_file(&tmp_path);
        std::fs::write(path, contents)?;
    }
    Ok(())
}
