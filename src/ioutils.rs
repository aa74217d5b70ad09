use std::path::Path;

use crate::error::{Error, Result};

/// Writes `content` to `dest_path`, creating parent directories as needed.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();

    if let Some(parent) = dest_path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| Error::WriteError {
            path: dest_path.display().to_string(),
            source,
        })?;
    }

    std::fs::write(dest_path, content).map_err(|source| Error::WriteError {
        path: dest_path.display().to_string(),
        source,
    })
}
