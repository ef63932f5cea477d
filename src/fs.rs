//! Filesystem operations used while scaffolding.

use std::{fs, path::Path};

use crate::{error::Error, report::Reporter, Result};

/// Creates `path` unless a directory is already there, in which case a
/// warning is emitted and nothing happens. The parent must exist.
pub fn make_directory(reporter: &Reporter, path: &Path) -> Result<()> {
    if path.is_dir() {
        reporter.warn(format!(
            "Directory '{}' already exist, skipping…",
            path.display()
        ));
        return Ok(());
    }

    fs::create_dir(path).map_err(|source| Error::DirectoryCreationFailed {
        path: path.to_path_buf(),
        source,
    })?;
    reporter.success(format!(
        "Directory '{}' has been successfully made.",
        path.display()
    ));

    Ok(())
}

pub fn write_file(reporter: &Reporter, path: &Path, content: impl AsRef<[u8]>) -> Result<()> {
    fs::write(path, content).map_err(|source| Error::FileWriteFailed {
        path: path.to_path_buf(),
        source,
    })?;
    reporter.success(format!(
        "File '{}' has been successfully written.",
        path.display()
    ));

    Ok(())
}

pub fn copy_file(reporter: &Reporter, source: &Path, destination: &Path) -> Result<()> {
    fs::copy(source, destination).map_err(|err| Error::FileCopyFailed {
        from: source.to_path_buf(),
        to: destination.to_path_buf(),
        source: err,
    })?;
    reporter.success(format!(
        "File has been successfully copied from '{}' to '{}'.",
        source.display(),
        destination.display()
    ));

    Ok(())
}
