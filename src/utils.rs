use crate::error::Error;
use crate::result::Result;
use std::fs;
use std::io;
use std::path::Path;

/// What a manifest entry turned out to be on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

impl EntryKind {
    /// Inspect `path`, following symlinks. Missing paths are reported as
    /// [`Error::ManifestEntryMissing`].
    pub fn of(path: &Path) -> Result<Self> {
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => Ok(EntryKind::Directory),
            Ok(_) => Ok(EntryKind::File),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(Error::ManifestEntryMissing(path.to_path_buf()))
            }
            Err(err) => Err(Error::copy(path, err)),
        }
    }
}

/// Copy a file or directory tree, choosing the strategy from the source type
pub fn copy_entry(source: &Path, destination: &Path) -> Result<EntryKind> {
    let kind = EntryKind::of(source)?;
    match kind {
        EntryKind::Directory => copy_dir(source, destination)?,
        EntryKind::File => {
            fs::copy(source, destination).map_err(|e| Error::copy(source, e))?;
        }
    }
    Ok(kind)
}

fn copy_dir(source: &Path, destination: &Path) -> Result<()> {
    fs::create_dir_all(destination).map_err(|e| Error::copy(destination, e))?;

    for entry in fs::read_dir(source).map_err(|e| Error::copy(source, e))? {
        let entry = entry.map_err(|e| Error::copy(source, e))?;
        let src_path = entry.path();
        let dst_path = destination.join(entry.file_name());

        if fs::metadata(&src_path)
            .map_err(|e| Error::copy(&src_path, e))?
            .is_dir()
        {
            copy_dir(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path).map_err(|e| Error::copy(&src_path, e))?;
        }
    }

    Ok(())
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Remove a directory tree if present and recreate it empty
pub fn reset_dir(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err.into()),
    }
    fs::create_dir_all(path)?;
    Ok(())
}
