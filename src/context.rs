use crate::result::Result;
use std::path::{Path, PathBuf};

/// Context passed throughout a packaging run
#[derive(Clone)]
pub struct Context {
    /// Log every staged entry
    pub verbose: bool,

    /// Directory the manifest entries and output folders are relative to
    pub base_dir: PathBuf,
}

impl Context {
    pub fn new(base_dir: PathBuf, verbose: bool) -> Self {
        Self { verbose, base_dir }
    }

    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.base_dir.join(path)
    }

    /// Emit a progress line in verbose mode only.
    pub fn remark(&self, msg: impl std::fmt::Display) -> Result<()> {
        if self.verbose {
            cliclack::log::remark(msg)?;
        }
        Ok(())
    }
}
