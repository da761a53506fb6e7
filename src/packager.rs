use crate::archive;
use crate::config::Config;
use crate::context::Context;
use crate::error::Error;
use crate::result::Result;
use crate::utils::{self, EntryKind};
use std::path::{Path, PathBuf};

/// Stages the manifest entries and zips them into a workshop archive
pub struct Packager<'a> {
    ctx: &'a Context,
    config: &'a Config,
}

impl<'a> Packager<'a> {
    pub fn new(ctx: &'a Context, config: &'a Config) -> Self {
        Self { ctx, config }
    }

    pub fn build_dir(&self) -> PathBuf {
        self.ctx.resolve(&self.config.build_dir)
    }

    /// `<build-dir>/<author>_<name>_1`
    pub fn staging_dir(&self) -> PathBuf {
        self.build_dir().join(self.config.identity.staging_dir_name())
    }

    pub fn archive_path(&self) -> PathBuf {
        self.ctx
            .resolve(&self.config.dist_dir)
            .join(self.config.archive_name())
    }

    /// Reset staging, copy every entry, write the archive.
    /// Returns the path of the written archive.
    pub fn build(&self) -> Result<PathBuf> {
        let sources = self.check_sources()?;
        self.reset_staging()?;
        self.populate(&sources)?;
        self.archive()
    }

    /// Resolve every manifest entry; fails on the first one that is missing.
    fn check_sources(&self) -> Result<Vec<(PathBuf, EntryKind)>> {
        self.config
            .files
            .iter()
            .map(|file| -> Result<(PathBuf, EntryKind)> {
                let source = self.ctx.resolve(file);
                let kind = EntryKind::of(&source)?;
                Ok((source, kind))
            })
            .collect()
    }

    fn reset_staging(&self) -> Result<()> {
        let staging = self.staging_dir();
        self.ctx.remark(format!("Resetting {}", staging.display()))?;
        utils::reset_dir(&staging)?;
        utils::ensure_dir(&self.ctx.resolve(&self.config.dist_dir))?;
        Ok(())
    }

    fn populate(&self, sources: &[(PathBuf, EntryKind)]) -> Result<()> {
        let staging = self.staging_dir();
        for (source, kind) in sources {
            let dest = staging.join(base_name(source)?);
            self.ctx.remark(format!(
                "Copying {} {} to {}",
                kind_label(*kind),
                source.display(),
                dest.display()
            ))?;
            utils::copy_entry(source, &dest)?;
        }
        Ok(())
    }

    fn archive(&self) -> Result<PathBuf> {
        let output = self.archive_path();
        let members = archive::create_zip(
            &self.build_dir(),
            &self.config.identity.staging_dir_name(),
            &output,
        )?;
        self.ctx.remark(format!("Wrote {} members to {}", members, output.display()))?;
        Ok(output)
    }
}

fn base_name(path: &Path) -> Result<&std::ffi::OsStr> {
    path.file_name().ok_or_else(|| {
        Error::InvalidConfig(format!("entry `{}` has no base name", path.display()))
    })
}

fn kind_label(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Directory => "directory",
        EntryKind::File => "file",
    }
}
