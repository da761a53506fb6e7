use crate::error::Error;
use crate::result::Result;
use std::fs::File;
use std::io;
use std::path::Path;
use walkdir::WalkDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Zip `root_dir/base_dir` into `output_path`.
///
/// Member names are relative to `root_dir`, so every member sits under the
/// single top-level directory `base_dir/`. Entries are written in file name
/// order. Returns the number of members written.
pub fn create_zip(root_dir: &Path, base_dir: &str, output_path: &Path) -> Result<usize> {
    let source_dir = root_dir.join(base_dir);
    if !source_dir.is_dir() {
        return Err(Error::archive_write(
            output_path,
            format!("{} is not a directory", source_dir.display()),
        ));
    }

    let file = File::create(output_path).map_err(|e| Error::archive_write(output_path, e))?;
    let mut zip = ZipWriter::new(file);

    let options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .unix_permissions(0o644);
    let dir_options = SimpleFileOptions::default().unix_permissions(0o755);

    let mut members = 0;
    for entry in WalkDir::new(&source_dir).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        let name = member_name(root_dir, path)?;

        if entry.file_type().is_dir() {
            zip.add_directory(format!("{}/", name), dir_options)
                .map_err(|e| Error::archive_write(output_path, e))?;
        } else {
            zip.start_file(name, options)
                .map_err(|e| Error::archive_write(output_path, e))?;
            let mut f = File::open(path).map_err(|e| Error::archive_write(output_path, e))?;
            io::copy(&mut f, &mut zip).map_err(|e| Error::archive_write(output_path, e))?;
        }
        members += 1;
    }

    zip.finish().map_err(|e| Error::archive_write(output_path, e))?;
    Ok(members)
}

/// Forward-slash separated path of `path` relative to `root_dir`
fn member_name(root_dir: &Path, path: &Path) -> Result<String> {
    let relative = path.strip_prefix(root_dir).map_err(|_| {
        Error::custom(format!(
            "{} is outside {}",
            path.display(),
            root_dir.display()
        ))
    })?;

    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Ok(parts.join("/"))
}
