use std::fs;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::trace;

use super::FilePlan;
use crate::error::{Result, ScaffoldError};

/// The two filesystem operations plan application needs.
pub trait Filesystem {
    fn create_dir_all(&mut self, path: &Utf8Path) -> io::Result<()>;
    fn write(&mut self, path: &Utf8Path, contents: &[u8]) -> io::Result<()>;
}

/// Writes straight to disk, truncating existing files.
#[derive(Debug, Default)]
pub struct LocalFilesystem;

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&mut self, path: &Utf8Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn write(&mut self, path: &Utf8Path, contents: &[u8]) -> io::Result<()> {
        fs::write(path, contents)
    }
}

/// Reports what would be written without touching the disk.
#[derive(Debug, Default)]
pub struct DryRunFilesystem;

impl Filesystem for DryRunFilesystem {
    fn create_dir_all(&mut self, _path: &Utf8Path) -> io::Result<()> {
        Ok(())
    }

    fn write(&mut self, path: &Utf8Path, _contents: &[u8]) -> io::Result<()> {
        println!("[dry-run] would create {}", path);
        Ok(())
    }
}

/// Write every plan entry under `base`, in plan order.
///
/// Stops at the first failure. Entries written before it stay on disk.
pub fn apply_plan<F: Filesystem>(base: &Utf8Path, plan: &FilePlan, fs: &mut F) -> Result<usize> {
    let mut written = 0;
    for (relative, content) in plan.iter() {
        let target = ensure_parent(fs, base, relative)?;
        fs.write(&target, content.as_bytes())
            .map_err(|source| ScaffoldError::Filesystem {
                action: "writing",
                path: target.clone(),
                source,
            })?;
        trace!(path = %target, bytes = content.len(), "wrote scaffold file");
        written += 1;
    }
    Ok(written)
}

/// Resolve `relative` against `base` and create its missing ancestors.
fn ensure_parent<F: Filesystem>(fs: &mut F, base: &Utf8Path, relative: &Utf8Path) -> Result<Utf8PathBuf> {
    let target = base.join(relative);
    if let Some(parent) = target.parent().filter(|p| !p.as_str().is_empty()) {
        fs.create_dir_all(parent)
            .map_err(|source| ScaffoldError::Filesystem {
                action: "creating directory",
                path: parent.to_owned(),
                source,
            })?;
    }
    Ok(target)
}
