
use std::path::Path;

use anyhow::{bail, Result};
use filetime::FileTime;
use log::debug;
use walkdir::WalkDir;

/**
 * Exists only so I can mock away fs operations.
 */
#[cfg_attr(test, faux::create)]
pub struct Fs {}

#[cfg_attr(test, faux::methods)]
impl Fs {
    //see https://github.com/nrxus/faux/issues/18
    pub fn new() -> Self { Fs {} }

    pub fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    pub fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    /// Copies the content of `source` into `destination`, creating it (and its parents).
    /// Contents, permissions and access/modification times are kept.
    /// Returns the number of bytes copied.
    pub fn copy_tree(&self, source: &Path, destination: &Path) -> Result<u64> {
        let copy_options = fs_extra::dir::CopyOptions {
            copy_inside: true,
            content_only: true,
            ..Default::default()
        };
        match fs_extra::dir::copy(source, destination, &copy_options) {
            Err(error) => bail!("Could not copy dir {:?} to {:?}\n  {}", source, destination, error),
            Ok(bytes) => {
                debug!("copied {} bytes from {:?} to {:?}", bytes, source, destination);
                copy_times(source, destination)?;
                Ok(bytes)
            }
        }
    }
}

/// fs_extra only carries contents and permissions over.
/// Directories come after their content, so setting file times can't bump them again.
fn copy_times(source: &Path, destination: &Path) -> Result<()> {
    for entry in WalkDir::new(source).follow_links(true).contents_first(true) {
        let entry = match entry {
            Err(error) => bail!("Could not walk {:?}\n  {}", source, error),
            Ok(entry) => entry,
        };
        let relative = entry.path().strip_prefix(source)?;
        let target = destination.join(relative);
        let metadata = std::fs::metadata(entry.path())?;
        let atime = FileTime::from_last_access_time(&metadata);
        let mtime = FileTime::from_last_modification_time(&metadata);
        if let Err(error) = filetime::set_file_times(&target, atime, mtime) {
            bail!("Could not set times of {:?}\n  {}", target, error);
        }
    }
    Ok(())
}
