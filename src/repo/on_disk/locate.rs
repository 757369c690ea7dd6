use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use super::GIT_DIR_NAME;
use crate::repo::{Error, Result};

/// Find the working directory of the repository containing `start`.
///
/// Equivalent to `locate_marker(start, ".git")`.
pub fn locate<P: AsRef<Path>>(start: P) -> Result<PathBuf> {
    locate_marker(start, GIT_DIR_NAME)
}

/// Find the nearest directory at or above `start` that contains a
/// directory named `marker`.
///
/// `start` is made absolute (relative paths are resolved against the current
/// working directory) and symlinks are resolved before searching. A file named
/// `marker` does not count.
///
/// Returns `Error::NotARepository` if the file system root is reached without
/// finding the marker. This function only looks for the marker directory; use
/// `OnDisk::new` or `OnDisk::discover` to validate what it finds.
pub fn locate_marker<P: AsRef<Path>>(start: P, marker: &str) -> Result<PathBuf> {
    let start = start.as_ref();
    let mut dir = fs::canonicalize(start)?;

    loop {
        trace!(dir = %dir.display(), marker, "probing");

        if dir.join(marker).is_dir() {
            debug!(start = %start.display(), found = %dir.display(), "located repository");
            return Ok(dir);
        }

        // `pop` fails only once we have reached the file system root.
        if !dir.pop() {
            return Err(Error::NotARepository(start.to_path_buf()));
        }
    }
}
