use std::{env, path::Path};

use gitobj::repo::on_disk::OnDisk;
use gitobj::repo::Result;

// Discover a git repo starting from the given path.
//
// Looks for a `.git` directory in the given path or the nearest
// of its ancestors, then validates the repository found there.
//
// Returns a `Result` with `gitobj::repo::on_disk::OnDisk` or
// `gitobj::repo::Error` if no such repo exists.
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<OnDisk> {
    OnDisk::discover(path)
}

// Discover a git repo starting from the current working directory.
#[cfg(not(tarpaulin_include))]
pub fn from_current_dir() -> Result<OnDisk> {
    let path = env::current_dir()?;
    from_path(path)
}
