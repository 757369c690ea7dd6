//! A repository that stores objects on the local file system.
//!
//! The `.git` layout is the one command-line git uses, so a repository
//! created here can be read by `git cat-file` and vice versa. Only loose
//! objects are supported; pack files are never read or written.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::config::{Config, REPOSITORY_FORMAT_VERSION};
use super::{Error, Repo, Result};
use crate::object::{Id, Object};

mod init;

mod locate;
pub use locate::{locate, locate_marker};

mod loose;

/// Name of the directory that marks the top of a working tree.
pub const GIT_DIR_NAME: &str = ".git";

/// Name of the config file within the `.git` directory.
pub const CONFIG_FILE_NAME: &str = "config";

/// Name of the object database directory within the `.git` directory.
pub const OBJECTS_DIR_NAME: &str = "objects";

/// Implementation of `Repo` backed by a `.git` directory.
///
/// Holding an `OnDisk` means the repository was found and its config
/// declared a supported format version when it was opened.
#[derive(Debug)]
pub struct OnDisk {
    work_dir: PathBuf,
    git_dir: PathBuf,
    config: Config,
}

impl OnDisk {
    /// Open an existing on-disk git repository.
    ///
    /// `work_dir` should be the top-level working directory. A `.git` directory should
    /// exist at this path and contain a config file that declares repository format
    /// version 0. Use `init` to create an empty on-disk repository if necessary,
    /// or `discover` to search for the working directory.
    pub fn new<P: AsRef<Path>>(work_dir: P) -> Result<Self> {
        let work_dir = work_dir.as_ref().to_path_buf();

        let git_dir = work_dir.join(GIT_DIR_NAME);
        if !git_dir.is_dir() {
            return Err(Error::NotARepository(work_dir));
        }

        let config_path = git_dir.join(CONFIG_FILE_NAME);
        let config = read_config(&config_path)?;

        let version = config
            .repository_format_version()
            .map_err(|err| Error::config(config_path.clone(), err))?;

        if version != REPOSITORY_FORMAT_VERSION {
            return Err(Error::UnsupportedVersion {
                path: config_path,
                version,
            });
        }

        debug!(work_dir = %work_dir.display(), "opened repository");

        Ok(OnDisk {
            work_dir,
            git_dir,
            config,
        })
    }

    /// Find and open the repository containing `start`.
    ///
    /// This searches `start` and then each of its ancestors for a `.git`
    /// directory (see `locate`) and opens the nearest one found.
    pub fn discover<P: AsRef<Path>>(start: P) -> Result<Self> {
        let work_dir = locate(start)?;
        OnDisk::new(work_dir)
    }

    /// Return the working directory for this repo.
    pub fn work_dir(&self) -> &Path {
        self.work_dir.as_path()
    }

    /// Return the path to the `.git` directory.
    pub fn git_dir(&self) -> &Path {
        self.git_dir.as_path()
    }

    /// Return the path to the object database.
    pub fn objects_dir(&self) -> PathBuf {
        self.git_dir.join(OBJECTS_DIR_NAME)
    }

    /// Return the repository's config as it was when the repository was opened.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Repo for OnDisk {
    fn put_object(&mut self, object: &Object) -> Result<Id> {
        self.put_loose_object(object)
    }

    fn get_object(&self, id: &Id) -> Result<Object> {
        self.get_loose_object(id)
    }

    fn has_object(&self, id: &Id) -> bool {
        self.loose_object_path(id).is_file()
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let malformed = |reason: String| Error::ConfigMissingOrMalformed {
        path: path.to_path_buf(),
        reason,
    };

    let text = fs::read_to_string(path).map_err(|err| malformed(err.to_string()))?;
    Config::parse(&text).map_err(|err| malformed(err.to_string()))
}

#[cfg(test)]
mod tests;
