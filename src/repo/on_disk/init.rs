use std::fs;
use std::path::Path;

use tracing::debug;

use super::{OnDisk, CONFIG_FILE_NAME, GIT_DIR_NAME, OBJECTS_DIR_NAME};
use crate::repo::config::Config;
use crate::repo::{Error, Result};

impl OnDisk {
    /// Creates a new, empty git repository on the local file system.
    ///
    /// `work_dir` must either not exist yet (it will be created) or be an
    /// empty directory. Nothing is written until that has been checked.
    ///
    /// If a later step fails, whatever was created up to that point is left
    /// in place and the first error is returned.
    ///
    /// Analogous to [`git init`](https://git-scm.com/docs/git-init).
    pub fn init<P: AsRef<Path>>(work_dir: P) -> Result<Self> {
        let work_dir = work_dir.as_ref();

        if work_dir.exists() {
            if !work_dir.is_dir() {
                return Err(Error::TargetNotADirectory(work_dir.to_path_buf()));
            }
            if fs::read_dir(work_dir)?.next().is_some() {
                return Err(Error::TargetNotEmpty(work_dir.to_path_buf()));
            }
        } else {
            fs::create_dir_all(work_dir)?;
        }

        let git_dir = work_dir.join(GIT_DIR_NAME);
        fs::create_dir(&git_dir)?;

        create_dirs(&git_dir)?;
        create_description(&git_dir)?;
        create_head(&git_dir)?;
        create_config(&git_dir)?;

        debug!(work_dir = %work_dir.display(), "initialized empty repository");

        OnDisk::new(work_dir)
    }
}

fn create_dirs(git_dir: &Path) -> Result<()> {
    fs::create_dir_all(git_dir.join("branches"))?;
    fs::create_dir_all(git_dir.join(OBJECTS_DIR_NAME))?;
    fs::create_dir_all(git_dir.join("refs/tags"))?;
    fs::create_dir_all(git_dir.join("refs/heads")).map_err(|e| e.into())
}

fn create_description(git_dir: &Path) -> Result<()> {
    let desc_path = git_dir.join("description");
    let desc_txt = "Unnamed repository; edit this file 'description' to name the repository.\n";

    fs::write(desc_path, desc_txt).map_err(|e| e.into())
}

fn create_head(git_dir: &Path) -> Result<()> {
    let head_path = git_dir.join("HEAD");
    let head_txt = "ref: refs/heads/master\n";

    fs::write(head_path, head_txt).map_err(|e| e.into())
}

fn create_config(git_dir: &Path) -> Result<()> {
    let mut file = fs::File::create(git_dir.join(CONFIG_FILE_NAME))?;
    Config::new_repo().write_to(&mut file)?;
    Ok(())
}
