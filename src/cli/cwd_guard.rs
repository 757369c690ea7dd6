use std::{
    env,
    path::{Path, PathBuf},
};

/// Switches the process working directory for the lifetime of the guard.
///
/// `cat-file` and `hash-object -w` find their repository from the working
/// directory, so their tests need to run from inside a scratch repository.
/// The working directory is process-wide: tests using this guard must be
/// marked `#[serial]`. Failures panic since this only runs under test.
pub(crate) struct CwdGuard {
    restore_to: PathBuf,
}

impl CwdGuard {
    pub fn enter<P: AsRef<Path>>(dir: P) -> CwdGuard {
        let restore_to = env::current_dir().unwrap();
        env::set_current_dir(dir).unwrap();
        CwdGuard { restore_to }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        env::set_current_dir(&self.restore_to).unwrap();
    }
}
