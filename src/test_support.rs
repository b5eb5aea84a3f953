use std::env;
use std::path::{Path, PathBuf};

/// Puts the working directory back when dropped, even if the test panicked.
/// Create it after any temp dir it may leave so it drops first.
pub(crate) struct CwdGuard {
    original: PathBuf,
}

impl CwdGuard {
    pub(crate) fn new() -> Self {
        Self {
            original: env::current_dir().expect("working directory is readable"),
        }
    }

    pub(crate) fn original(&self) -> &Path {
        &self.original
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.original);
    }
}
