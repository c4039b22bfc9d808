//! Filesystem infrastructure — implements `SiteFs` over `std::fs`.

use std::io::Write as _;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::application::ports::SiteFs;

/// Production filesystem implementation of `SiteFs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl SiteFs for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_symlink(&self, path: &Path) -> bool {
        std::fs::symlink_metadata(path).is_ok_and(|m| m.file_type().is_symlink())
    }

    fn read_link(&self, path: &Path) -> std::io::Result<PathBuf> {
        std::fs::read_link(path)
    }

    fn write(&self, path: &Path, content: &[u8]) -> std::io::Result<()> {
        std::fs::write(path, content)
    }

    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn remove_file(&self, path: &Path) -> std::io::Result<()> {
        std::fs::remove_file(path)
    }

    #[cfg(unix)]
    fn symlink(&self, target: &Path, link: &Path) -> std::io::Result<()> {
        std::os::unix::fs::symlink(target, link)
    }

    #[cfg(not(unix))]
    fn symlink(&self, _target: &Path, _link: &Path) -> std::io::Result<()> {
        Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "symlinks are only supported on unix",
        ))
    }

    fn append_locked(&self, path: &Path, content: &[u8]) -> std::io::Result<()> {
        let mut file = std::fs::OpenOptions::new().append(true).open(path)?;
        FileExt::lock_exclusive(&file)?;
        let written = file.write_all(content).and_then(|()| file.flush());
        // Unlock even if the write failed; the lock also drops with the handle.
        let _ = FileExt::unlock(&file);
        written
    }
}
