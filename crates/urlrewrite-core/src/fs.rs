//! Filesystem collaborator used by file-backed rule stores.

use std::io;
use std::path::Path;

pub trait Filesystem: Send + Sync {
    fn file_available(&self, path: &Path) -> bool;
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
    /// Deleting a file that does not exist succeeds.
    fn file_delete(&self, path: &Path) -> io::Result<()>;
    fn file_write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

impl<F: Filesystem + ?Sized> Filesystem for std::sync::Arc<F> {
    fn file_available(&self, path: &Path) -> bool {
        (**self).file_available(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        (**self).read_to_string(path)
    }

    fn file_delete(&self, path: &Path) -> io::Result<()> {
        (**self).file_delete(path)
    }

    fn file_write(&self, path: &Path, contents: &str) -> io::Result<()> {
        (**self).file_write(path, contents)
    }
}

/// The local disk via `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl Filesystem for LocalFilesystem {
    fn file_available(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn file_delete(&self, path: &Path) -> io::Result<()> {
        match std::fs::remove_file(path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }

    fn file_write(&self, path: &Path, contents: &str) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)
    }
}
