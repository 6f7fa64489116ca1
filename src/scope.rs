//! The scoped directory where a ticket's files live.
//!
//! Both file names are derived from the ticket id alone, so concurrent runs
//! for distinct tickets never collide and a rerun for the same ticket
//! overwrites its previous document.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ScopeDir {
    root: PathBuf,
}

impl ScopeDir {
    /// Creates the directory if needed and resolves it to an absolute path.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        fs::create_dir_all(path).map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("Failed to create scope directory '{}': {}", path.display(), e),
            )
        })?;
        let root = path.canonicalize()?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<scope>/temp_qr_<id>.png`
    pub fn code_image_path(&self, ticket_id: &str) -> PathBuf {
        self.root.join(format!("temp_qr_{}.png", ticket_id))
    }

    /// `<scope>/ticket_<id>.pdf`
    pub fn document_path(&self, ticket_id: &str) -> PathBuf {
        self.root.join(format!("ticket_{}.pdf", ticket_id))
    }

    /// Writes the transient code image. The returned guard deletes the file
    /// when cleaned up explicitly or when dropped on an error path.
    pub fn stage_code_image(&self, ticket_id: &str, png: &[u8]) -> io::Result<StagedFile> {
        let path = self.code_image_path(ticket_id);
        fs::write(&path, png)?;
        log::info!("QR code saved to: {}", path.display());
        Ok(StagedFile { path, released: false })
    }
}

/// A transient file owned by one pipeline run.
#[derive(Debug)]
pub struct StagedFile {
    path: PathBuf,
    released: bool,
}

impl StagedFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> io::Result<Vec<u8>> {
        fs::read(&self.path)
    }

    /// Deletes the file. A file that is already gone is not an error.
    pub fn cleanup(mut self) -> io::Result<()> {
        self.released = true;
        if remove_if_exists(&self.path)? {
            log::info!("Temporary QR code file cleaned up");
        } else {
            log::debug!("Temporary QR code file already absent: {}", self.path.display());
        }
        Ok(())
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        match remove_if_exists(&self.path) {
            Ok(true) => log::debug!("Removed orphaned code image {}", self.path.display()),
            Ok(false) => {}
            Err(e) => log::warn!("Could not remove code image {}: {}", self.path.display(), e),
        }
    }
}

/// Returns whether a file was actually removed.
pub fn remove_if_exists(path: &Path) -> io::Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}
