//! Files on the local filesystem, as offered by the CLI.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::policy::{mime_for_extension, FileMeta};

/// A local file with the metadata a browser picker would report.
///
/// The declared MIME type comes from the extension; the bytes are never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    path: PathBuf,
    name: String,
    size: u64,
    mime_type: String,
}

impl LocalFile {
    /// Read metadata for `path`. Fails if it does not exist or is not a file.
    pub fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let metadata = fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("not a regular file: {}", path.display()),
            ));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        Ok(Self {
            path: path.to_path_buf(),
            name,
            size: metadata.len(),
            mime_type: mime_for_extension(ext).to_string(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FileMeta for LocalFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }
}
