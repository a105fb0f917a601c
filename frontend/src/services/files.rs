//! Browser files and their previews.

use papercheck::FileMeta;
use web_sys::{File, FileList, Url};

/// A file chosen through the picker or dropped on the page.
#[derive(Debug, Clone)]
pub struct BrowserFile(pub File);

impl FileMeta for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn size(&self) -> u64 {
        // `File.size` is a JS number; sizes are whole bytes.
        self.0.size() as u64
    }

    fn mime_type(&self) -> String {
        self.0.type_()
    }
}

/// Collect the files of a `FileList`, in order.
pub fn files_from_list(list: &FileList) -> Vec<BrowserFile> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(BrowserFile)
        .collect()
}

/// Object URL pointing at a file's bytes. Revoked when dropped.
#[derive(Debug)]
pub struct ObjectUrl(String);

impl ObjectUrl {
    /// Preview factory for the upload session.
    pub fn for_file(file: &BrowserFile) -> Option<Self> {
        match Url::create_object_url_with_blob(&file.0) {
            Ok(url) => Some(Self(url)),
            Err(e) => {
                log::warn!("No preview for {}: {:?}", file.0.name(), e);
                None
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if let Err(e) = Url::revoke_object_url(&self.0) {
            log::warn!("Failed to revoke {}: {:?}", self.0, e);
        }
    }
}
