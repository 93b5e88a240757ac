//! Plain-text downloads.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

/// A plain-text file offered for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDownload {
    filename: String,
    text: String,
}

impl TextDownload {
    /// Describe a download of `text` saved as `filename`.
    pub fn new(filename: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            text: text.into(),
        }
    }

    /// Suggested file name.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// File contents.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// `data:` URL carrying the text, for use as a link target.
    ///
    /// The text is appended as-is, without percent-encoding.
    #[must_use]
    pub fn href(&self) -> String {
        format!("data:text/plain;charset=utf-8,{}", self.text)
    }

    /// Write the text to `dir/filename` and return the written path.
    ///
    /// An existing file with the same name is overwritten.
    ///
    /// # Errors
    ///
    /// Fails with [`io::ErrorKind::InvalidInput`] if the file name is empty or
    /// contains a path separator, and with the underlying I/O error if the
    /// write fails.
    pub fn save_to(&self, dir: impl AsRef<Path>) -> io::Result<PathBuf> {
        let name = Path::new(&self.filename);
        let is_plain_name = !self.filename.is_empty()
            && name.file_name().is_some_and(|f| f == name.as_os_str());
        if !is_plain_name {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("download file name {:?} is not a plain file name", self.filename),
            ));
        }

        let path = dir.as_ref().join(name);
        fs::write(&path, &self.text)?;
        info!(path = %path.display(), bytes = self.text.len(), "text download saved");
        Ok(path)
    }
}
