//! Filesystem entries handed to the registry
//!
//! A [`FileItem`] is the resolver's view of a file: a path, whether it is a
//! directory, and whether that directory is the user's public share folder.
//! Items can be built directly, from a `file://` URI, or by querying the local
//! filesystem.

use std::path::{Path, PathBuf};

use directories::UserDirs;
use percent_encoding::percent_decode_str;
use tokio::fs;

use crate::error::{ErrorKind, FtregError, FtregResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileItem {
    path: PathBuf,
    name: String,
    kind: EntryKind,
    public: bool,
}

impl FileItem {
    fn with_kind(path: PathBuf, kind: EntryKind) -> Self {
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "/".to_string());
        Self {
            path,
            name,
            kind,
            public: false,
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::with_kind(path.into(), EntryKind::File)
    }

    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self::with_kind(path.into(), EntryKind::Directory)
    }

    /// Marks a directory as the public share folder.
    pub fn public_folder(path: impl Into<PathBuf>) -> Self {
        let mut item = Self::directory(path);
        item.public = true;
        item
    }

    /// Builds a regular file item from a `file://` URI, decoding percent escapes.
    pub fn from_uri(uri: &str) -> FtregResult<Self> {
        let encoded = uri.strip_prefix("file://").ok_or_else(|| {
            FtregError::new(ErrorKind::InvalidArg, format!("Not a file URI: {}", uri))
        })?;
        let decoded = percent_decode_str(encoded).decode_utf8().map_err(|e| {
            FtregError::with_source(
                ErrorKind::InvalidArg,
                format!("Invalid UTF-8 in URI: {}", uri),
                Box::new(e),
            )
        })?;
        Ok(Self::file(decoded.into_owned()))
    }

    /// Builds an item by querying the filesystem. Directories equal to the
    /// user's XDG public share directory are flagged as public folders.
    pub async fn from_path(path: impl AsRef<Path>) -> FtregResult<Self> {
        let path = path.as_ref();
        let metadata = fs::metadata(path).await?;

        if !metadata.is_dir() {
            return Ok(Self::file(path));
        }

        let is_public = UserDirs::new()
            .and_then(|dirs| dirs.public_dir().map(|p| p == path))
            .unwrap_or(false);
        if is_public {
            Ok(Self::public_folder(path))
        } else {
            Ok(Self::directory(path))
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Base name of the entry.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_public_folder(&self) -> bool {
        self.is_directory() && self.public
    }

    /// Guesses the MIME type from the file name, returning `default` when
    /// the extension is unknown.
    pub fn mime_type<'a>(&self, default: &'a str) -> &'a str {
        if self.is_directory() {
            return "inode/directory";
        }
        match mime_guess::from_path(&self.path).first_raw() {
            Some(mime) => mime,
            None => default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_the_last_component() {
        assert_eq!(FileItem::file("/home/user/Makefile").name(), "Makefile");
        assert_eq!(FileItem::directory("/").name(), "/");
    }

    #[test]
    fn from_uri_decodes_escapes() {
        let item = FileItem::from_uri("file:///tmp/my%20notes.Rmd").unwrap();
        assert_eq!(item.path(), Path::new("/tmp/my notes.Rmd"));
        assert_eq!(item.name(), "my notes.Rmd");
        assert!(!item.is_directory());
    }

    #[test]
    fn from_uri_rejects_other_schemes() {
        let err = FileItem::from_uri("sftp://host/file.R").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArg);
    }

    #[test]
    fn public_flag_only_applies_to_directories() {
        assert!(FileItem::public_folder("/home/user/Public").is_public_folder());
        assert!(!FileItem::directory("/home/user/Public").is_public_folder());
    }

    #[test]
    fn mime_type_falls_back_to_default() {
        assert_eq!(FileItem::file("a.png").mime_type("text/plain"), "image/png");
        assert_eq!(FileItem::file("a.xyz123").mime_type("text/plain"), "text/plain");
        assert_eq!(FileItem::directory("src").mime_type("text/plain"), "inode/directory");
    }
}
