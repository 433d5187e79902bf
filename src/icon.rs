//! File icons
//!
//! Icons are referenced by name, following the freedesktop.org Icon Naming
//! Specification where a standard name exists (`folder`, `text-x-generic`,
//! `image-x-generic`, ...). The description is the human readable label shown
//! next to the icon (tooltips, accessibility text).

use std::borrow::Cow;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileIcon {
    name: Cow<'static, str>,
    description: Cow<'static, str>,
}

impl FileIcon {
    pub const fn from_static(name: &'static str, description: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            description: Cow::Borrowed(description),
        }
    }

    pub fn new(name: impl Into<Cow<'static, str>>, description: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Same image, different label.
    pub fn with_description(&self, description: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: self.name.clone(),
            description: description.into(),
        }
    }

    pub const TEXT: FileIcon = FileIcon::from_static("text-x-generic", "Text file");
    pub const FOLDER: FileIcon = FileIcon::from_static("folder", "Folder");
    pub const PUBLIC_FOLDER: FileIcon = FileIcon::from_static("folder-publicshare", "Public Folder");
    pub const PDF: FileIcon = FileIcon::from_static("application-pdf", "PDF");
    pub const CSV: FileIcon = FileIcon::from_static("text-csv", "CSV");
    pub const WORD: FileIcon = FileIcon::from_static("x-office-document", "DOCX");
    pub const POWERPOINT: FileIcon = FileIcon::from_static("x-office-presentation", "PPTX");
}

impl fmt::Display for FileIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

