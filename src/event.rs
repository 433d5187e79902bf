use std::path::PathBuf;

use crate::file_type::OpenAction;

/// One-based line and column in a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FilePosition {
    pub line: u32,
    pub column: u32,
}

impl FilePosition {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NavigationMethod {
    #[default]
    Default,
    HighlightLine,
}

/// Events published by [`FileOpener`](crate::opener::FileOpener).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileTypeEvent {
    /// Open `path` as `type_id`.
    Open {
        path: PathBuf,
        type_id: &'static str,
        action: OpenAction,
        position: Option<FilePosition>,
        navigation: NavigationMethod,
    },
    /// Ask the owning (main) window to edit the file.
    EditInMainWindow {
        path: PathBuf,
        position: Option<FilePosition>,
        highlight_line: bool,
    },
    /// The file could not be opened in the editor and downloads are disabled.
    DownloadNotPermitted {
        path: PathBuf,
        caption: String,
        message: String,
    },
}
