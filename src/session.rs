/// Session-wide policy consulted when a file cannot be opened in the editor.
pub trait SessionPolicy: Send + Sync {
    /// Whether files may be downloaded / opened in the browser.
    fn allow_file_downloads(&self) -> bool;
}

/// A fixed policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticPolicy {
    pub allow_file_downloads: bool,
}

impl StaticPolicy {
    pub fn new(allow_file_downloads: bool) -> Self {
        Self { allow_file_downloads }
    }
}

impl Default for StaticPolicy {
    fn default() -> Self {
        Self::new(true)
    }
}

impl SessionPolicy for StaticPolicy {
    fn allow_file_downloads(&self) -> bool {
        self.allow_file_downloads
    }
}

/// Prefix shared by the names of satellite windows that host source editors.
pub const SOURCE_WINDOW_PREFIX: &str = "_rstudio_satellite_source_window_";

/// Window the opener runs in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WindowRole {
    #[default]
    Main,
    Satellite { name: String },
}

impl WindowRole {
    pub fn satellite(name: impl Into<String>) -> Self {
        WindowRole::Satellite { name: name.into() }
    }

    /// Whether edit requests must be forwarded to the main window instead of
    /// being handled here. Source satellites edit locally.
    pub fn forwards_edits(&self) -> bool {
        match self {
            WindowRole::Main => false,
            WindowRole::Satellite { name } => !name.starts_with(SOURCE_WINDOW_PREFIX),
        }
    }
}
