//! File type descriptors
//!
//! A [`FileTypeDescriptor`] is the immutable record behind every registered file
//! type: its id, display label, default icon and a [`FileTypeKind`] describing
//! how files of that type are opened. Text-like kinds carry a [`TextTraits`]
//! with the editor language hint and capability flags.

use crate::capability::{Capabilities, WordWrap};
use crate::icon::FileIcon;

/// Id of the generic plain text type. Every registry contains it.
pub const TEXT_TYPE_ID: &str = "text";

/// Id of the "open externally" type used when a file cannot be opened in the editor.
pub const BROWSER_TYPE_ID: &str = "browser";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextTraits {
    pub language: Option<&'static str>,
    pub capabilities: Capabilities,
    pub word_wrap: WordWrap,
}

impl TextTraits {
    pub const fn new(language: Option<&'static str>, capabilities: Capabilities) -> Self {
        Self {
            language,
            capabilities,
            word_wrap: WordWrap::Default,
        }
    }

    pub const fn with_word_wrap(mut self, word_wrap: WordWrap) -> Self {
        self.word_wrap = word_wrap;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileTypeKind {
    /// Plain text or source code.
    Text(TextTraits),
    /// Markdown, HTML and friends.
    WebContent(TextTraits),
    /// Serialized data, opened by loading it into the session.
    Data,
    /// Project file, opened by switching to the project.
    Project,
    /// Profiler output, shown in the profile viewer.
    Profiler,
    /// Anything handed to the browser (view or download).
    Browser,
}

/// What an "open" request does with a file of a given kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpenAction {
    Edit,
    LoadData,
    SwitchProject,
    ShowProfile,
    Browse,
}

impl FileTypeKind {
    pub fn text_traits(&self) -> Option<&TextTraits> {
        match self {
            FileTypeKind::Text(traits) | FileTypeKind::WebContent(traits) => Some(traits),
            _ => None,
        }
    }

    pub fn is_text(&self) -> bool {
        self.text_traits().is_some()
    }

    /// Kinds that may be handed to the source editor as-is.
    pub fn is_editable(&self) -> bool {
        self.is_text() || matches!(self, FileTypeKind::Profiler)
    }

    pub fn open_action(&self) -> OpenAction {
        match self {
            FileTypeKind::Text(_) | FileTypeKind::WebContent(_) => OpenAction::Edit,
            FileTypeKind::Data => OpenAction::LoadData,
            FileTypeKind::Project => OpenAction::SwitchProject,
            FileTypeKind::Profiler => OpenAction::ShowProfile,
            FileTypeKind::Browser => OpenAction::Browse,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileTypeDescriptor {
    id: &'static str,
    label: &'static str,
    icon: FileIcon,
    default_extension: Option<&'static str>,
    kind: FileTypeKind,
}

impl FileTypeDescriptor {
    pub const fn new(
        id: &'static str,
        label: &'static str,
        icon_name: &'static str,
        default_extension: Option<&'static str>,
        kind: FileTypeKind,
    ) -> Self {
        Self {
            id,
            label,
            icon: FileIcon::from_static(icon_name, label),
            default_extension,
            kind,
        }
    }

    pub const fn text(
        id: &'static str,
        label: &'static str,
        language: &'static str,
        extension: &'static str,
        icon_name: &'static str,
        capabilities: Capabilities,
    ) -> Self {
        Self::new(
            id,
            label,
            icon_name,
            Some(extension),
            FileTypeKind::Text(TextTraits::new(Some(language), capabilities)),
        )
    }

    pub const fn web_content(
        id: &'static str,
        label: &'static str,
        language: &'static str,
        extension: &'static str,
        icon_name: &'static str,
        capabilities: Capabilities,
    ) -> Self {
        Self::new(
            id,
            label,
            icon_name,
            Some(extension),
            FileTypeKind::WebContent(TextTraits::new(
                Some(language),
                capabilities.union(Capabilities::WEB_CONTENT),
            )),
        )
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn default_icon(&self) -> &FileIcon {
        &self.icon
    }

    pub fn default_extension(&self) -> Option<&'static str> {
        self.default_extension
    }

    pub fn kind(&self) -> &FileTypeKind {
        &self.kind
    }

    pub fn language(&self) -> Option<&'static str> {
        self.kind.text_traits().and_then(|t| t.language)
    }

    pub fn capabilities(&self) -> Capabilities {
        self.kind
            .text_traits()
            .map(|t| t.capabilities)
            .unwrap_or(Capabilities::NONE)
    }

    pub fn has_capability(&self, capability: Capabilities) -> bool {
        self.capabilities().contains(capability)
    }

    pub fn is_text(&self) -> bool {
        self.kind.is_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn web_content_always_carries_the_web_flag() {
        let md = FileTypeDescriptor::web_content(
            "markdown",
            "Markdown",
            "markdown",
            ".md",
            "text-markdown",
            Capabilities::CHECK_SPELLING,
        );
        assert!(md.has_capability(Capabilities::WEB_CONTENT));
        assert!(md.has_capability(Capabilities::CHECK_SPELLING));
        assert_eq!(md.kind().open_action(), OpenAction::Edit);
    }

    #[test]
    fn non_text_kinds_have_no_capabilities() {
        let project = FileTypeDescriptor::new("project", "Project", "x-project", Some(".Rproj"), FileTypeKind::Project);
        assert_eq!(project.capabilities(), Capabilities::NONE);
        assert!(!project.kind().is_editable());
        assert!(FileTypeKind::Profiler.is_editable());
        assert_eq!(project.default_icon().description(), "Project");
    }
}
