//! Open/edit dispatch
//!
//! [`FileOpener`] turns "open this file" and "edit this file" requests into
//! [`FileTypeEvent`]s. It owns no UI: subscribers of the event channel do the
//! actual opening.
//!
//! Opening a file with a registered type is decided synchronously. Otherwise a
//! single [`TextProbe`] request decides between plain text and the default
//! action (open in the browser, or report that downloads are disabled). Probe
//! failures are logged and treated like a "not text" answer.

use std::sync::Arc;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::event::{FilePosition, FileTypeEvent, NavigationMethod};
use crate::file_item::FileItem;
use crate::file_type::{FileTypeDescriptor, BROWSER_TYPE_ID};
use crate::probe::TextProbe;
use crate::registry::FileTypeRegistry;
use crate::session::{SessionPolicy, WindowRole};

pub const DOWNLOAD_ERROR_CAPTION: &str = "Download Error";
pub const DOWNLOAD_ERROR_MESSAGE: &str = "Unable to show file because file downloads are restricted on this server.";

/// Outcome of an open request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenDecision {
    /// Opened with a registered type, without probing.
    Registered(&'static str),
    /// No registration matched; the probe reported text.
    ProbedText,
    /// Handed to the browser.
    Browser,
    DownloadNotPermitted,
    /// Nothing to do (browser not allowed by the caller).
    Ignored,
}

/// Outcome of an edit request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditDecision {
    Edited(&'static str),
    ForwardedToMainWindow,
    /// The file has a known non-text MIME type and no registration.
    Ignored,
}

pub struct FileOpener {
    registry: Arc<FileTypeRegistry>,
    probe: Arc<dyn TextProbe>,
    policy: Arc<dyn SessionPolicy>,
    role: WindowRole,
    event_sender: broadcast::Sender<FileTypeEvent>,
}

impl FileOpener {
    pub fn new(
        registry: Arc<FileTypeRegistry>,
        probe: Arc<dyn TextProbe>,
        policy: Arc<dyn SessionPolicy>,
    ) -> Self {
        let (sender, _) = broadcast::channel(100);
        Self {
            registry,
            probe,
            policy,
            role: WindowRole::Main,
            event_sender: sender,
        }
    }

    pub fn with_role(mut self, role: WindowRole) -> Self {
        self.role = role;
        self
    }

    pub fn registry(&self) -> &FileTypeRegistry {
        &self.registry
    }

    pub fn subscribe(&self) -> broadcast::Receiver<FileTypeEvent> {
        self.event_sender.subscribe()
    }

    fn publish(&self, event: FileTypeEvent) {
        // No subscribers is fine.
        let _ = self.event_sender.send(event);
    }

    fn publish_open(
        &self,
        item: &FileItem,
        descriptor: &FileTypeDescriptor,
        position: Option<FilePosition>,
        navigation: NavigationMethod,
    ) {
        self.publish(FileTypeEvent::Open {
            path: item.path().to_path_buf(),
            type_id: descriptor.id(),
            action: descriptor.kind().open_action(),
            position,
            navigation,
        });
    }

    /// Opens `item`, probing its content when no registration matches.
    ///
    /// At most one probe request is made. Concurrent calls are independent.
    pub async fn classify_for_open(&self, item: &FileItem, can_use_browser: bool) -> OpenDecision {
        if let Some(descriptor) = self.registry.resolve(item.name()) {
            tracing::debug!(path = %item.path().display(), type_id = descriptor.id(), "opening registered file type");
            self.publish_open(item, descriptor, None, NavigationMethod::Default);
            return OpenDecision::Registered(descriptor.id());
        }

        let is_text = match self.probe.is_text_file(item.path()).await {
            Ok(is_text) => is_text,
            Err(e) => {
                tracing::warn!(path = %item.path().display(), error = %e, "text probe failed");
                false
            }
        };

        if is_text {
            self.publish_open(item, self.registry.text(), None, NavigationMethod::Default);
            OpenDecision::ProbedText
        } else {
            self.default_action(item, can_use_browser)
        }
    }

    /// Spawns [`classify_for_open`](Self::classify_for_open) on the runtime.
    pub fn open_detached(self: &Arc<Self>, item: FileItem, can_use_browser: bool) -> JoinHandle<OpenDecision> {
        let opener = Arc::clone(self);
        tokio::spawn(async move { opener.classify_for_open(&item, can_use_browser).await })
    }

    fn default_action(&self, item: &FileItem, can_use_browser: bool) -> OpenDecision {
        if !can_use_browser {
            return OpenDecision::Ignored;
        }

        if self.policy.allow_file_downloads() {
            match self.registry.type_by_id(BROWSER_TYPE_ID) {
                Some(browser) => {
                    self.publish_open(item, browser, None, NavigationMethod::Default);
                    OpenDecision::Browser
                }
                None => {
                    tracing::warn!("registry has no browser file type");
                    OpenDecision::Ignored
                }
            }
        } else {
            tracing::debug!(path = %item.path().display(), "file downloads are disabled");
            self.publish(FileTypeEvent::DownloadNotPermitted {
                path: item.path().to_path_buf(),
                caption: DOWNLOAD_ERROR_CAPTION.to_string(),
                message: DOWNLOAD_ERROR_MESSAGE.to_string(),
            });
            OpenDecision::DownloadNotPermitted
        }
    }

    /// Opens `item` in the source editor. Types that cannot be edited (data,
    /// projects, ...) are opened as plain text instead; profiler output keeps
    /// its own viewer.
    pub fn classify_for_edit(
        &self,
        item: &FileItem,
        position: Option<FilePosition>,
        highlight_line: bool,
    ) -> EditDecision {
        if self.role.forwards_edits() {
            self.publish(FileTypeEvent::EditInMainWindow {
                path: item.path().to_path_buf(),
                position,
                highlight_line,
            });
            return EditDecision::ForwardedToMainWindow;
        }

        let descriptor = match self.registry.type_for_file(item) {
            Some(d) if d.kind().is_editable() => d,
            Some(_) => self.registry.text(),
            None => return EditDecision::Ignored,
        };

        let navigation = if highlight_line {
            NavigationMethod::HighlightLine
        } else {
            NavigationMethod::Default
        };
        self.publish_open(item, descriptor, position, navigation);
        EditDecision::Edited(descriptor.id())
    }
}
