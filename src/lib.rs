//! # ftreg - file type registry
//!
//! Maps filesystem entries to editor file types and icons.
//!
//! ## Overview
//!
//! ftreg decides how an IDE treats a file: which file type it is (R script,
//! Markdown, Makefile, ...), which icon it gets, and what happens when the
//! user opens or edits it. Unknown files are classified by probing their
//! content for text.
//!
//! ## Core Concepts
//!
//! - **FileTypeDescriptor**: immutable record for a file type (id, label, icon, kind)
//! - **FileTypeRegistry**: filename/extension lookup tables built once from a declarative table
//! - **FileItem**: the filesystem entry being classified
//! - **TextProbe**: text/binary detection for files no registration matches
//! - **FileOpener**: turns open/edit requests into [`FileTypeEvent`]s
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use ftreg::{default_registry, FileItem, FileOpener, LocalTextProbe, StaticPolicy};
//!
//! # async fn example() {
//! let registry = default_registry();
//! assert_eq!(registry.resolve("Makefile").map(|t| t.id()), Some("makefile"));
//!
//! let opener = FileOpener::new(registry, Arc::new(LocalTextProbe::new()), Arc::new(StaticPolicy::new(true)));
//! let mut events = opener.subscribe();
//! opener.classify_for_open(&FileItem::file("/data/unknown.bin"), true).await;
//! println!("{:?}", events.recv().await);
//! # }
//! ```

pub mod builtin;
pub mod capability;
pub mod config;
pub mod error;
pub mod event;
pub mod file_item;
pub mod file_type;
pub mod icon;
pub mod opener;
pub mod pattern;
pub mod probe;
pub mod registry;
pub mod session;

pub use capability::{Capabilities, WordWrap};
pub use config::RegistryConfig;
pub use error::{ErrorKind, FtregError, FtregResult};
pub use event::{FilePosition, FileTypeEvent, NavigationMethod};
pub use file_item::{EntryKind, FileItem};
pub use file_type::{FileTypeDescriptor, FileTypeKind, OpenAction, TextTraits, BROWSER_TYPE_ID, TEXT_TYPE_ID};
pub use icon::FileIcon;
pub use opener::{EditDecision, FileOpener, OpenDecision};
pub use pattern::{extension_of, Pattern};
pub use probe::{LocalTextProbe, TextProbe};
pub use registry::{default_registry, FileTypeRegistry, FileTypeRegistryBuilder};
pub use session::{SessionPolicy, StaticPolicy, WindowRole};
