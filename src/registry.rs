//! File type registry
//!
//! The registry owns three type maps (file name, extension, type id) and two
//! icon maps (file name, extension). It is assembled once through
//! [`FileTypeRegistryBuilder`] and is read-only afterwards, so lookups are plain
//! map reads that can be shared freely across tasks behind an `Arc`.
//!
//! Lookup precedence, first match wins:
//!
//! 1. exact file name, case-insensitive;
//! 2. extension (text after the last `.`, empty for extensionless names),
//!    case-insensitive;
//! 3. nothing: the caller picks a default.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::builtin;
use crate::config::RegistryConfig;
use crate::error::{ErrorKind, FtregError, FtregResult};
use crate::file_item::FileItem;
use crate::file_type::{FileTypeDescriptor, TEXT_TYPE_ID};
use crate::icon::FileIcon;
use crate::pattern::{extension_of, Pattern};

#[derive(Debug, Default)]
pub struct FileTypeRegistryBuilder {
    types: Vec<FileTypeDescriptor>,
    types_by_id: HashMap<&'static str, usize>,
    types_by_filename: HashMap<String, usize>,
    types_by_extension: HashMap<String, usize>,
    icons_by_filename: HashMap<String, FileIcon>,
    icons_by_extension: HashMap<String, FileIcon>,
}

impl FileTypeRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder preloaded with the built-in table.
    ///
    /// # Panics
    ///
    /// Panics if the built-in table declares a duplicate type id or binds a
    /// pattern to an undeclared type.
    pub fn with_builtins() -> Self {
        let mut builder = Self::new();
        for descriptor in builtin::TYPES {
            if let Err(e) = builder.add_type(descriptor.clone()) {
                panic!("invalid built-in file type table: {}", e);
            }
        }
        for (spec, type_id, icon_name) in builtin::BINDINGS {
            if let Err(e) = builder.register(spec, type_id, *icon_name) {
                panic!("invalid built-in file type binding {:?}: {}", spec, e);
            }
        }
        for (extension, icon) in builtin::ICONS {
            builder.register_icon(extension, icon.clone());
        }
        builder
    }

    /// Declares a file type. Type ids are unique.
    pub fn add_type(&mut self, descriptor: FileTypeDescriptor) -> FtregResult<&mut Self> {
        let id = descriptor.id();
        if self.types_by_id.contains_key(id) {
            return Err(FtregError::new(
                ErrorKind::Exists,
                format!("File type id already declared: {}", id),
            ));
        }
        self.types_by_id.insert(id, self.types.len());
        self.types.push(descriptor);
        Ok(self)
    }

    /// Binds a file pattern (`""`, `"*.ext"` or an exact name) to a declared type
    /// and records its icon. Rebinding a pattern replaces the previous binding.
    pub fn register(
        &mut self,
        spec: &str,
        type_id: &str,
        icon_name: impl Into<Cow<'static, str>>,
    ) -> FtregResult<&mut Self> {
        let pattern = Pattern::parse(spec)?;
        let index = *self.types_by_id.get(type_id).ok_or_else(|| {
            FtregError::new(
                ErrorKind::InvalidArg,
                format!("Unknown file type id {} for pattern {}", type_id, spec),
            )
        })?;
        let icon = FileIcon::new(icon_name, self.types[index].default_icon().description().to_string());

        let (types, icons, key) = match pattern {
            Pattern::Filename(name) => (&mut self.types_by_filename, &mut self.icons_by_filename, name),
            Pattern::Extension(ext) => (&mut self.types_by_extension, &mut self.icons_by_extension, ext),
            Pattern::Extensionless => (&mut self.types_by_extension, &mut self.icons_by_extension, String::new()),
        };

        if let Some(previous) = types.insert(key.clone(), index) {
            if previous != index {
                tracing::debug!(
                    pattern = spec,
                    from = self.types[previous].id(),
                    to = type_id,
                    "file type binding replaced"
                );
            }
        }
        tracing::trace!(pattern = spec, type_id, "registered file type binding");
        icons.insert(key, icon);
        Ok(self)
    }

    /// Icon name of a declared type's default icon.
    pub fn default_icon_name(&self, type_id: &str) -> Option<String> {
        self.types_by_id
            .get(type_id)
            .map(|&i| self.types[i].default_icon().name().to_string())
    }

    /// Registers an icon for an extension that has no file type of its own.
    pub fn register_icon(&mut self, extension: &str, icon: FileIcon) -> &mut Self {
        let key = extension.trim_start_matches('.').to_lowercase();
        self.icons_by_extension.insert(key, icon);
        self
    }

    pub fn build(self) -> FtregResult<FileTypeRegistry> {
        let text = *self.types_by_id.get(TEXT_TYPE_ID).ok_or_else(|| {
            FtregError::new(
                ErrorKind::NotFound,
                format!("Registry has no \"{}\" file type", TEXT_TYPE_ID),
            )
        })?;
        if !self.types[text].is_text() {
            return Err(FtregError::new(
                ErrorKind::InvalidArg,
                format!("The \"{}\" file type must be a text kind", TEXT_TYPE_ID),
            ));
        }

        tracing::debug!(
            types = self.types.len(),
            filenames = self.types_by_filename.len(),
            extensions = self.types_by_extension.len(),
            "file type registry built"
        );

        Ok(FileTypeRegistry {
            types: self.types,
            types_by_id: self.types_by_id,
            types_by_filename: self.types_by_filename,
            types_by_extension: self.types_by_extension,
            icons_by_filename: self.icons_by_filename,
            icons_by_extension: self.icons_by_extension,
            text,
        })
    }
}

#[derive(Debug)]
pub struct FileTypeRegistry {
    types: Vec<FileTypeDescriptor>,
    types_by_id: HashMap<&'static str, usize>,
    types_by_filename: HashMap<String, usize>,
    types_by_extension: HashMap<String, usize>,
    icons_by_filename: HashMap<String, FileIcon>,
    icons_by_extension: HashMap<String, FileIcon>,
    text: usize,
}

impl FileTypeRegistry {
    pub fn builder() -> FileTypeRegistryBuilder {
        FileTypeRegistryBuilder::new()
    }

    /// Registry built from the built-in table only.
    pub fn builtin() -> Self {
        match FileTypeRegistryBuilder::with_builtins().build() {
            Ok(registry) => registry,
            Err(e) => panic!("invalid built-in file type table: {}", e),
        }
    }

    /// The generic plain text type.
    pub fn text(&self) -> &FileTypeDescriptor {
        &self.types[self.text]
    }

    pub fn type_by_id(&self, id: &str) -> Option<&FileTypeDescriptor> {
        self.types_by_id.get(id).map(|&i| &self.types[i])
    }

    /// All declared types, in declaration order.
    pub fn descriptors(&self) -> impl Iterator<Item = &FileTypeDescriptor> {
        self.types.iter()
    }

    /// Resolves a file name (or path) to its registered type.
    pub fn resolve(&self, filename: &str) -> Option<&FileTypeDescriptor> {
        let name = base_name(filename).to_lowercase();
        if let Some(&i) = self.types_by_filename.get(&name) {
            return Some(&self.types[i]);
        }
        self.types_by_extension
            .get(extension_of(&name))
            .map(|&i| &self.types[i])
    }

    /// Like [`resolve`](Self::resolve), but treats an unmatched file as plain
    /// text when `mime_hint` is a `text/*` type.
    pub fn resolve_with_fallback(
        &self,
        filename: &str,
        mime_hint: Option<&str>,
    ) -> Option<&FileTypeDescriptor> {
        self.resolve(filename).or_else(|| match mime_hint {
            Some(mime) if mime.starts_with("text/") => Some(self.text()),
            _ => None,
        })
    }

    /// Type used when opening `item`. Files with an unknown MIME type count as
    /// text; files with a known non-text MIME type have no type.
    pub fn type_for_file(&self, item: &FileItem) -> Option<&FileTypeDescriptor> {
        self.resolve_with_fallback(item.name(), Some(item.mime_type("text/plain")))
    }

    /// Text type used when editing `item`; never a non-text kind.
    pub fn text_type_for_file(&self, item: &FileItem) -> &FileTypeDescriptor {
        match self.type_for_file(item) {
            Some(descriptor) if descriptor.is_text() => descriptor,
            _ => self.text(),
        }
    }

    /// Icon for a filesystem entry. Directories never consult the name maps.
    pub fn resolve_icon(&self, item: &FileItem) -> FileIcon {
        if item.is_directory() {
            return if item.is_public_folder() {
                FileIcon::PUBLIC_FOLDER
            } else {
                FileIcon::FOLDER
            };
        }
        self.icon_for_filename(item.name())
    }

    pub fn icon_for_filename(&self, filename: &str) -> FileIcon {
        let name = base_name(filename).to_lowercase();
        if let Some(icon) = self.icons_by_filename.get(&name) {
            return icon.clone();
        }
        if let Some(icon) = self.icons_by_extension.get(extension_of(&name)) {
            return icon.clone();
        }
        self.text().default_icon().clone()
    }
}

fn base_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

static DEFAULT_REGISTRY: Lazy<Arc<FileTypeRegistry>> = Lazy::new(|| {
    let mut builder = FileTypeRegistryBuilder::with_builtins();
    match RegistryConfig::load_default() {
        Ok(config) => {
            if let Err(e) = config.apply(&mut builder) {
                tracing::warn!(error = %e, "ignoring invalid file type associations");
                builder = FileTypeRegistryBuilder::with_builtins();
            }
        }
        Err(e) => tracing::warn!(error = %e, "failed to load file type configuration"),
    }
    match builder.build() {
        Ok(registry) => Arc::new(registry),
        Err(e) => panic!("invalid built-in file type table: {}", e),
    }
});

/// Process-wide registry: the built-in table plus the user's associations.
pub fn default_registry() -> Arc<FileTypeRegistry> {
    DEFAULT_REGISTRY.clone()
}
