//! User file type associations
//!
//! Users can extend the built-in table with a JSON file:
//!
//! ```json
//! {
//!   "associations": { "*.Rmd2": "r_markdown", "Justfile": "makefile" },
//!   "icons": { "svg": "image-x-generic" }
//! }
//! ```
//!
//! The file lives at `$XDG_CONFIG_HOME/ftreg/filetypes.json`, or in the
//! platform config directory when `XDG_CONFIG_HOME` is unset. Associations are
//! applied after the built-in bindings, so they win on conflicts.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, FtregError, FtregResult};
use crate::icon::FileIcon;
use crate::registry::FileTypeRegistryBuilder;

const CONFIG_FILE_NAME: &str = "filetypes.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// File pattern -> type id.
    pub associations: BTreeMap<String, String>,
    /// Extension -> icon name.
    pub icons: BTreeMap<String, String>,
}

impl RegistryConfig {
    pub fn from_json(json: &str) -> FtregResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a configuration file. A missing file yields an empty configuration.
    pub fn load(path: &Path) -> FtregResult<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_json(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Loads the configuration from its default location.
    pub fn load_default() -> FtregResult<Self> {
        match default_config_path() {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading file type configuration");
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.associations.is_empty() && self.icons.is_empty()
    }

    /// Applies the associations to a builder. Every association must name a
    /// declared type.
    pub fn apply(&self, builder: &mut FileTypeRegistryBuilder) -> FtregResult<()> {
        for (spec, type_id) in &self.associations {
            let icon_name = builder.default_icon_name(type_id).ok_or_else(|| {
                FtregError::new(
                    ErrorKind::InvalidArg,
                    format!("Association {} names unknown file type {}", spec, type_id),
                )
            })?;
            builder.register(spec, type_id, icon_name)?;
        }
        for (extension, icon_name) in &self.icons {
            let description = extension.trim_start_matches('.').to_uppercase();
            builder.register_icon(extension, FileIcon::new(icon_name.clone(), description));
        }
        Ok(())
    }
}

/// Default location of the configuration file.
pub fn default_config_path() -> Option<PathBuf> {
    if let Ok(config_home) = std::env::var("XDG_CONFIG_HOME") {
        let path = PathBuf::from(config_home);
        if path.is_absolute() {
            return Some(path.join("ftreg").join(CONFIG_FILE_NAME));
        }
    }

    ProjectDirs::from("", "", "ftreg").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
