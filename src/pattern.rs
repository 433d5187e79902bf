use std::fmt;

use crate::error::{ErrorKind, FtregError, FtregResult};

/// Registration key for the lookup maps.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Exact file name, compared case-insensitively.
    Filename(String),
    /// `*.ext`; stored lower-case without the dot.
    Extension(String),
    /// The empty pattern: names without an extension.
    Extensionless,
}

impl Pattern {
    /// Parses a file pattern: `""`, `"*.ext"` or an exact file name.
    pub fn parse(spec: &str) -> FtregResult<Self> {
        if spec.is_empty() || spec == "*." {
            return Ok(Pattern::Extensionless);
        }

        if let Some(ext) = spec.strip_prefix("*.") {
            if ext.contains(['*', '.']) {
                return Err(FtregError::new(
                    ErrorKind::InvalidArg,
                    format!("Unsupported compound extension pattern: {}", spec),
                ));
            }
            return Ok(Pattern::Extension(ext.to_lowercase()));
        }

        if spec.contains('*') {
            return Err(FtregError::new(
                ErrorKind::InvalidArg,
                format!("Unexpected wildcard in file pattern: {}", spec),
            ));
        }

        Ok(Pattern::Filename(spec.to_lowercase()))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Filename(name) => f.write_str(name),
            Pattern::Extension(ext) => write!(f, "*.{}", ext),
            Pattern::Extensionless => f.write_str("*."),
        }
    }
}

/// Returns the extension of a file name: the text after the last `.`, or an
/// empty string when there is none. The result keeps its original case.
pub fn extension_of(filename: &str) -> &str {
    let name = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    match name.rfind('.') {
        Some(idx) => &name[idx + 1..],
        None => "",
    }
}
