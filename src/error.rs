use std::fmt;
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Exists,
    IsDirectory,
    PermissionDenied,
    InvalidArg,
    InvalidData,
    NotSupported,
    Failed,
}

#[derive(Debug)]
pub struct FtregError {
    kind: ErrorKind,
    message: String,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl FtregError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(source),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for FtregError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for FtregError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_deref().map(|e| e as &dyn std::error::Error)
    }
}

impl From<io::Error> for FtregError {
    fn from(err: io::Error) -> Self {
        let kind = match err.kind() {
            io::ErrorKind::NotFound => ErrorKind::NotFound,
            io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
            io::ErrorKind::AlreadyExists => ErrorKind::Exists,
            io::ErrorKind::InvalidInput => ErrorKind::InvalidArg,
            io::ErrorKind::InvalidData | io::ErrorKind::UnexpectedEof => ErrorKind::InvalidData,
            io::ErrorKind::Unsupported => ErrorKind::NotSupported,
            _ => ErrorKind::Failed,
        };

        Self::with_source(kind, err.to_string(), Box::new(err))
    }
}

impl From<serde_json::Error> for FtregError {
    fn from(err: serde_json::Error) -> Self {
        let kind = if err.is_io() {
            ErrorKind::Failed
        } else {
            ErrorKind::InvalidData
        };
        Self::with_source(kind, err.to_string(), Box::new(err))
    }
}

pub type FtregResult<T> = Result<T, FtregError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn io_errors_keep_their_source() {
        let err: FtregError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "NotFound: gone");
    }

    #[test]
    fn other_io_errors_are_failures() {
        let err: FtregError = io::Error::new(io::ErrorKind::TimedOut, "slow disk").into();
        assert_eq!(err.kind(), ErrorKind::Failed);
        let err: FtregError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert_eq!(err.kind(), ErrorKind::Failed);
        let err: FtregError = io::Error::new(io::ErrorKind::UnexpectedEof, "short read").into();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn malformed_json_is_invalid_data() {
        let err: FtregError = serde_json::from_str::<u32>("{").unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }
}
