//! Text/binary probing
//!
//! When no registration matches a file, the opener asks a [`TextProbe`] whether
//! the file looks like text. In a client/server deployment the probe is a
//! remote call; [`LocalTextProbe`] answers from the local filesystem.

use std::path::Path;

use async_trait::async_trait;
use infer::MatcherType;
use tokio::fs;
use tokio::io::AsyncReadExt;

use crate::error::{ErrorKind, FtregError, FtregResult};

/// Bytes inspected by [`LocalTextProbe`].
pub const SNIFF_LEN: usize = 8192;

#[async_trait]
pub trait TextProbe: Send + Sync {
    /// Returns `true` only when the file is affirmatively text.
    async fn is_text_file(&self, path: &Path) -> FtregResult<bool>;
}

/// Answers from the local filesystem by sniffing the first [`SNIFF_LEN`] bytes.
///
/// Accepted encodings are UTF-8, UTF-16 with a byte order mark, and
/// single-byte encodings such as Latin-1 whose content has no control bytes
/// other than whitespace. UTF-16 without a BOM is reported as binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTextProbe;

impl LocalTextProbe {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TextProbe for LocalTextProbe {
    async fn is_text_file(&self, path: &Path) -> FtregResult<bool> {
        let metadata = fs::metadata(path).await?;
        if metadata.is_dir() {
            return Err(FtregError::new(
                ErrorKind::IsDirectory,
                format!("Cannot probe a directory: {}", path.display()),
            ));
        }

        let file = fs::File::open(path).await?;
        let mut buf = Vec::with_capacity(SNIFF_LEN);
        file.take(SNIFF_LEN as u64).read_to_end(&mut buf).await?;

        let is_text = looks_like_text(&buf, buf.len() == SNIFF_LEN);
        tracing::debug!(path = %path.display(), is_text, "probed file content");
        Ok(is_text)
    }
}

/// Classifies a content prefix. `truncated` tells whether more content follows,
/// in which case a multi-byte character cut at the end is tolerated.
///
/// A UTF-16 BOM selects UTF-16 decoding. Content `infer` recognises is judged
/// by its format. After that NUL bytes mean binary, and anything that is not
/// UTF-8 must be free of control bytes to count as single-byte text.
pub fn looks_like_text(buf: &[u8], truncated: bool) -> bool {
    if buf.is_empty() {
        return true;
    }

    if let Some(big_endian) = utf16_bom(buf) {
        return looks_like_utf16(&buf[2..], big_endian, truncated);
    }

    if let Some(kind) = infer::get(buf) {
        return kind.matcher_type() == MatcherType::Text;
    }

    if buf.contains(&0) {
        return false;
    }

    match std::str::from_utf8(buf) {
        Ok(_) => true,
        Err(e) if truncated && e.error_len().is_none() => true,
        Err(_) => buf.iter().all(|&b| !is_control_byte(b)),
    }
}

/// `Some(true)` for a big-endian BOM, `Some(false)` for little-endian.
fn utf16_bom(buf: &[u8]) -> Option<bool> {
    match buf {
        [0xFE, 0xFF, ..] => Some(true),
        [0xFF, 0xFE, ..] => Some(false),
        _ => None,
    }
}

fn looks_like_utf16(body: &[u8], big_endian: bool, truncated: bool) -> bool {
    let units = body.chunks_exact(2).map(|pair| {
        if big_endian {
            u16::from_be_bytes([pair[0], pair[1]])
        } else {
            u16::from_le_bytes([pair[0], pair[1]])
        }
    });

    let mut decoded = char::decode_utf16(units).peekable();
    while let Some(c) = decoded.next() {
        match c {
            Ok(c) if c.is_control() && !c.is_whitespace() => return false,
            Ok(_) => {}
            // A high surrogate cut off at the end of the sample.
            Err(_) if truncated && decoded.peek().is_none() => {}
            Err(_) => return false,
        }
    }
    true
}

/// C0 control bytes other than tab, line feed, form feed, carriage return and escape.
fn is_control_byte(b: u8) -> bool {
    (b < 0x20 && !matches!(b, b'\t' | b'\n' | 0x0C | b'\r' | 0x1B)) || b == 0x7F
}
