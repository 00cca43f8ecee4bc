use std::io::Read;

use thiserror::Error;

use super::version::TextVersion;

#[derive(Debug, Error)]
pub enum TextError {
    #[error("Text must be valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Validated input text, immutable once built.
///
/// Counting never mutates the content; case folding is applied per
/// character while scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    version: TextVersion,
    content: String,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        let version = TextVersion::from_text(&content);
        Text { version, content }
    }

    /// Ingest raw bytes. Fails if the bytes are not UTF-8.
    pub fn ingest(raw_content: Vec<u8>) -> Result<Self, TextError> {
        let content = String::from_utf8(raw_content)?;
        Ok(Text::new(content))
    }

    /// Read a reader to the end and ingest what it yields.
    pub fn read_from<R: Read>(mut reader: R) -> Result<Self, TextError> {
        let mut raw_content = Vec::new();
        reader.read_to_end(&mut raw_content)?;
        Text::ingest(raw_content)
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn version(&self) -> &TextVersion {
        &self.version
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
