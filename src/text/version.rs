use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

const PREFIX: &str = "sha256:";

/// Content hash of a text, `sha256:<hex>`, taken over its UTF-8 bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextVersion(String);

impl TextVersion {
    pub fn from_text(text: &str) -> Self {
        Self::from_content(text.as_bytes())
    }

    pub fn from_content(content: &[u8]) -> Self {
        let digest = Sha256::digest(content);
        TextVersion(format!("{PREFIX}{}", hex::encode(digest)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The bare hex digest, without the algorithm prefix.
    pub fn digest(&self) -> &str {
        self.0.strip_prefix(PREFIX).unwrap_or(&self.0)
    }
}

impl fmt::Display for TextVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
