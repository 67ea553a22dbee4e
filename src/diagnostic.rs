//! Non-fatal conditions reported during extraction

use serde::{Deserialize, Serialize};
use std::fmt;

/// A condition met while extracting a message body.
///
/// Every diagnostic means one part contributed an empty string; the rest of
/// the message is still extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The payload was malformed for its declared transfer encoding
    DecodeFailure { encoding: String, reason: String },

    /// The transfer encoding name is not one we decode
    UnsupportedEncoding { encoding: String },

    /// A leaf part carried a type that is neither plain text nor HTML
    UnexpectedMimeType { mime_type: String },
}

impl Diagnostic {
    #[must_use]
    pub const fn is_decode_failure(&self) -> bool {
        matches!(self, Self::DecodeFailure { .. })
    }

    #[must_use]
    pub const fn is_unsupported_encoding(&self) -> bool {
        matches!(self, Self::UnsupportedEncoding { .. })
    }

    #[must_use]
    pub const fn is_unexpected_mime_type(&self) -> bool {
        matches!(self, Self::UnexpectedMimeType { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DecodeFailure { encoding, reason } => {
                write!(f, "failed to decode {encoding} body: {reason}")
            }
            Self::UnsupportedEncoding { encoding } => {
                write!(f, "unsupported transfer encoding: {encoding}")
            }
            Self::UnexpectedMimeType { mime_type } => {
                write!(f, "unexpected MIME type: {mime_type}")
            }
        }
    }
}

/// Ordered collection of diagnostics for one extraction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.0
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
