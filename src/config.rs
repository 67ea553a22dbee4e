//! Extraction options

use crate::decode::TransferEncoding;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Which candidate body wins when a message carries both
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyPreference {
    /// HTML found anywhere in the tree beats plain text
    #[default]
    HtmlFirst,

    /// Plain text beats HTML
    PlainFirst,
}

/// Options controlling body extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    pub preference: BodyPreference,

    /// Encoding assumed for parts whose body carries no encoding tag
    pub default_encoding: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            preference: BodyPreference::default(),
            default_encoding: TransferEncoding::Base64.as_str().to_string(),
        }
    }
}

impl ExtractOptions {
    /// Load options from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub const fn with_preference(mut self, preference: BodyPreference) -> Self {
        self.preference = preference;
        self
    }
}
