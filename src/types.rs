//! Core types: the provider's message part tree and the normalized record

use crate::decode::encode_base64;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const TEXT_PLAIN: &str = "text/plain";
pub const TEXT_HTML: &str = "text/html";

/// Header name/value pair as delivered by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Encoded payload of a leaf part
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartBody {
    /// Transfer-encoded data; absent for container parts
    #[serde(default)]
    pub data: String,

    /// Transfer encoding tag; absent means the provider default (base64)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,

    /// Decoded size in bytes, when the provider reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl PartBody {
    /// Body carrying already-encoded data with an explicit encoding tag
    pub fn encoded(data: impl Into<String>, encoding: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            encoding: Some(encoding.into()),
            size: None,
        }
    }

    /// Body carrying provider-style base64 data with no encoding tag
    pub fn base64(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            encoding: None,
            size: None,
        }
    }

    /// Encode raw bytes the way the provider does
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            data: encode_base64(bytes),
            encoding: None,
            size: Some(bytes.len() as u64),
        }
    }

    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }
}

/// One node of a message's MIME tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_id: Option<String>,

    /// Declared content type, e.g. `text/plain` or `multipart/alternative`
    #[serde(default)]
    pub mime_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<Header>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<PartBody>,

    /// Child parts in document order; empty for leaves
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parts: Vec<Self>,
}

impl MessagePart {
    /// A leaf part with a payload
    pub fn leaf(mime_type: impl Into<String>, body: PartBody) -> Self {
        Self {
            mime_type: mime_type.into(),
            body: Some(body),
            ..Self::default()
        }
    }

    /// A container part
    pub fn multipart(mime_type: impl Into<String>, parts: Vec<Self>) -> Self {
        Self {
            mime_type: mime_type.into(),
            parts,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_headers(mut self, headers: Vec<Header>) -> Self {
        self.headers = headers;
        self
    }

    /// Children take precedence over a body, so only childless parts are leaves
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.parts.is_empty()
    }

    /// The media type without parameters, lowercased
    #[must_use]
    pub fn essence(&self) -> String {
        self.mime_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase()
    }

    #[must_use]
    pub fn is_mime_type(&self, mime_type: &str) -> bool {
        self.essence() == mime_type
    }
}

/// A fetched message as delivered by the provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMessage {
    pub id: String,

    #[serde(default)]
    pub payload: MessagePart,

    /// Envelope-level headers; the provider usually puts them on the payload
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<Header>,
}

impl RawMessage {
    pub fn new(id: impl Into<String>, payload: MessagePart) -> Self {
        Self {
            id: id.into(),
            payload,
            headers: Vec::new(),
        }
    }

    /// Parse a provider message resource
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_headers(mut self, headers: Vec<Header>) -> Self {
        self.headers = headers;
        self
    }

    /// Envelope headers, falling back to the root part's headers
    #[must_use]
    pub fn header_list(&self) -> &[Header] {
        if self.headers.is_empty() {
            &self.payload.headers
        } else {
            &self.headers
        }
    }

    /// Value of a header; names match case-insensitively and a later
    /// duplicate replaces an earlier one
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.header_list()
            .iter()
            .rev()
            .find(|h| h.name.eq_ignore_ascii_case(name))
            .map(|h| h.value.as_str())
    }
}

/// Flattened message record handed to summarization.
///
/// Built once per message and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedEmail {
    id: String,
    from: String,
    subject: String,
    date: String,
    body: String,
}

impl NormalizedEmail {
    pub fn new(
        id: impl Into<String>,
        from: impl Into<String>,
        subject: impl Into<String>,
        date: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            subject: subject.into(),
            date: date.into(),
            body: body.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn from(&self) -> &str {
        &self.from
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The `Date` header exactly as received
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Best-effort interpretation of the raw date; the stored string is
    /// never altered
    #[must_use]
    pub fn parsed_date(&self) -> Option<DateTime<Utc>> {
        let date = self.date.trim();
        if date.is_empty() {
            return None;
        }

        DateTime::parse_from_rfc2822(date)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                mailparse::dateparse(date)
                    .ok()
                    .and_then(|ts| DateTime::from_timestamp(ts, 0))
            })
    }
}

impl fmt::Display for NormalizedEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} from {}", self.subject, self.from)
    }
}

/// Reduced record persisted per message for the summarizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrippedEmail {
    pub from: String,
    pub date: String,
    pub stripped_text: String,
}

impl StrippedEmail {
    /// File name derived from the raw date, safe for any filesystem we write to
    #[must_use]
    pub fn file_name(&self) -> String {
        let stem: String = self
            .date
            .trim()
            .chars()
            .map(|c| match c {
                ':' | '/' | '\\' => '-',
                ' ' => '_',
                c => c,
            })
            .collect();

        if stem.is_empty() {
            "undated.json".to_string()
        } else {
            format!("{stem}.json")
        }
    }
}

impl From<&NormalizedEmail> for StrippedEmail {
    fn from(email: &NormalizedEmail) -> Self {
        Self {
            from: email.from.clone(),
            date: email.date.clone(),
            stripped_text: email.body.clone(),
        }
    }
}
