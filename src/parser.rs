//! Body extraction from a message part tree
//!
//! The walker keeps two candidate slots per extraction, one for plain text
//! and one for HTML. Each slot is filled by the first part of its type that
//! decodes to non-empty text, visiting children in document order and
//! resolving nested containers before their later siblings.

use crate::config::{BodyPreference, ExtractOptions};
use crate::decode::decode;
use crate::diagnostic::{Diagnostic, Diagnostics};
use crate::html::html_to_text;
use crate::types::{MessagePart, TEXT_HTML, TEXT_PLAIN};
use tracing::{debug, warn};

/// Body text of one message plus the conditions met while extracting it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// HTML-reduced, end-trimmed body text; may be empty
    pub text: String,

    /// Conditions met while walking the tree, in document order
    pub diagnostics: Diagnostics,
}

/// Extract the best body text from a part tree using default options
#[must_use]
pub fn extract_body(root: &MessagePart) -> Extraction {
    extract_body_with(root, &ExtractOptions::default())
}

/// Extract the best body text from a part tree.
///
/// With [`BodyPreference::HtmlFirst`] an HTML candidate anywhere in the
/// tree wins over plain text, whatever their positions. Never fails; parts
/// that cannot be decoded contribute nothing.
#[must_use]
pub fn extract_body_with(root: &MessagePart, options: &ExtractOptions) -> Extraction {
    let mut walker = Walker {
        options,
        diagnostics: Diagnostics::new(),
    };

    let text = if root.is_leaf() {
        walker.single_part(root)
    } else {
        let candidates = walker.collect(&root.parts);
        candidates.select(options.preference)
    };

    Extraction {
        text,
        diagnostics: walker.diagnostics,
    }
}

/// Best plain and HTML bodies found so far, still undecoded from HTML
#[derive(Debug, Default)]
struct Candidates {
    plain: Option<String>,
    html: Option<String>,
}

impl Candidates {
    /// Fold a nested container's findings into ours without displacing
    /// anything already found
    fn merge(&mut self, nested: Self) {
        assign_if_unset(&mut self.plain, || nested.plain.unwrap_or_default());
        assign_if_unset(&mut self.html, || nested.html.unwrap_or_default());
    }

    fn select(self, preference: BodyPreference) -> String {
        let reduce_html = |html: String| html_to_text(&html).trim().to_string();
        let trim_plain = |plain: String| plain.trim().to_string();

        // A found candidate wins even if it reduces to nothing.
        let selected = match preference {
            BodyPreference::HtmlFirst => self
                .html
                .map(reduce_html)
                .or_else(|| self.plain.map(trim_plain)),
            BodyPreference::PlainFirst => self
                .plain
                .map(trim_plain)
                .or_else(|| self.html.map(reduce_html)),
        };

        selected.unwrap_or_default()
    }
}

/// Fill `slot` with the candidate only while it is still unset, and only
/// with non-empty text. The candidate is not produced at all once the slot
/// is filled.
fn assign_if_unset(slot: &mut Option<String>, candidate: impl FnOnce() -> String) {
    if slot.is_some() {
        return;
    }

    let value = candidate();
    if !value.is_empty() {
        *slot = Some(value);
    }
}

struct Walker<'a> {
    options: &'a ExtractOptions,
    diagnostics: Diagnostics,
}

impl Walker<'_> {
    fn single_part(&mut self, part: &MessagePart) -> String {
        debug!(mime_type = %part.mime_type, "Single-part email");

        match part.essence().as_str() {
            TEXT_PLAIN => self.decode_part(part).trim().to_string(),
            TEXT_HTML => html_to_text(&self.decode_part(part)).trim().to_string(),
            _ => {
                self.unexpected(part);
                String::new()
            }
        }
    }

    fn collect(&mut self, parts: &[MessagePart]) -> Candidates {
        let mut candidates = Candidates::default();

        for part in parts {
            if !part.is_leaf() {
                let nested = self.collect(&part.parts);
                candidates.merge(nested);
                continue;
            }

            debug!(mime_type = %part.mime_type, "Processing MIME type");

            match part.essence().as_str() {
                TEXT_PLAIN => assign_if_unset(&mut candidates.plain, || self.decode_part(part)),
                TEXT_HTML => assign_if_unset(&mut candidates.html, || self.decode_part(part)),
                _ => self.unexpected(part),
            }
        }

        candidates
    }

    fn decode_part(&mut self, part: &MessagePart) -> String {
        let Some(body) = &part.body else {
            return String::new();
        };

        let encoding = body
            .encoding
            .as_deref()
            .unwrap_or(self.options.default_encoding.as_str());

        decode(&body.data, encoding, &mut self.diagnostics)
    }

    fn unexpected(&mut self, part: &MessagePart) {
        warn!(mime_type = %part.mime_type, "Unexpected MIME type");
        self.diagnostics.push(Diagnostic::UnexpectedMimeType {
            mime_type: part.mime_type.clone(),
        });
    }
}
