//! Build provider-shaped part trees from raw RFC 822 messages

use crate::decode::TransferEncoding;
use crate::error::Result;
use crate::types::{Header, MessagePart, PartBody, RawMessage};
use mailparse::body::Body;
use mailparse::{MailHeaderMap, ParsedMail};
use tracing::{debug, warn};

/// Parse raw message bytes into a [`RawMessage`].
///
/// Base64 and quoted-printable bodies in UTF-8 or ASCII are carried through
/// still encoded, so they take the same decoding path as provider payloads.
/// Other bodies are decoded here, honouring their charset, and re-encoded as
/// provider-style base64.
pub fn parse_rfc822(id: impl Into<String>, raw: &[u8]) -> Result<RawMessage> {
    let parsed = mailparse::parse_mail(raw)?;
    let payload = convert_part(&parsed, String::new());

    debug!(
        subject = %parsed.headers.get_first_value("Subject").unwrap_or_default(),
        parts = payload.parts.len(),
        "Parsed RFC 822 message"
    );

    Ok(RawMessage::new(id, payload))
}

fn convert_part(parsed: &ParsedMail<'_>, part_id: String) -> MessagePart {
    let headers = parsed
        .headers
        .iter()
        .map(|h| Header::new(h.get_key(), h.get_value()))
        .collect();

    let parts = parsed
        .subparts
        .iter()
        .enumerate()
        .map(|(idx, sub)| {
            let child_id = if part_id.is_empty() {
                idx.to_string()
            } else {
                format!("{part_id}.{idx}")
            };
            convert_part(sub, child_id)
        })
        .collect::<Vec<_>>();

    let body = if parts.is_empty() {
        leaf_body(parsed)
    } else {
        None
    };

    let filename = parsed
        .get_content_disposition()
        .params
        .get("filename")
        .cloned();

    MessagePart {
        part_id: Some(part_id),
        mime_type: parsed.ctype.mimetype.to_ascii_lowercase(),
        filename,
        headers,
        body,
        parts,
    }
}

fn leaf_body(parsed: &ParsedMail<'_>) -> Option<PartBody> {
    let is_text = parsed.ctype.mimetype.to_ascii_lowercase().starts_with("text/");

    if !is_text || is_utf8_charset(&parsed.ctype.charset) {
        match parsed.get_body_encoded() {
            Body::Base64(body) => {
                return Some(PartBody::encoded(
                    String::from_utf8_lossy(body.get_raw()),
                    TransferEncoding::Base64.as_str(),
                ));
            }
            Body::QuotedPrintable(body) => {
                return Some(PartBody::encoded(
                    String::from_utf8_lossy(body.get_raw()),
                    TransferEncoding::QuotedPrintable.as_str(),
                ));
            }
            Body::SevenBit(_) | Body::EightBit(_) | Body::Binary(_) => {}
        }
    }

    let decoded = if is_text {
        parsed.get_body().map(|text| PartBody::from_text(&text))
    } else {
        parsed.get_body_raw().map(|bytes| PartBody::from_bytes(&bytes))
    };

    match decoded {
        Ok(body) => Some(body),
        Err(e) => {
            warn!(mime_type = %parsed.ctype.mimetype, error = %e, "Failed to read part body");
            None
        }
    }
}

fn is_utf8_charset(charset: &str) -> bool {
    ["utf-8", "utf8", "us-ascii", "ascii"]
        .iter()
        .any(|known| charset.trim().eq_ignore_ascii_case(known))
}
