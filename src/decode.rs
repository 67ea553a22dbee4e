//! Transfer decoding of part payloads

use crate::diagnostic::{Diagnostic, Diagnostics};
use base64::Engine;
use base64::alphabet;
use base64::engine::DecodePaddingMode;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, URL_SAFE};
use tracing::warn;

/// Provider payloads are URL-safe base64, but padding and line wrapping vary.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::RequireNone)
        .with_decode_allow_trailing_bits(true),
);

/// Transfer encodings the decoder understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferEncoding {
    Base64,
    QuotedPrintable,
}

impl TransferEncoding {
    /// Parse an encoding tag such as `base64` or `Quoted-Printable`
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        if tag.eq_ignore_ascii_case("base64") {
            Some(Self::Base64)
        } else if tag.eq_ignore_ascii_case("quoted-printable") {
            Some(Self::QuotedPrintable)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Base64 => "base64",
            Self::QuotedPrintable => "quoted-printable",
        }
    }
}

/// Decode a payload given its encoding tag.
///
/// Invalid UTF-8 in the decoded bytes is replaced with U+FFFD. Unknown tags
/// and malformed payloads yield an empty string and a diagnostic; this never
/// fails.
pub fn decode(payload: &str, encoding: &str, diagnostics: &mut Diagnostics) -> String {
    let Some(transfer) = TransferEncoding::from_tag(encoding) else {
        warn!(encoding, "Unexpected encoding");
        diagnostics.push(Diagnostic::UnsupportedEncoding {
            encoding: encoding.to_string(),
        });
        return String::new();
    };

    if payload.is_empty() {
        return String::new();
    }

    let bytes = match transfer {
        TransferEncoding::Base64 => decode_base64(payload).map_err(|e| e.to_string()),
        TransferEncoding::QuotedPrintable => {
            quoted_printable::decode(payload, quoted_printable::ParseMode::Robust)
                .map_err(|e| e.to_string())
        }
    };

    match bytes {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(reason) => {
            warn!(encoding = transfer.as_str(), %reason, "Error decoding body");
            diagnostics.push(Diagnostic::DecodeFailure {
                encoding: transfer.as_str().to_string(),
                reason,
            });
            String::new()
        }
    }
}

/// URL-safe base64 decode that also accepts the standard alphabet and skips
/// characters outside the alphabet (line breaks).
///
/// Padding ends a group: data made of separately padded chunks is decoded
/// chunk by chunk and the results concatenated.
pub fn decode_base64(payload: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let cleaned: String = payload
        .chars()
        .filter_map(|c| match c {
            '+' => Some('-'),
            '/' => Some('_'),
            c if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '=' => Some(c),
            _ => None,
        })
        .collect();

    let mut bytes = Vec::with_capacity(cleaned.len() * 3 / 4);
    for group in cleaned.split('=').filter(|group| !group.is_empty()) {
        URL_SAFE_LENIENT.decode_vec(group, &mut bytes)?;
    }

    Ok(bytes)
}

/// Encode bytes the way the provider ships part payloads
#[must_use]
pub fn encode_base64(bytes: &[u8]) -> String {
    URL_SAFE.encode(bytes)
}
