// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Email Body Extraction
//!
//! Turns fetched email messages into flat, summarization-ready text records.
//!
//! # Features
//!
//! - Recursive walk of nested MIME part trees
//! - Base64 (URL-safe, lenient) and quoted-printable transfer decoding
//! - HTML reduced to visible text, preferred over plain text when both exist
//! - Whitespace flattening for downstream prompts
//! - Non-fatal diagnostics returned alongside every result
//! - Provider JSON and raw RFC 822 input
//!
//! # Example
//!
//! ```rust
//! use mailbrief::{Header, MessagePart, PartBody, RawMessage, normalize};
//!
//! let payload = MessagePart::multipart(
//!     "multipart/alternative",
//!     vec![
//!         MessagePart::leaf("text/plain", PartBody::from_text("Hello\r\nWorld")),
//!         MessagePart::leaf("text/html", PartBody::from_text("<p>Hi <b>there</b></p>")),
//!     ],
//! )
//! .with_headers(vec![Header::new("From", "ann@example.com")]);
//!
//! let normalized = normalize(&RawMessage::new("m1", payload));
//!
//! assert_eq!(normalized.email.from(), "ann@example.com");
//! assert_eq!(normalized.email.body(), "Hi there");
//! assert!(normalized.diagnostics.is_empty());
//! ```

mod config;
mod decode;
mod diagnostic;
mod error;
mod html;
pub mod mime;
mod normalize;
mod parser;
pub mod store;
mod text;
mod types;

pub use config::{BodyPreference, ExtractOptions};
pub use decode::{TransferEncoding, decode, decode_base64, encode_base64};
pub use diagnostic::{Diagnostic, Diagnostics};
pub use error::{Error, Result};
pub use html::html_to_text;
pub use normalize::{Normalized, normalize, normalize_all, normalize_all_with, normalize_with};
pub use parser::{Extraction, extract_body, extract_body_with};
pub use text::flatten;
pub use types::*;
