//! Message normalization: headers plus flattened body

use crate::config::ExtractOptions;
use crate::diagnostic::Diagnostics;
use crate::parser::extract_body_with;
use crate::text::flatten;
use crate::types::{NormalizedEmail, RawMessage};
use std::thread;
use tracing::debug;

/// A normalized record and the diagnostics collected while building it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// The record handed to summarization
    pub email: NormalizedEmail,

    /// Conditions met while extracting the body, in document order
    pub diagnostics: Diagnostics,
}

/// Normalize one message with default extraction options
#[must_use]
pub fn normalize(raw: &RawMessage) -> Normalized {
    normalize_with(raw, &ExtractOptions::default())
}

/// Build the normalized record for one message.
///
/// Missing `From`, `Subject` or `Date` headers become empty strings. The date
/// is kept verbatim. Never fails.
#[must_use]
pub fn normalize_with(raw: &RawMessage, options: &ExtractOptions) -> Normalized {
    let header = |name: &str| raw.header(name).unwrap_or_default().to_string();

    let extraction = extract_body_with(&raw.payload, options);
    let body = flatten(&extraction.text);

    let email = NormalizedEmail::new(
        raw.id.as_str(),
        header("From"),
        header("Subject"),
        header("Date"),
        body,
    );

    debug!(
        id = email.id(),
        diagnostics = extraction.diagnostics.len(),
        "Normalized email: {}",
        email
    );

    Normalized {
        email,
        diagnostics: extraction.diagnostics,
    }
}

/// Normalize a batch across threads, returning records in input order
#[must_use]
pub fn normalize_all(messages: &[RawMessage]) -> Vec<Normalized> {
    normalize_all_with(messages, &ExtractOptions::default())
}

/// Normalize a batch across threads with explicit options.
///
/// Each message owns its input tree and its output record, so the workers
/// share nothing but the read-only options.
#[must_use]
pub fn normalize_all_with(messages: &[RawMessage], options: &ExtractOptions) -> Vec<Normalized> {
    if messages.len() < 2 {
        return messages.iter().map(|m| normalize_with(m, options)).collect();
    }

    let workers = thread::available_parallelism()
        .map_or(1, std::num::NonZeroUsize::get)
        .min(messages.len());
    let chunk_size = messages.len().div_ceil(workers);

    thread::scope(|scope| {
        let handles: Vec<_> = messages
            .chunks(chunk_size)
            .map(|chunk| {
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|m| normalize_with(m, options))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|handle| match handle.join() {
                Ok(records) => records,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    })
}

const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RawMessage>();
    assert_send_sync::<NormalizedEmail>();
    assert_send_sync::<Normalized>();
    assert_send_sync::<ExtractOptions>();
};
