//! JSON persistence for normalized and stripped records

use crate::error::{Error, Result};
use crate::types::{NormalizedEmail, StrippedEmail};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Write any record as pretty-printed JSON, non-ASCII kept verbatim
pub fn save_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|e| Error::io(path, e))
}

pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let json = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(serde_json::from_str(&json)?)
}

/// Save a batch of normalized emails as one JSON array
pub fn save_emails(path: &Path, emails: &[NormalizedEmail]) -> Result<()> {
    save_json(path, emails)?;
    info!("Emails saved to {}", path.display());
    Ok(())
}

pub fn load_emails(path: &Path) -> Result<Vec<NormalizedEmail>> {
    let emails: Vec<NormalizedEmail> = load_json(path)?;
    info!("Loaded {} emails from {}", emails.len(), path.display());
    Ok(emails)
}

/// Write one stripped record per email into `dir`, named after its date.
///
/// Emails sharing a date overwrite each other, the last one wins. Returns
/// the written paths in input order.
pub fn save_stripped(dir: &Path, emails: &[NormalizedEmail]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;

    emails
        .iter()
        .map(|email| {
            let stripped = StrippedEmail::from(email);
            let path = dir.join(stripped.file_name());
            save_json(&path, &stripped)?;
            info!("Stripped email data saved to {}", path.display());
            Ok(path)
        })
        .collect()
}

/// Load every `.json` stripped record in `dir`, ordered by file name
pub fn load_stripped(dir: &Path) -> Result<Vec<StrippedEmail>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();

    paths.iter().map(|path| load_json(path)).collect()
}
