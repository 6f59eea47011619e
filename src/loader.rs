//! Semicolon-delimited survey loader.
//!
//! Reads the raw export, renames its columns to canonical names and
//! deserializes every row into a [`Review`].

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::error::LoadError;
use crate::review::Review;

/// Source column name → canonical field name.
pub static COLUMN_RENAMES: &[(&str, &str)] = &[
    ("Higiene", "higiene"),
    ("Preços", "precos"),
    ("Atendimento", "atendimento"),
    ("Comentários", "comentarios"),
    ("Cantina", "cantina"),
    ("bert_label", "sentimento_label"),
    ("model_score", "sentimento_score"),
];

const BOM: char = '\u{feff}';

/// Returns the canonical name for a source column, or the name itself when
/// it is not part of the rename mapping.
pub fn canonical_name(column: &str) -> &str {
    COLUMN_RENAMES
        .iter()
        .find(|(source, _)| *source == column)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(column)
}

/// Applies [`canonical_name`] to every header, dropping a leading BOM first.
pub fn normalize_headers(headers: &StringRecord) -> StringRecord {
    headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let h = if i == 0 { h.trim_start_matches(BOM) } else { h };
            canonical_name(h)
        })
        .collect()
}

/// Loads the survey table from `path`.
///
/// # Errors
///
/// Fails if the file cannot be opened, a canonical column is missing, or any
/// row is malformed. There is no partial recovery.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_reviews(path: impl AsRef<Path>) -> Result<Vec<Review>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let reviews = read_reviews(file)
        .with_context(|| format!("failed to load reviews from {}", path.display()))?;

    info!(rows = reviews.len(), "Survey loaded");
    Ok(reviews)
}

/// Reads the survey table from any reader.
pub fn read_reviews<R: Read>(reader: R) -> Result<Vec<Review>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .from_reader(reader);

    let raw_headers = rdr.headers()?.clone();
    let headers = normalize_headers(&raw_headers);
    debug!(raw = ?raw_headers, normalized = ?headers, "Headers renamed");

    for (_, canonical) in COLUMN_RENAMES {
        if !headers.iter().any(|h| h == *canonical) {
            return Err(LoadError::MissingColumn(canonical.to_string()).into());
        }
    }

    let mut reviews = Vec::new();

    for result in rdr.records() {
        let record = result.context("failed to read record")?;
        let review: Review = record.deserialize(Some(&headers)).with_context(|| {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            format!("malformed record on line {}", line)
        })?;

        if review.canteen.is_empty() {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            return Err(LoadError::MissingCanteen { line }.into());
        }

        reviews.push(review);
    }

    Ok(reviews)
}
