//! JSON persistence for the aggregated views.
//!
//! Every view goes to its own file, indented with four spaces. Floats use
//! serde_json's shortest round-trip rendering and undefined means are `null`.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

use crate::analyzers::types::Report;

pub const AVERAGES_FILE: &str = "medias_por_cantina.json";
pub const REVIEW_COUNTS_FILE: &str = "contagem_avaliacoes_por_cantina.json";
pub const SENTIMENT_BY_CANTEEN_FILE: &str = "analise_sentimento_cantina.json";
pub const SENTIMENT_TOTALS_FILE: &str = "analise_sentimento_total.json";
pub const COMMENT_DETAILS_FILE: &str = "comentarios_detalhados_por_cantina.json";

const INDENT: &[u8] = b"    ";

/// Logs a value as pretty-printed JSON.
pub fn print_json(value: &impl Serialize) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Serializes `value` to `path` as JSON indented with four spaces,
/// overwriting any existing file.
pub fn write_json(path: &Path, value: &impl Serialize) -> Result<()> {
    debug!(path = %path.display(), "Writing JSON");

    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    let mut ser = serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(INDENT));
    value
        .serialize(&mut ser)
        .with_context(|| format!("failed to serialize {}", path.display()))?;
    writer.flush()?;

    Ok(())
}

/// Writes the five report views into `dir`, creating it if needed.
///
/// The writes are independent; a failure part way through leaves the files
/// already written in place.
pub fn write_reports(dir: &Path, report: &Report) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

    write_json(&dir.join(AVERAGES_FILE), &report.averages)?;
    write_json(&dir.join(REVIEW_COUNTS_FILE), &report.review_counts)?;
    write_json(&dir.join(SENTIMENT_BY_CANTEEN_FILE), &report.sentiment_by_canteen)?;
    write_json(&dir.join(SENTIMENT_TOTALS_FILE), &report.sentiment_totals)?;
    write_json(&dir.join(COMMENT_DETAILS_FILE), &report.comment_details)?;

    info!(dir = %dir.display(), files = 5, "Reports written");
    Ok(())
}
