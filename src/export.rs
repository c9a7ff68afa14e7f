//! JSON and CSV exporters
//!
//! Both exporters truncate and overwrite their target file. Nothing is cleaned up when a later
//! step fails: a written `voices.json` stays on disk even if the CSV export errors.

use crate::{
    error::ExportError,
    voice::{VoiceCollection, VoiceRecord},
};
use serde_json::Value;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// CSV columns, in output order.
pub const COLUMNS: [&str; 7] = [
    "voice_id",
    "name",
    "category",
    "gender",
    "age",
    "accent",
    "description",
];

/// One flattened CSV row.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct VoiceRow {
    pub voice_id: String,
    pub name: String,
    pub category: String,
    pub gender: String,
    pub age: String,
    pub accent: String,
    pub description: String,
}

impl From<VoiceRecord> for VoiceRow {
    fn from(record: VoiceRecord) -> Self {
        Self {
            voice_id: record.voice_id,
            name: record.name,
            category: record.category,
            gender: record.labels.gender,
            age: record.labels.age,
            accent: record.labels.accent,
            description: record.description,
        }
    }
}

/// Write the full response, pretty-printed with a 2-space indent and non-ASCII kept as is.
pub fn write_json(path: &Path, voices: &VoiceCollection) -> Result<(), ExportError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, voices.raw())?;
    writer.flush()?;
    tracing::info!(path = %path.display(), "wrote json export");
    Ok(())
}

/// Flatten `voices` into rows, in response order. A missing `voices` key gives no rows.
pub fn voice_rows(voices: &VoiceCollection) -> Result<Vec<VoiceRow>, ExportError> {
    let items = match voices.raw().get("voices") {
        None => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(ExportError::VoicesNotSequence),
    };
    Ok(items
        .iter()
        .map(|item| VoiceRow::from(VoiceRecord::from_value(item)))
        .collect())
}

/// Write the header and one fully quoted row per voice. Returns the number of voice rows.
pub fn write_csv(path: &Path, voices: &VoiceCollection) -> Result<usize, ExportError> {
    let rows = voice_rows(voices)?;
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::CRLF)
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(COLUMNS)?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    tracing::info!(path = %path.display(), rows = rows.len(), "wrote csv export");
    Ok(rows.len())
}
