//! Import file readers: JSON arrays, JSON Lines and CSV

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::{ItemRecord, ListField};
use crate::error::{Result, SimrecError};

/// Layout of an import file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    /// JSON array, or JSON Lines when the text does not start with `[`
    Json,
    JsonLines,
    /// Header row plus one record per row; list columns are comma-joined
    Csv,
}

impl RecordFormat {
    /// Pick the format from the file extension; anything unknown is JSON
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "csv" => RecordFormat::Csv,
            "jsonl" | "ndjson" => RecordFormat::JsonLines,
            _ => RecordFormat::Json,
        }
    }
}

/// Read records from an import file, choosing the reader by extension
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn load_records(path: &Path) -> Result<Vec<ItemRecord>> {
    let content = fs::read_to_string(path)
        .map_err(|e| SimrecError::io_operation("read", path.display(), e))?;
    let format = RecordFormat::from_path(path);
    let records = match format {
        RecordFormat::Json => parse_records(&content)?,
        RecordFormat::JsonLines => parse_json_lines(&content)?,
        RecordFormat::Csv => parse_csv_records(&content)?,
    };
    debug!(count = records.len(), ?format, "load_records");
    Ok(records)
}

/// Parse records from a JSON array or from JSON Lines text
pub fn parse_records(content: &str) -> Result<Vec<ItemRecord>> {
    if content.trim_start().starts_with('[') {
        return serde_json::from_str(content).map_err(|e| json_error(e.line(), &e));
    }
    parse_json_lines(content)
}

fn parse_json_lines(content: &str) -> Result<Vec<ItemRecord>> {
    let mut records = Vec::new();
    for (line_no, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(line).map_err(|e| json_error(line_no + 1, &e))?;
        records.push(record);
    }
    Ok(records)
}

/// serde_json appends "at line L column C"; keep the message and report the
/// column separately so the line is not stated twice
fn json_error(line: usize, e: &serde_json::Error) -> SimrecError {
    let message = e.to_string();
    let reason = match message.rsplit_once(" at line ") {
        Some((head, _)) => format!("{} (column {})", head, e.column()),
        None => message,
    };
    SimrecError::malformed_records(line, reason)
}

/// One CSV row; empty cells deserialize as `None`
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default, alias = "movie_id")]
    id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    tags: Option<String>,
    #[serde(default)]
    overview: Option<String>,
    #[serde(default)]
    genres: Option<String>,
    #[serde(default)]
    keywords: Option<String>,
    #[serde(default)]
    cast: Option<String>,
    #[serde(default)]
    crew: Option<String>,
}

impl From<CsvRow> for ItemRecord {
    fn from(row: CsvRow) -> Self {
        let joined = |field: Option<String>| field.map(ListField::Joined).unwrap_or_default();
        ItemRecord {
            id: row.id,
            title: row.title,
            tags: row.tags,
            overview: row.overview,
            genres: joined(row.genres),
            keywords: joined(row.keywords),
            cast: joined(row.cast),
            crew: joined(row.crew),
        }
    }
}

/// Parse CSV text with a header row; unknown columns are ignored
pub fn parse_csv_records(content: &str) -> Result<Vec<ItemRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut records = Vec::new();
    for row in reader.deserialize::<CsvRow>() {
        let row = row.map_err(|e| {
            let line = e.position().map(|p| p.line() as usize).unwrap_or(0);
            SimrecError::malformed_records(line, e)
        })?;
        records.push(ItemRecord::from(row));
    }
    Ok(records)
}
