//! Raw CSV table reading.
//!
//! Registry sheets are exported to CSV with their layout intact: a possible
//! title preamble, one header row, then data rows whose merged cells arrive
//! as empty strings. This module only reads and shapes the table; field
//! semantics live in [`crate::loader`].

use std::path::Path;

use csv::ReaderBuilder;

use crate::error::IngestError;

/// A CSV sheet split into a header row and data rows. Every data row is
/// padded or truncated to the header width.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Collapse internal whitespace runs so headers differing only in spacing
/// compare equal.
pub(crate) fn normalize_header(raw: &str) -> String {
    raw.trim_matches('\u{feff}')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// How many leading rows are probed when locating the header row.
const HEADER_PROBE_ROWS: usize = 10;

/// Read a registry CSV export, locating the header row by content: the
/// first probed row that carries every marker column. Blank rows are
/// dropped; a sheet without a recognizable header is an error.
pub fn read_csv_table(path: &Path, marker_columns: &[&str]) -> Result<CsvTable, IngestError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }

    let Some(header_index) = find_header_row(&raw_rows, marker_columns) else {
        return Err(IngestError::HeaderNotFound {
            path: path.to_path_buf(),
        });
    };

    let headers: Vec<String> = raw_rows[header_index]
        .iter()
        .map(|value| normalize_header(value))
        .collect();
    let rows = raw_rows
        .iter()
        .skip(header_index + 1)
        .map(|record| {
            (0..headers.len())
                .map(|idx| record.get(idx).cloned().unwrap_or_default())
                .collect()
        })
        .collect();

    Ok(CsvTable { headers, rows })
}

fn find_header_row(rows: &[Vec<String>], marker_columns: &[&str]) -> Option<usize> {
    rows.iter()
        .take(HEADER_PROBE_ROWS)
        .position(|row| {
            let cells: Vec<String> = row.iter().map(|cell| normalize_header(cell)).collect();
            marker_columns
                .iter()
                .all(|marker| cells.iter().any(|cell| cell == marker))
        })
}
