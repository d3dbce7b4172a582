use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use thiserror::Error;

use super::model::{Dataset, Record};

/// Number of positional columns: thread, generation, score.
const FIELD_COUNT: usize = 3;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a results file could not be turned into a [`Dataset`].
///
/// `row` is the 1-based line of the offending record.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("cannot open {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: expected 3 fields (thread,generation,score), found {found}")]
    FieldCount { row: u64, found: usize },

    #[error("row {row}: thread identifier is empty")]
    EmptyThread { row: u64 },

    #[error("row {row}: generation '{value}' is not an integer")]
    InvalidGeneration { row: u64, value: String },

    #[error("row {row}: score '{value}' is not a number")]
    InvalidScore { row: u64, value: String },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a headerless `thread,generation,score` CSV file.
pub fn load_file(path: &Path) -> Result<Dataset, ParseError> {
    let file = File::open(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_reader(file)
}

/// Parse headerless `thread,generation,score` rows from any reader.
///
/// Blank lines are skipped and fields are trimmed. Every other row must carry
/// exactly three fields.
pub fn load_reader<R: Read>(rdr: R) -> Result<Dataset, ParseError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(rdr);

    let mut records = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let raw = result?;
        let row = raw
            .position()
            .map(|p| p.line())
            .unwrap_or(idx as u64 + 1);
        records.push(parse_record(&raw, row)?);
    }

    Ok(Dataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Row parsing
// ---------------------------------------------------------------------------

fn parse_record(raw: &StringRecord, row: u64) -> Result<Record, ParseError> {
    if raw.len() != FIELD_COUNT {
        return Err(ParseError::FieldCount {
            row,
            found: raw.len(),
        });
    }

    let thread = &raw[0];
    if thread.is_empty() {
        return Err(ParseError::EmptyThread { row });
    }

    let generation = raw[1]
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidGeneration {
            row,
            value: raw[1].to_string(),
        })?;

    let score = raw[2]
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidScore {
            row,
            value: raw[2].to_string(),
        })?;

    Ok(Record {
        thread: thread.to_string(),
        generation,
        score,
    })
}
