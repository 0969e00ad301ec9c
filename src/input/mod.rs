use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use thiserror::Error;

pub mod benchmark;
pub mod scores;
pub mod weights;

pub use benchmark::parse_benchmark_ids;
pub use scores::load_scores;
pub use weights::load_weights;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error: {0}")]
    Parse(String),
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    if !path.exists() {
        return Err(InputError::MissingInput(path.display().to_string()));
    }
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// `.csv` / `.csv.gz` are comma separated, everything else is tab separated.
pub fn delimiter_for(path: &Path) -> u8 {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    let name = name.strip_suffix(".gz").unwrap_or(&name);
    if name.ends_with(".csv") { b',' } else { b'\t' }
}

/// Header-addressed reader over a delimited text table.
pub struct TableReader {
    reader: csv::Reader<Box<dyn BufRead>>,
    columns: Vec<usize>,
    record: csv::StringRecord,
    source: String,
}

impl TableReader {
    /// Opens `path` and locates `required` columns by case-insensitive header name.
    pub fn open(path: &Path, required: &[&str]) -> Result<Self, InputError> {
        let source = path.display().to_string();
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter_for(path))
            .has_headers(true)
            .flexible(false)
            .trim(csv::Trim::All)
            .from_reader(open_maybe_gz(path)?);

        let header: Vec<String> = reader
            .headers()
            .map_err(|e| csv_error(&source, e))?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').to_ascii_lowercase())
            .collect();
        if header.iter().all(|h| h.is_empty()) {
            return Err(InputError::Parse(format!("{source} is empty")));
        }

        let mut columns = Vec::with_capacity(required.len());
        for name in required {
            match header.iter().position(|h| h.as_str() == *name) {
                Some(idx) => columns.push(idx),
                None => {
                    return Err(InputError::Parse(format!(
                        "{source} header is missing column `{name}`"
                    )));
                }
            }
        }

        Ok(Self {
            reader,
            columns,
            record: csv::StringRecord::new(),
            source,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Reads the next row, returning its line number and the required fields
    /// in the order they were requested. Blank lines are skipped.
    pub fn next_row(&mut self) -> Result<Option<(usize, Vec<String>)>, InputError> {
        let more = self
            .reader
            .read_record(&mut self.record)
            .map_err(|e| csv_error(&self.source, e))?;
        if !more {
            return Ok(None);
        }
        let line_no = self
            .record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(0);
        let fields = self
            .columns
            .iter()
            .map(|&idx| self.record.get(idx).unwrap_or_default().to_string())
            .collect();
        Ok(Some((line_no, fields)))
    }
}

fn csv_error(source: &str, err: csv::Error) -> InputError {
    let line = err.position().map(|p| p.line());
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(io) => InputError::Io(io),
        _ => match line {
            Some(line) => InputError::Parse(format!("{source} line {line}: {message}")),
            None => InputError::Parse(format!("{source}: {message}")),
        },
    }
}

pub fn parse_f64(value: &str, what: &str, source: &str, line_no: usize) -> Result<f64, InputError> {
    let parsed = value
        .parse::<f64>()
        .map_err(|_| InputError::Parse(format!("{source} line {line_no}: invalid {what} `{value}`")))?;
    if !parsed.is_finite() {
        return Err(InputError::Parse(format!(
            "{source} line {line_no}: non-finite {what} `{value}`"
        )));
    }
    Ok(parsed)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
