use std::path::Path;

use crate::input::{InputError, TableReader, parse_f64};
use crate::model::{ScoreRecord, SubjectId};

pub const SCORE_COLUMNS: [&str; 3] = ["employee_id", "tgv", "adjusted_score"];

pub fn load_scores(path: &Path) -> Result<Vec<ScoreRecord>, InputError> {
    let mut table = TableReader::open(path, &SCORE_COLUMNS)?;
    let source = table.source().to_string();
    let mut records = Vec::new();
    let mut skipped_null = 0usize;

    while let Some((line_no, fields)) = table.next_row()? {
        let subject_id = parse_subject_id(&fields[0], &source, line_no)?;
        let tgv = fields[1].clone();
        if tgv.is_empty() {
            return Err(InputError::Parse(format!(
                "{source} line {line_no}: empty tgv"
            )));
        }
        if is_null(&fields[2]) {
            skipped_null += 1;
            continue;
        }
        let adjusted_score = parse_f64(&fields[2], "adjusted_score", &source, line_no)?;
        records.push(ScoreRecord {
            subject_id,
            tgv,
            adjusted_score,
        });
    }

    if skipped_null > 0 {
        tracing::warn!(
            source = %source,
            rows = skipped_null,
            "score rows with null adjusted_score skipped"
        );
    }
    tracing::debug!(source = %source, rows = records.len(), "score table loaded");
    Ok(records)
}

fn parse_subject_id(value: &str, source: &str, line_no: usize) -> Result<SubjectId, InputError> {
    value.parse::<SubjectId>().map_err(|_| {
        InputError::Parse(format!(
            "{source} line {line_no}: invalid employee_id `{value}`"
        ))
    })
}

fn is_null(value: &str) -> bool {
    value.is_empty() || value.eq_ignore_ascii_case("null") || value.eq_ignore_ascii_case("na")
}
