use std::collections::BTreeSet;
use std::path::Path;

use crate::input::{InputError, TableReader, parse_f64};
use crate::model::DimensionWeight;

pub const WEIGHT_COLUMNS: [&str; 2] = ["tgv", "weight"];

/// Loads the weight relation. Keeps the first row per `tgv`.
pub fn load_weights(path: &Path) -> Result<Vec<DimensionWeight>, InputError> {
    let mut table = TableReader::open(path, &WEIGHT_COLUMNS)?;
    let source = table.source().to_string();
    let mut seen = BTreeSet::new();
    let mut weights = Vec::new();

    while let Some((line_no, fields)) = table.next_row()? {
        let tgv = fields[0].clone();
        if tgv.is_empty() {
            return Err(InputError::Parse(format!(
                "{source} line {line_no}: empty tgv"
            )));
        }
        let weight = parse_f64(&fields[1], "weight", &source, line_no)?;
        if weight < 0.0 {
            return Err(InputError::InvalidInput(format!(
                "{source} line {line_no}: negative weight {weight} for tgv `{tgv}`"
            )));
        }
        if !seen.insert(tgv.clone()) {
            tracing::warn!(
                source = %source,
                line = line_no,
                tgv = %tgv,
                "duplicate weight row; keeping first"
            );
            continue;
        }
        weights.push(DimensionWeight { tgv, weight });
    }

    tracing::debug!(source = %source, rows = weights.len(), "weight table loaded");
    Ok(weights)
}
