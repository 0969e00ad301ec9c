use std::collections::BTreeMap;

use crate::model::{Baseline, BaselineEntry, BenchmarkSet, ScoreRecord};
use crate::report::quantile_indexed;

pub const BASELINE_QUANTILE: f64 = 0.5;

/// Median `adjusted_score` per dimension over benchmark subjects.
///
/// Records of non-benchmark subjects are ignored even if the caller passes them.
pub fn compute_baseline(benchmark: &BenchmarkSet, records: &[ScoreRecord]) -> Baseline {
    let mut by_tgv: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for record in records {
        if !benchmark.contains(record.subject_id) {
            continue;
        }
        by_tgv
            .entry(record.tgv.as_str())
            .or_default()
            .push(record.adjusted_score);
    }

    let mut entries = BTreeMap::new();
    for (tgv, values) in by_tgv {
        if let Some(baseline_score) = quantile_indexed(&values, BASELINE_QUANTILE) {
            entries.insert(
                tgv.to_string(),
                BaselineEntry {
                    baseline_score,
                    n_records: values.len(),
                },
            );
        }
    }

    Baseline { entries }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_baseline.rs"]
mod tests;
