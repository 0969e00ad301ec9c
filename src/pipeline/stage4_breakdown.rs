use std::cmp::Ordering;

use crate::model::{Baseline, BreakdownEntry, ScoreRecord, SubjectId};
use crate::pipeline::stage2_match_rates::match_rate;
use crate::pipeline::stage3_final::desc_nulls_last;

pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Per-dimension match rates for one subject, rounded to 2 decimals and sorted
/// descending with undefined rates kept at the end.
pub fn compute_breakdown(
    subject_id: SubjectId,
    records: &[ScoreRecord],
    baseline: &Baseline,
) -> Vec<BreakdownEntry> {
    let mut out: Vec<BreakdownEntry> = records
        .iter()
        .filter(|r| r.subject_id == subject_id)
        .map(|r| BreakdownEntry {
            tgv: r.tgv.clone(),
            tgv_match_rate: match_rate(r.adjusted_score, baseline.score(&r.tgv)).map(round2),
        })
        .collect();

    out.sort_by(|a, b| match desc_nulls_last(a.tgv_match_rate, b.tgv_match_rate) {
        Ordering::Equal => a.tgv.cmp(&b.tgv),
        other => other,
    });
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_breakdown.rs"]
mod tests;
