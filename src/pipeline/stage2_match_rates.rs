use crate::model::{Baseline, MatchRateRecord, ScoreRecord};

/// Division that yields `None` instead of infinity or NaN.
pub fn safe_divide(num: f64, den: f64) -> Option<f64> {
    if den == 0.0 || !num.is_finite() || !den.is_finite() {
        return None;
    }
    let q = num / den;
    if q.is_finite() { Some(q) } else { None }
}

/// `100 * adjusted_score / baseline`, `None` if the baseline is missing or zero.
pub fn match_rate(adjusted_score: f64, baseline_score: Option<f64>) -> Option<f64> {
    baseline_score
        .and_then(|b| safe_divide(adjusted_score, b))
        .map(|q| q * 100.0)
}

/// Left-joins every record onto the baseline. Records are never dropped.
pub fn compute_match_rates(records: &[ScoreRecord], baseline: &Baseline) -> Vec<MatchRateRecord> {
    records
        .iter()
        .map(|record| {
            let baseline_score = baseline.score(&record.tgv);
            MatchRateRecord {
                subject_id: record.subject_id,
                tgv: record.tgv.clone(),
                adjusted_score: record.adjusted_score,
                baseline_score,
                tgv_match_rate: match_rate(record.adjusted_score, baseline_score),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_match_rates.rs"]
mod tests;
