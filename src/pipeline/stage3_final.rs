use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::model::{DimensionWeight, FinalMatchRecord, MatchRateRecord, SubjectId};
use crate::pipeline::stage2_match_rates::safe_divide;

#[derive(Debug, Default)]
struct WeightedSum {
    numerator: f64,
    denominator: f64,
    n_dimensions: usize,
}

/// Weighted mean of match rates per subject, ranked.
///
/// A record contributes only when both its rate and its dimension weight are
/// defined. Subjects with no contributing weight get `None` and rank last.
pub fn compute_final_match_rates(
    match_rates: &[MatchRateRecord],
    weights: &[DimensionWeight],
) -> Vec<FinalMatchRecord> {
    let weight_by_tgv = weight_lookup(weights);

    let mut sums: BTreeMap<SubjectId, WeightedSum> = BTreeMap::new();
    for record in match_rates {
        let sum = sums.entry(record.subject_id).or_default();
        let Some(rate) = record.tgv_match_rate else {
            continue;
        };
        let Some(&weight) = weight_by_tgv.get(record.tgv.as_str()) else {
            continue;
        };
        sum.numerator += rate * weight;
        sum.denominator += weight;
        sum.n_dimensions += 1;
    }

    let mut out: Vec<FinalMatchRecord> = sums
        .into_iter()
        .map(|(subject_id, sum)| FinalMatchRecord {
            subject_id,
            final_match_rate: safe_divide(sum.numerator, sum.denominator),
            n_dimensions: sum.n_dimensions,
        })
        .collect();
    out.sort_by(rank_order);
    out
}

/// Descending by rate, undefined last, then ascending subject id.
pub fn rank_order(a: &FinalMatchRecord, b: &FinalMatchRecord) -> Ordering {
    match desc_nulls_last(a.final_match_rate, b.final_match_rate) {
        Ordering::Equal => a.subject_id.cmp(&b.subject_id),
        other => other,
    }
}

pub fn desc_nulls_last(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn weight_lookup(weights: &[DimensionWeight]) -> BTreeMap<&str, f64> {
    let mut map = BTreeMap::new();
    for w in weights {
        map.entry(w.tgv.as_str()).or_insert(w.weight);
    }
    map
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_final.rs"]
mod tests;
