use serde::Serialize;

use crate::model::SubjectId;

pub mod json;
pub mod text;

pub const HISTOGRAM_BINS: usize = 20;

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkSummary {
    pub requested: Vec<SubjectId>,
    pub found: Vec<SubjectId>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Counts {
    pub n_subjects: usize,
    pub n_ranked: usize,
    pub n_undefined: usize,
    pub n_dimensions_baselined: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Distribution {
    pub min: Option<f64>,
    pub median: Option<f64>,
    pub p90: Option<f64>,
    pub max: Option<f64>,
    pub histogram: Vec<HistogramBin>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BaselineRow {
    pub tgv: String,
    pub baseline_score: f64,
    pub n_records: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedRow {
    pub rank: usize,
    pub employee_id: SubjectId,
    pub final_match_rate: Option<f64>,
    pub n_dimensions: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BreakdownRow {
    pub tgv: String,
    pub tgv_match_rate: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BreakdownSummary {
    pub employee_id: SubjectId,
    pub entries: Vec<BreakdownRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolMeta,
    pub benchmark: BenchmarkSummary,
    pub counts: Counts,
    pub distribution: Distribution,
    pub baseline: Vec<BaselineRow>,
    pub top: Vec<RankedRow>,
    pub breakdown: Option<BreakdownSummary>,
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

pub fn format_rate(v: Option<f64>, decimals: usize) -> String {
    match v {
        Some(x) => format!("{:.*}", decimals, x),
        None => "NA".to_string(),
    }
}

/// Order statistic at `ceil((n - 1) * p)` of the sorted values.
pub fn quantile_indexed(values: &[f64], p: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = sorted.len();
    let idx = (((n - 1) as f64 * p).ceil() as usize).min(n - 1);
    Some(sorted[idx])
}

pub fn median(values: &[f64]) -> Option<f64> {
    quantile_indexed(values, 0.5)
}

pub fn p90(values: &[f64]) -> Option<f64> {
    quantile_indexed(values, 0.90)
}

/// Equal-width bins over `[min, max]`; the maximum falls in the last bin.
pub fn histogram(values: &[f64], n_bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || n_bins == 0 {
        return Vec::new();
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max <= min {
        return vec![HistogramBin {
            lo: min,
            hi: max,
            count: values.len(),
        }];
    }

    let width = (max - min) / n_bins as f64;
    let mut bins: Vec<HistogramBin> = (0..n_bins)
        .map(|i| HistogramBin {
            lo: min + i as f64 * width,
            hi: if i + 1 == n_bins {
                max
            } else {
                min + (i + 1) as f64 * width
            },
            count: 0,
        })
        .collect();
    for &v in values {
        let idx = (((v - min) / width).floor() as usize).min(n_bins - 1);
        bins[idx].count += 1;
    }
    bins
}

pub fn distribution(values: &[f64]) -> Distribution {
    Distribution {
        min: values.iter().copied().reduce(f64::min),
        median: median(values),
        p90: p90(values),
        max: values.iter().copied().reduce(f64::max),
        histogram: histogram(values, HISTOGRAM_BINS),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
