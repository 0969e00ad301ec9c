pub type SubjectId = i64;

/// One subject's observed score on one dimension (`tgv`).
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRecord {
    pub subject_id: SubjectId,
    pub tgv: String,
    pub adjusted_score: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DimensionWeight {
    pub tgv: String,
    pub weight: f64,
}

/// A score record joined to its dimension baseline. `tgv_match_rate` is `None`
/// when the dimension has no baseline or the baseline is zero.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRateRecord {
    pub subject_id: SubjectId,
    pub tgv: String,
    pub adjusted_score: f64,
    pub baseline_score: Option<f64>,
    pub tgv_match_rate: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FinalMatchRecord {
    pub subject_id: SubjectId,
    pub final_match_rate: Option<f64>,
    /// Dimensions that contributed to the weighted mean.
    pub n_dimensions: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownEntry {
    pub tgv: String,
    pub tgv_match_rate: Option<f64>,
}
