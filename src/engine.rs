use std::collections::BTreeSet;

use thiserror::Error;

use crate::model::{
    Baseline, BenchmarkSet, BreakdownEntry, FinalMatchRecord, MatchRateRecord, SubjectId,
};
use crate::pipeline::stage1_baseline::compute_baseline;
use crate::pipeline::stage2_match_rates::compute_match_rates;
use crate::pipeline::stage3_final::compute_final_match_rates;
use crate::pipeline::stage4_breakdown::compute_breakdown;
use crate::store::{ScoreStore, StoreError};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("data source error: {0}")]
    DataSource(#[from] StoreError),
}

/// Which subject the breakdown is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakdownTarget {
    None,
    TopRanked,
    Subject(SubjectId),
}

#[derive(Debug, Clone)]
pub struct SubjectBreakdown {
    pub subject_id: SubjectId,
    pub entries: Vec<BreakdownEntry>,
}

/// Everything one ranking request produces.
#[derive(Debug, Clone)]
pub struct MatchRun {
    pub benchmark: BenchmarkSet,
    pub benchmark_found: Vec<SubjectId>,
    pub baseline: Baseline,
    pub ranking: Vec<FinalMatchRecord>,
    pub breakdown: Option<SubjectBreakdown>,
}

impl MatchRun {
    pub fn is_empty(&self) -> bool {
        self.ranking.is_empty()
    }
}

pub fn validate_benchmark(ids: &[SubjectId]) -> Result<BenchmarkSet, EngineError> {
    BenchmarkSet::new(ids.iter().copied()).ok_or_else(|| {
        EngineError::Validation("Please input at least one valid employee ID.".to_string())
    })
}

/// Benchmark-relative match-rate computation over an injected [`ScoreStore`].
///
/// Stateless: each call queries the store again.
pub struct MatchRateEngine<S> {
    store: S,
}

impl<S: ScoreStore> MatchRateEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn compute_baseline(&self, benchmark: &BenchmarkSet) -> Result<Baseline, EngineError> {
        let records = self.store.benchmark_scores(benchmark)?;
        let baseline = compute_baseline(benchmark, &records);
        tracing::debug!(
            benchmark = benchmark.len(),
            records = records.len(),
            dimensions = baseline.len(),
            "baseline computed"
        );
        Ok(baseline)
    }

    pub fn compute_match_rates(
        &self,
        baseline: &Baseline,
    ) -> Result<Vec<MatchRateRecord>, EngineError> {
        let records = self.store.all_scores()?;
        Ok(compute_match_rates(&records, baseline))
    }

    pub fn compute_final_match_rates(
        &self,
        match_rates: &[MatchRateRecord],
    ) -> Result<Vec<FinalMatchRecord>, EngineError> {
        let weights = self.store.weights()?;
        Ok(compute_final_match_rates(match_rates, &weights))
    }

    pub fn compute_dimension_breakdown(
        &self,
        subject_id: SubjectId,
        baseline: &Baseline,
    ) -> Result<Vec<BreakdownEntry>, EngineError> {
        let records = self.store.subject_scores(subject_id)?;
        Ok(compute_breakdown(subject_id, &records, baseline))
    }

    /// Ranked talent list, descending by final match rate, undefined last.
    pub fn run_ranking(
        &self,
        benchmark_ids: &[SubjectId],
    ) -> Result<Vec<FinalMatchRecord>, EngineError> {
        let benchmark = validate_benchmark(benchmark_ids)?;
        let baseline = self.compute_baseline(&benchmark)?;
        let match_rates = self.compute_match_rates(&baseline)?;
        self.compute_final_match_rates(&match_rates)
    }

    pub fn run_breakdown(
        &self,
        subject_id: SubjectId,
        benchmark_ids: &[SubjectId],
    ) -> Result<Vec<BreakdownEntry>, EngineError> {
        let benchmark = validate_benchmark(benchmark_ids)?;
        let baseline = self.compute_baseline(&benchmark)?;
        self.compute_dimension_breakdown(subject_id, &baseline)
    }

    /// Ranking plus optional breakdown sharing one baseline computation.
    pub fn run(
        &self,
        benchmark_ids: &[SubjectId],
        target: BreakdownTarget,
    ) -> Result<MatchRun, EngineError> {
        let benchmark = validate_benchmark(benchmark_ids)?;

        let benchmark_records = self.store.benchmark_scores(&benchmark)?;
        let benchmark_found: Vec<SubjectId> = benchmark_records
            .iter()
            .map(|r| r.subject_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        if benchmark_found.is_empty() {
            tracing::warn!(
                requested = ?benchmark.to_vec(),
                "no benchmark subject found in score table; all match rates will be undefined"
            );
        } else if benchmark_found.len() < benchmark.len() {
            tracing::warn!(
                requested = benchmark.len(),
                found = benchmark_found.len(),
                "some benchmark subjects have no scores"
            );
        }
        let baseline = compute_baseline(&benchmark, &benchmark_records);

        let match_rates = self.compute_match_rates(&baseline)?;
        let ranking = self.compute_final_match_rates(&match_rates)?;
        tracing::info!(
            subjects = ranking.len(),
            dimensions = baseline.len(),
            "ranking computed"
        );

        let breakdown_subject = match target {
            BreakdownTarget::None => None,
            BreakdownTarget::TopRanked => ranking.first().map(|r| r.subject_id),
            BreakdownTarget::Subject(id) => Some(id),
        };
        let breakdown = match breakdown_subject {
            Some(subject_id) => {
                let entries = self.compute_dimension_breakdown(subject_id, &baseline)?;
                if entries.is_empty() {
                    tracing::info!(subject_id, "no scores for breakdown subject");
                }
                Some(SubjectBreakdown {
                    subject_id,
                    entries,
                })
            }
            None => None,
        };

        Ok(MatchRun {
            benchmark,
            benchmark_found,
            baseline,
            ranking,
            breakdown,
        })
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/engine/tests.rs"]
mod tests;
