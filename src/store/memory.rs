use crate::model::{BenchmarkSet, DimensionWeight, ScoreRecord, SubjectId};
use crate::store::{ScoreStore, StoreError};

/// In-memory relations, used for tests and when the caller already holds the data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub scores: Vec<ScoreRecord>,
    pub weights: Vec<DimensionWeight>,
}

impl MemoryStore {
    pub fn new(scores: Vec<ScoreRecord>, weights: Vec<DimensionWeight>) -> Self {
        Self { scores, weights }
    }
}

impl ScoreStore for MemoryStore {
    fn benchmark_scores(&self, benchmark: &BenchmarkSet) -> Result<Vec<ScoreRecord>, StoreError> {
        Ok(self
            .scores
            .iter()
            .filter(|r| benchmark.contains(r.subject_id))
            .cloned()
            .collect())
    }

    fn all_scores(&self) -> Result<Vec<ScoreRecord>, StoreError> {
        Ok(self.scores.clone())
    }

    fn subject_scores(&self, subject_id: SubjectId) -> Result<Vec<ScoreRecord>, StoreError> {
        Ok(self
            .scores
            .iter()
            .filter(|r| r.subject_id == subject_id)
            .cloned()
            .collect())
    }

    fn weights(&self) -> Result<Vec<DimensionWeight>, StoreError> {
        Ok(self.weights.clone())
    }
}
