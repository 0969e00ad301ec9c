use std::path::{Path, PathBuf};

use crate::input::{load_scores, load_weights};
use crate::model::{BenchmarkSet, DimensionWeight, ScoreRecord, SubjectId};
use crate::store::{ScoreStore, StoreError};

const SCORE_RELATION: &str = "tgv_score";
const WEIGHT_RELATION: &str = "weights";

/// File-backed store over exported score and weight tables.
///
/// Files are re-read on every query so edits between invocations are observed.
#[derive(Debug, Clone)]
pub struct TableStore {
    scores_path: PathBuf,
    weights_path: PathBuf,
}

impl TableStore {
    pub fn new(scores_path: &Path, weights_path: &Path) -> Self {
        Self {
            scores_path: scores_path.to_path_buf(),
            weights_path: weights_path.to_path_buf(),
        }
    }

    pub fn scores_path(&self) -> &Path {
        &self.scores_path
    }

    pub fn weights_path(&self) -> &Path {
        &self.weights_path
    }

    fn scan_scores<F>(&self, keep: F) -> Result<Vec<ScoreRecord>, StoreError>
    where
        F: Fn(&ScoreRecord) -> bool,
    {
        let mut records = load_scores(&self.scores_path)
            .map_err(|e| StoreError::from_input(SCORE_RELATION, e))?;
        records.retain(|r| keep(r));
        Ok(records)
    }
}

impl ScoreStore for TableStore {
    fn benchmark_scores(&self, benchmark: &BenchmarkSet) -> Result<Vec<ScoreRecord>, StoreError> {
        self.scan_scores(|r| benchmark.contains(r.subject_id))
    }

    fn all_scores(&self) -> Result<Vec<ScoreRecord>, StoreError> {
        self.scan_scores(|_| true)
    }

    fn subject_scores(&self, subject_id: SubjectId) -> Result<Vec<ScoreRecord>, StoreError> {
        self.scan_scores(|r| r.subject_id == subject_id)
    }

    fn weights(&self) -> Result<Vec<DimensionWeight>, StoreError> {
        load_weights(&self.weights_path).map_err(|e| StoreError::from_input(WEIGHT_RELATION, e))
    }
}
