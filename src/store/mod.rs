use thiserror::Error;

use crate::input::InputError;
use crate::model::{BenchmarkSet, DimensionWeight, ScoreRecord, SubjectId};

pub mod memory;
pub mod table;

pub use memory::MemoryStore;
pub use table::TableStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("data source unavailable ({relation}): {source}")]
    Unavailable {
        relation: &'static str,
        #[source]
        source: InputError,
    },
    #[error("malformed relation {relation}: {source}")]
    Malformed {
        relation: &'static str,
        #[source]
        source: InputError,
    },
}

impl StoreError {
    pub fn from_input(relation: &'static str, err: InputError) -> Self {
        match err {
            InputError::Io(_) | InputError::MissingInput(_) => StoreError::Unavailable {
                relation,
                source: err,
            },
            InputError::InvalidInput(_) | InputError::Parse(_) => StoreError::Malformed {
                relation,
                source: err,
            },
        }
    }
}

/// Read-only access to the score and weight relations.
///
/// Every call is a fresh query against the underlying source; implementations
/// must not cache between calls.
pub trait ScoreStore {
    /// Score records whose subject is in `benchmark`.
    fn benchmark_scores(&self, benchmark: &BenchmarkSet) -> Result<Vec<ScoreRecord>, StoreError>;

    fn all_scores(&self) -> Result<Vec<ScoreRecord>, StoreError>;

    fn subject_scores(&self, subject_id: SubjectId) -> Result<Vec<ScoreRecord>, StoreError>;

    fn weights(&self) -> Result<Vec<DimensionWeight>, StoreError>;
}

impl<S: ScoreStore + ?Sized> ScoreStore for &S {
    fn benchmark_scores(&self, benchmark: &BenchmarkSet) -> Result<Vec<ScoreRecord>, StoreError> {
        (**self).benchmark_scores(benchmark)
    }

    fn all_scores(&self) -> Result<Vec<ScoreRecord>, StoreError> {
        (**self).all_scores()
    }

    fn subject_scores(&self, subject_id: SubjectId) -> Result<Vec<ScoreRecord>, StoreError> {
        (**self).subject_scores(subject_id)
    }

    fn weights(&self) -> Result<Vec<DimensionWeight>, StoreError> {
        (**self).weights()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/store/tests.rs"]
mod tests;
