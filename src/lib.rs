//! Benchmark-relative talent match ranking.
//!
//! A [`MatchRateEngine`] derives a per-TGV median baseline from a set of
//! benchmark employees, expresses every employee's scores as a percentage of
//! that baseline, and ranks employees by the weighted mean of those rates.

pub mod engine;
pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod store;

pub use engine::{BreakdownTarget, EngineError, MatchRateEngine, MatchRun, SubjectBreakdown};
pub use model::{
    Baseline, BenchmarkSet, BreakdownEntry, DimensionWeight, FinalMatchRecord, MatchRateRecord,
    ScoreRecord, SubjectId,
};
pub use store::{MemoryStore, ScoreStore, StoreError, TableStore};
