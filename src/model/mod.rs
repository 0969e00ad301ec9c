pub mod baseline;
pub mod benchmark;
pub mod records;

pub use baseline::{Baseline, BaselineEntry};
pub use benchmark::BenchmarkSet;
pub use records::{
    BreakdownEntry, DimensionWeight, FinalMatchRecord, MatchRateRecord, ScoreRecord, SubjectId,
};
