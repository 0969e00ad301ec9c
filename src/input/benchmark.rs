use crate::model::{BenchmarkSet, SubjectId};

/// Parses a comma-separated id list. Tokens that are not plain digits are
/// dropped; `None` when nothing valid remains.
pub fn parse_benchmark_ids(raw: &str) -> Option<BenchmarkSet> {
    let mut ids: Vec<SubjectId> = Vec::new();
    for token in raw.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        if !token.chars().all(|c| c.is_ascii_digit()) {
            tracing::warn!(token = %token, "ignoring non-numeric benchmark id");
            continue;
        }
        match token.parse::<SubjectId>() {
            Ok(id) => ids.push(id),
            Err(_) => tracing::warn!(token = %token, "ignoring out-of-range benchmark id"),
        }
    }
    BenchmarkSet::new(ids)
}
