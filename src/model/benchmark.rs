use std::collections::BTreeSet;

use crate::model::records::SubjectId;

/// Deduplicated, never-empty set of benchmark subject ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkSet {
    ids: BTreeSet<SubjectId>,
}

impl BenchmarkSet {
    /// Returns `None` when `ids` yields nothing.
    pub fn new<I>(ids: I) -> Option<Self>
    where
        I: IntoIterator<Item = SubjectId>,
    {
        let ids: BTreeSet<SubjectId> = ids.into_iter().collect();
        if ids.is_empty() {
            None
        } else {
            Some(Self { ids })
        }
    }

    pub fn contains(&self, id: SubjectId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = SubjectId> + '_ {
        self.ids.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<SubjectId> {
        self.iter().collect()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/benchmark.rs"]
mod tests;
