use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaselineEntry {
    pub baseline_score: f64,
    pub n_records: usize,
}

/// Per-dimension benchmark median. Dimensions without benchmark records are absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Baseline {
    pub entries: BTreeMap<String, BaselineEntry>,
}

impl Baseline {
    pub fn score(&self, tgv: &str) -> Option<f64> {
        self.entries.get(tgv).map(|e| e.baseline_score)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BaselineEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}
