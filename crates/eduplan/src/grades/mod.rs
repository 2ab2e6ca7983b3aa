/// Static grade-distribution table
///
/// Purely presentational data: a fixed per-course distribution over eleven
/// grade letters plus a precomputed average. The only derivation is the
/// bucket percentage.
use crate::catalog::normalize;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::warn;

/// Grade letters, in display order.
pub const GRADE_BUCKETS: [&str; 11] = [
    "A+", "A", "A-", "B+", "B", "B-", "C+", "C", "C-", "D", "F",
];

/// Counts per grade letter for one course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeDistribution {
    #[serde(rename = "A+")]
    pub a_plus: u32,
    #[serde(rename = "A")]
    pub a: u32,
    #[serde(rename = "A-")]
    pub a_minus: u32,
    #[serde(rename = "B+")]
    pub b_plus: u32,
    #[serde(rename = "B")]
    pub b: u32,
    #[serde(rename = "B-")]
    pub b_minus: u32,
    #[serde(rename = "C+")]
    pub c_plus: u32,
    #[serde(rename = "C")]
    pub c: u32,
    #[serde(rename = "C-")]
    pub c_minus: u32,
    #[serde(rename = "D")]
    pub d: u32,
    #[serde(rename = "F")]
    pub f: u32,
}

impl GradeDistribution {
    /// Counts in the same order as [`GRADE_BUCKETS`].
    pub fn counts(&self) -> [u32; 11] {
        [
            self.a_plus,
            self.a,
            self.a_minus,
            self.b_plus,
            self.b,
            self.b_minus,
            self.c_plus,
            self.c,
            self.c_minus,
            self.d,
            self.f,
        ]
    }

    pub fn total(&self) -> u32 {
        self.counts().iter().sum()
    }

    /// Per-bucket percentage of the total. An all-zero distribution yields
    /// zero percentages rather than dividing by zero.
    pub fn percentages(&self) -> Vec<(&'static str, f64)> {
        let total = self.total();
        GRADE_BUCKETS
            .iter()
            .zip(self.counts())
            .map(|(grade, count)| {
                let pct = if total == 0 {
                    0.0
                } else {
                    f64::from(count) / f64::from(total) * 100.0
                };
                (*grade, pct)
            })
            .collect()
    }
}

/// Distribution plus precomputed average for one course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeRecord {
    pub distribution: GradeDistribution,
    pub average: f64,
}

/// The full course-code → grade-record table.
#[derive(Debug, Clone, Default)]
pub struct GradeTable {
    records: HashMap<String, GradeRecord>,
}

impl GradeTable {
    /// Loads the table from a JSON file.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading grade table from {}", path.display()))?;
        let records: HashMap<String, GradeRecord> = serde_json::from_str(&content)
            .with_context(|| format!("parsing grade table from {}", path.display()))?;
        Ok(Self { records })
    }

    /// Loads the table, degrading to an empty one on any failure.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load_from_file(path) {
            Ok(table) => table,
            Err(e) => {
                warn!("Falling back to empty grade table: {e:#}");
                Self::default()
            }
        }
    }

    /// Looks up a record by course code, comparing normalized forms.
    pub fn get(&self, code: &str) -> Option<(&str, &GradeRecord)> {
        let wanted = normalize(code);
        self.records
            .iter()
            .find(|(key, _)| normalize(key) == wanted)
            .map(|(key, record)| (key.as_str(), record))
    }

    /// Course codes present in the table, sorted for stable listings.
    pub fn course_codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.records.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
