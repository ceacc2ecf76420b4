// Structured report types for the reproducible run
// Written as pretty JSON for independent analysis alongside the CSV/log dumps

use ogi_sim_engine::{AggregateStats, EpochRecord};
use serde::Serialize;

/// One scenario's full reproducible session.
#[derive(Debug, Serialize)]
pub struct ScenarioReport {
    pub scenario: String,
    pub label: String,
    pub seed: u64,
    pub epochs: u32,
    pub stats: AggregateStats,
    pub records: Vec<EpochRecord>,
}

/// Top-level report file.
#[derive(Debug, Serialize)]
pub struct ReportFile {
    pub version: &'static str,
    pub prng: &'static str,
    pub base_seed: u64,
    pub scenarios: Vec<ScenarioReport>,
}

/// Mean over a sample slice; 0.0 when empty.
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}
