// Copyright 2026 Uniqstic Research Group. All rights reserved.
// OGI Simulation Suite - Aggregate Statistics

use serde::{Deserialize, Serialize};

use crate::types::EpochRecord;

/// Minimum history length before aggregates are reported. Below this the
/// communication denominator can sit near zero.
pub const MIN_RECORDS: usize = 5;

/// Derived figures recomputed from the full record history on demand.
/// Percentages are rounded to one decimal, stability to three, so every
/// consumer sees the same headline numbers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AggregateStats {
    pub cci_advantage_pct: f64,
    pub comm_reduction_pct: f64,
    pub drift_improvement: f64,
    pub ogi_stability: f64,
    pub current_cci_gap_pct: f64,
}

/// Compute aggregates over `history`, or `None` with fewer than
/// [`MIN_RECORDS`] entries.
pub fn compute(history: &[EpochRecord]) -> Option<AggregateStats> {
    if history.len() < MIN_RECORDS {
        return None;
    }
    let n = history.len() as f64;
    let mean_ogi = history.iter().map(|r| r.cci_ogi).sum::<f64>() / n;
    let mean_baseline = history.iter().map(|r| r.cci_baseline).sum::<f64>() / n;
    let sum_comm_ogi = history.iter().map(|r| r.comm_ogi_mb).sum::<f64>();
    let sum_comm_baseline = history.iter().map(|r| r.comm_baseline_mb).sum::<f64>();
    let latest = history.last()?;

    Some(AggregateStats {
        cci_advantage_pct: round1((mean_ogi - mean_baseline) * 100.0),
        comm_reduction_pct: round1((1.0 - sum_comm_ogi / sum_comm_baseline) * 100.0),
        drift_improvement: round1((latest.drift_baseline - latest.drift_ogi) * 100.0),
        ogi_stability: round3(mean_ogi),
        current_cci_gap_pct: round1((latest.cci_ogi - latest.cci_baseline) * 100.0),
    })
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}
