// Copyright 2026 Uniqstic Research Group. All rights reserved.
// OGI Simulation Suite - Metric Generator

use crate::sampler::Sampler;
use crate::types::ComponentSet;

// Composite index weights. Must sum to exactly 1.0; extend the component
// set only together with a rebalance here.
const W_SELF_CONSISTENCY: f64 = 0.25;
const W_MEMORY_COHERENCE: f64 = 0.20;
const W_LINEAGE_INTEGRITY: f64 = 0.25;
const W_EPISTEMIC_STABILITY: f64 = 0.20;
const W_FEDERATED_YIELD: f64 = 0.10;

const WEIGHT_SUM: f64 = W_SELF_CONSISTENCY
    + W_MEMORY_COHERENCE
    + W_LINEAGE_INTEGRITY
    + W_EPISTEMIC_STABILITY
    + W_FEDERATED_YIELD;

/// Supervisor comments and OGI sync bursts occur every this many epochs.
pub const SUPERVISION_PERIOD: u32 = 5;

/// True on epochs where the OGI fleet performs its deferred knowledge
/// exchange (and the supervisor emits a comment).
pub fn is_sync_epoch(epoch: u32) -> bool {
    epoch % SUPERVISION_PERIOD == 0
}

// ─── Component Synthesis ─────────────────────────────────────────────────────

/// Logarithmic growth floor shared by the OGI components and the OGI
/// headline index: `0.65 + 0.02·ln(e + 1)`.
fn ogi_base(epoch: u32) -> f64 {
    0.65 + 0.02 * f64::from(epoch + 1).ln()
}

/// Synthesize the OGI component set for one epoch. Lineage integrity and
/// federated yield are deterministic ramps; the rest carry gaussian noise.
/// Each field is capped at its own ceiling.
pub fn ogi_components(epoch: u32, sampler: &mut Sampler) -> ComponentSet {
    let base = ogi_base(epoch);
    let e = f64::from(epoch);
    ComponentSet {
        self_consistency: (base + sampler.gauss(0.0, 0.02)).min(0.95),
        memory_coherence: (base + 0.05 + sampler.gauss(0.0, 0.02)).min(0.93),
        lineage_integrity: (0.85 + 0.006 * e).min(0.98),
        epistemic_stability: (base + sampler.gauss(0.0, 0.03)).min(0.92),
        federated_yield: (0.72 + 0.008 * e).min(0.88),
    }
}

/// Synthesize the baseline component set. All fields fluctuate around a
/// shared noisy base with no trend, clamped to their reference ranges.
pub fn baseline_components(sampler: &mut Sampler) -> ComponentSet {
    let base = sampler.gauss(0.55, 0.03);
    ComponentSet {
        self_consistency: (base + sampler.gauss(0.0, 0.05)).clamp(0.40, 0.70),
        memory_coherence: (base - 0.05 + sampler.gauss(0.0, 0.06)).clamp(0.35, 0.68),
        lineage_integrity: (0.45 + sampler.gauss(0.0, 0.08)).clamp(0.30, 0.55),
        epistemic_stability: (base + sampler.gauss(0.0, 0.07)).clamp(0.40, 0.65),
        federated_yield: (0.58 + sampler.gauss(0.0, 0.08)).clamp(0.45, 0.72),
    }
}

/// Weighted blend of the five sub-metrics.
pub fn composite_index(c: &ComponentSet) -> f64 {
    debug_assert!((WEIGHT_SUM - 1.0).abs() < 1e-12);
    W_SELF_CONSISTENCY * c.self_consistency
        + W_MEMORY_COHERENCE * c.memory_coherence
        + W_LINEAGE_INTEGRITY * c.lineage_integrity
        + W_EPISTEMIC_STABILITY * c.epistemic_stability
        + W_FEDERATED_YIELD * c.federated_yield
}

// ─── Headline Time Series ────────────────────────────────────────────────────
//
// The headline index is a separate formula path from the weighted
// composite. The reference behavior computes both and charts this one;
// the two are intentionally not unified.

/// Noise-free headline CCI for the OGI fleet.
pub fn ogi_headline_index(epoch: u32) -> f64 {
    ogi_base(epoch)
}

/// Headline CCI for the baseline fleet: i.i.d. around a fixed mean.
pub fn baseline_headline_index(sampler: &mut Sampler) -> f64 {
    sampler.gauss(0.55, 0.03)
}

// ─── Drift & Communication ───────────────────────────────────────────────────

/// OGI mutation drift decays deterministically to zero by epoch 20.
pub fn ogi_drift(epoch: u32) -> f64 {
    (0.10 - 0.005 * f64::from(epoch)).max(0.0)
}

/// Baseline drift stays high and noisy with no trend.
pub fn baseline_drift(sampler: &mut Sampler) -> f64 {
    sampler.gauss(0.25, 0.05)
}

/// Deferred sync model: OGI transmits compressed insights only on
/// supervision epochs, and exactly nothing otherwise.
pub fn ogi_comm_mb(epoch: u32, sampler: &mut Sampler) -> f64 {
    if is_sync_epoch(epoch) {
        sampler.gauss(15.0, 3.0)
    } else {
        0.0
    }
}

/// Continuous sync model: the baseline uploads full weights every epoch.
pub fn baseline_comm_mb(sampler: &mut Sampler) -> f64 {
    sampler.gauss(45.0, 8.0)
}

/// Knowledge fidelity derived from drift, floored at zero.
pub fn knowledge_fidelity(drift: f64) -> f64 {
    (1.0 - drift).max(0.0)
}
