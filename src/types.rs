// Copyright 2026 Uniqstic Research Group. All rights reserved.
// OGI Simulation Suite - Type Definitions

use serde::{Deserialize, Serialize};

// ─── Run State ───────────────────────────────────────────────────────────────

/// Tick driver state machine. `Idle` means epoch 0 with no history;
/// `Paused` retains history with ticking suspended.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Paused,
}

// ─── Log Entries ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LogTag {
    /// Emitted once on every (re)initialization.
    Init,
    /// Baseline node uploading weights to the central server.
    BaselineSync,
    /// OGI node completing a local self-revision cycle.
    OgiCycle,
    /// Periodic supervisor annotation.
    Supervisor,
}

/// One line of the bounded simulation log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub tag: LogTag,
    pub epoch: u32,
    pub message: String,
}

/// Synthetic supervisor annotation, emitted on supervision epochs only.
/// Unlike the log ring this list is unbounded for the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupervisorComment {
    pub epoch: u32,
    pub message: String,
}

// ─── EpochRecord ─────────────────────────────────────────────────────────────

/// One entry per completed tick. Append-only, ordered by epoch ascending,
/// never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochRecord {
    pub epoch: u32,
    pub scenario: String,
    /// Headline Continuity Coherence Index per system.
    pub cci_ogi: f64,
    pub cci_baseline: f64,
    pub drift_ogi: f64,
    pub drift_baseline: f64,
    pub comm_ogi_mb: f64,
    pub comm_baseline_mb: f64,
    /// Derived knowledge fidelity: `max(0, 1 - drift)`.
    pub fidelity_ogi: f64,
    pub fidelity_baseline: f64,
}

// ─── Component Breakdown ─────────────────────────────────────────────────────

/// The five sub-metrics feeding the weighted composite index.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ComponentSet {
    pub self_consistency: f64,
    pub memory_coherence: f64,
    pub lineage_integrity: f64,
    pub epistemic_stability: f64,
    pub federated_yield: f64,
}

/// Per-epoch component breakdown for both systems, plus each side's
/// weighted composite. Only the latest snapshot is retained (the radar
/// view has no history), so this is overwritten each tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentSnapshot {
    pub epoch: u32,
    pub ogi: ComponentSet,
    pub baseline: ComponentSet,
    pub composite_ogi: f64,
    pub composite_baseline: f64,
}

// ─── TickSummary ─────────────────────────────────────────────────────────────

/// Result of one completed tick, handed to the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct TickSummary {
    /// Epoch counter after the tick (equals the history length).
    pub epoch: u32,
    pub state: RunState,
    pub record: EpochRecord,
    pub components: ComponentSnapshot,
}
