// Copyright 2026 Uniqstic Research Group. All rights reserved.
// OGI Simulation Suite - Simulation Core

use std::collections::VecDeque;

use wasm_bindgen::prelude::*;

use crate::error::EngineError;
use crate::metrics;
use crate::sampler::{RngMode, Sampler};
use crate::scenario::{self, Scenario};
use crate::stats::{self, AggregateStats};
use crate::types::*;

/// Ticking halts automatically once the epoch counter reaches this.
pub const EPOCH_CEILING: u32 = 20;

/// Wall-clock pacing used by interactive hosts.
pub const TICK_INTERVAL_MS: u64 = 300;

/// Most-recent entries retained in the log ring.
pub const LOG_CAPACITY: usize = 30;

// ─── OgiSimulation struct ────────────────────────────────────────────────────

#[wasm_bindgen]
pub struct OgiSimulation {
    pub(crate) scenario: &'static Scenario,
    pub(crate) mode: RngMode,
    pub(crate) sampler: Sampler,
    pub(crate) state: RunState,
    pub(crate) epoch: u32,
    pub(crate) history: Vec<EpochRecord>,
    pub(crate) components: Option<ComponentSnapshot>,
    // Newest-first; oldest entries are evicted past LOG_CAPACITY.
    pub(crate) log: VecDeque<LogEntry>,
    pub(crate) supervisor_notes: Vec<SupervisorComment>,
}

// ─── Internal Logic (Testable, pure Rust) ────────────────────────────────────

impl OgiSimulation {
    /// Pure constructor shared by the native and wasm surfaces.
    pub fn create(scenario_id: &str, mode: RngMode) -> Result<Self, EngineError> {
        let scenario = scenario::find(scenario_id)
            .ok_or_else(|| EngineError::UnknownScenario(scenario_id.to_string()))?;
        let mut sim = Self {
            scenario,
            mode,
            sampler: Sampler::new(mode),
            state: RunState::Idle,
            epoch: 0,
            history: Vec::new(),
            components: None,
            log: VecDeque::with_capacity(LOG_CAPACITY),
            supervisor_notes: Vec::new(),
        };
        sim.push_init_entry();
        Ok(sim)
    }

    /// Idle or Paused → Running, provided the ceiling has not been reached.
    /// Returns whether the transition happened.
    pub fn start_core(&mut self) -> bool {
        match self.state {
            RunState::Idle | RunState::Paused if self.epoch < EPOCH_CEILING => {
                self.state = RunState::Running;
                true
            }
            _ => false,
        }
    }

    /// Running → Paused; history is retained and the run is resumable.
    pub fn pause_core(&mut self) {
        if self.state == RunState::Running {
            self.state = RunState::Paused;
        }
    }

    /// Any state → Idle. Clears all history and re-emits the single init
    /// log entry. Reproducible sessions replay the same stream afterwards;
    /// interactive sessions draw a fresh entropy seed.
    pub fn reset_core(&mut self) {
        self.state = RunState::Idle;
        self.epoch = 0;
        self.history.clear();
        self.components = None;
        self.log.clear();
        self.supervisor_notes.clear();
        self.sampler = Sampler::new(self.mode);
        self.push_init_entry();
    }

    /// Validate the id first, then reset under the new scenario. An unknown
    /// id is rejected with no state change at all.
    pub fn select_scenario_core(&mut self, id: &str) -> Result<(), EngineError> {
        let scenario = scenario::find(id)
            .ok_or_else(|| EngineError::UnknownScenario(id.to_string()))?;
        self.scenario = scenario;
        self.reset_core();
        Ok(())
    }

    /// Advance one epoch. No-op unless Running.
    ///
    /// The record and snapshot are fully built before any state is touched,
    /// so a tick can never leave partial history behind.
    pub fn tick_core(&mut self) -> Option<TickSummary> {
        if self.state != RunState::Running {
            return None;
        }
        let epoch = self.epoch;

        let ogi = metrics::ogi_components(epoch, &mut self.sampler);
        let baseline = metrics::baseline_components(&mut self.sampler);
        let snapshot = ComponentSnapshot {
            epoch,
            composite_ogi: metrics::composite_index(&ogi),
            composite_baseline: metrics::composite_index(&baseline),
            ogi,
            baseline,
        };

        let drift_ogi = metrics::ogi_drift(epoch);
        let drift_baseline = metrics::baseline_drift(&mut self.sampler);
        let record = EpochRecord {
            epoch,
            scenario: self.scenario.id.to_string(),
            cci_ogi: metrics::ogi_headline_index(epoch),
            cci_baseline: metrics::baseline_headline_index(&mut self.sampler),
            drift_ogi,
            drift_baseline,
            comm_ogi_mb: metrics::ogi_comm_mb(epoch, &mut self.sampler),
            comm_baseline_mb: metrics::baseline_comm_mb(&mut self.sampler),
            fidelity_ogi: metrics::knowledge_fidelity(drift_ogi),
            fidelity_baseline: metrics::knowledge_fidelity(drift_baseline),
        };

        self.history.push(record.clone());
        self.components = Some(snapshot.clone());

        let id = self.scenario.id;
        self.push_log(
            LogTag::BaselineSync,
            format!("Epoch {epoch:02} [{id}] baseline node: uploading weights to central server"),
        );
        self.push_log(
            LogTag::OgiCycle,
            format!("Epoch {epoch:02} [{id}] OGI node: self-revision cycle complete, local ethics gate passed"),
        );
        if metrics::is_sync_epoch(epoch) {
            let gain = 12 + epoch;
            let message =
                format!("Supervisor: OGI coherence +{gain}%; baseline convergence lagging");
            self.supervisor_notes.push(SupervisorComment {
                epoch,
                message: message.clone(),
            });
            self.push_log(LogTag::Supervisor, message);
        }

        self.epoch += 1;
        if self.epoch >= EPOCH_CEILING {
            // Auto-stop: ceiling reached, resumable only via reset.
            self.state = RunState::Paused;
        }

        Some(TickSummary {
            epoch: self.epoch,
            state: self.state,
            record,
            components: snapshot,
        })
    }

    /// Run up to `ticks` epochs without pacing (fast batch mode).
    pub fn run_batch_core(&mut self, ticks: u32) {
        for _ in 0..ticks {
            if self.tick_core().is_none() {
                break;
            }
        }
    }

    // ─── Readers ────────────────────────────────────────────────────────

    pub fn run_state(&self) -> RunState {
        self.state
    }

    pub fn current_epoch(&self) -> u32 {
        self.epoch
    }

    pub fn current_scenario(&self) -> &'static Scenario {
        self.scenario
    }

    pub fn history(&self) -> &[EpochRecord] {
        &self.history
    }

    pub fn latest_components(&self) -> Option<&ComponentSnapshot> {
        self.components.as_ref()
    }

    /// Log ring, newest entry first.
    pub fn log_ring(&self) -> &VecDeque<LogEntry> {
        &self.log
    }

    pub fn supervisor_log(&self) -> &[SupervisorComment] {
        &self.supervisor_notes
    }

    /// Aggregate statistics over the full history; `None` until enough
    /// records exist.
    pub fn aggregate(&self) -> Option<AggregateStats> {
        stats::compute(&self.history)
    }

    // ─── Log Ring ───────────────────────────────────────────────────────

    fn push_init_entry(&mut self) {
        let s = self.scenario;
        self.push_log(
            LogTag::Init,
            format!(
                "[{}] simulation initialized: {} agents per system, epoch ceiling {}",
                s.id, s.agents, EPOCH_CEILING
            ),
        );
    }

    fn push_log(&mut self, tag: LogTag, message: String) {
        if self.log.len() == LOG_CAPACITY {
            self.log.pop_back();
        }
        self.log.push_front(LogEntry {
            tag,
            epoch: self.epoch,
            message,
        });
    }
}
