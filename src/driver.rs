// Copyright 2026 Uniqstic Research Group. All rights reserved.
// OGI Simulation Suite - Native Tick Pacer

use std::time::Duration;

use crate::simulation::{OgiSimulation, TICK_INTERVAL_MS};
use crate::types::{RunState, TickSummary};

/// Wall-clock pacer for native hosts.
///
/// Arms one sleep per tick and re-checks the run state before each tick,
/// so pausing or resetting between ticks cancels any pending work. Ticks
/// are serialized by construction: there is exactly one mutator, and a
/// tick must complete before the next one is armed.
///
/// Browser hosts arm their own timer and call `tick()`; the state guard
/// in the core gives them the same cancellation semantics.
pub struct TickPacer {
    interval: Duration,
}

impl TickPacer {
    pub fn new() -> Self {
        Self {
            interval: Duration::from_millis(TICK_INTERVAL_MS),
        }
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self { interval }
    }

    /// Drive the simulation until it leaves the Running state (pause,
    /// reset, or epoch ceiling). `on_tick` observes each completed epoch.
    pub fn run<F>(&self, sim: &mut OgiSimulation, mut on_tick: F)
    where
        F: FnMut(&OgiSimulation, &TickSummary),
    {
        while sim.run_state() == RunState::Running {
            std::thread::sleep(self.interval);
            match sim.tick_core() {
                Some(summary) => on_tick(sim, &summary),
                None => break,
            }
        }
    }
}

impl Default for TickPacer {
    fn default() -> Self {
        Self::new()
    }
}
