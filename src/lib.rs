// Copyright 2026 Uniqstic Research Group. All rights reserved.
// OGI Simulation Suite - Engine

pub mod error;
pub mod export;
pub mod metrics;
pub mod sampler;
pub mod scenario;
pub mod simulation;
pub mod stats;
pub mod types;

#[cfg(not(target_arch = "wasm32"))]
pub mod driver;

pub use error::EngineError;
pub use sampler::RngMode;
pub use simulation::{OgiSimulation, EPOCH_CEILING, LOG_CAPACITY, TICK_INTERVAL_MS};
pub use stats::AggregateStats;
pub use types::*;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

// ─── WASM Interface ──────────────────────────────────────────────────────────

#[wasm_bindgen]
impl OgiSimulation {
    /// Construct the engine for the chart front end. Omitting `seed`
    /// selects interactive mode (every run differs); passing it selects
    /// the reproducible variant.
    #[wasm_bindgen(constructor)]
    pub fn new(scenario_id: &str, seed: Option<u32>) -> Result<OgiSimulation, JsValue> {
        #[cfg(target_arch = "wasm32")]
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));

        let mode = match seed {
            Some(s) => RngMode::Reproducible(u64::from(s)),
            None => RngMode::Interactive,
        };
        OgiSimulation::create(scenario_id, mode)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn start(&mut self) -> bool {
        self.start_core()
    }

    pub fn pause(&mut self) {
        self.pause_core();
    }

    pub fn reset(&mut self) {
        self.reset_core();
    }

    pub fn select_scenario(&mut self, id: &str) -> Result<(), JsValue> {
        self.select_scenario_core(id)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Advance one epoch; returns `null` unless the engine was Running.
    pub fn tick(&mut self) -> JsValue {
        match self.tick_core() {
            Some(summary) => {
                serde_wasm_bindgen::to_value(&summary).unwrap_or(JsValue::NULL)
            }
            None => JsValue::NULL,
        }
    }

    /// Run up to N epochs without pacing (fast batch mode).
    pub fn run_batch(&mut self, ticks: u32) {
        self.run_batch_core(ticks);
    }

    pub fn epoch(&self) -> u32 {
        self.current_epoch()
    }

    pub fn state(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.run_state()).unwrap_or(JsValue::NULL)
    }

    pub fn get_scenario(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.current_scenario()).unwrap_or(JsValue::NULL)
    }

    /// Scenario catalog for the selection UI.
    pub fn scenario_catalog() -> JsValue {
        serde_wasm_bindgen::to_value(scenario::catalog()).unwrap_or(JsValue::NULL)
    }

    pub fn get_history(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.history).unwrap_or(JsValue::NULL)
    }

    /// Latest per-epoch component breakdown (radar view), or `null`.
    pub fn get_components(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.components).unwrap_or(JsValue::NULL)
    }

    /// Log ring, newest entry first.
    pub fn get_log(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.log).unwrap_or(JsValue::NULL)
    }

    pub fn get_supervisor_notes(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.supervisor_notes).unwrap_or(JsValue::NULL)
    }

    /// Aggregate statistics, or `null` until enough records exist.
    pub fn get_stats(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.aggregate()).unwrap_or(JsValue::NULL)
    }

    pub fn export_history_csv(&self) -> String {
        export::history_csv(&self.history)
    }

    pub fn export_log_text(&self) -> String {
        export::log_text(self.log.iter())
    }

    pub fn ceiling(&self) -> u32 {
        EPOCH_CEILING
    }

    pub fn tick_interval_ms(&self) -> u32 {
        TICK_INTERVAL_MS as u32
    }
}
