// Copyright 2026 Uniqstic Research Group. All rights reserved.
// OGI Simulation Suite - Scenario Catalog

use serde::Serialize;

/// Static scenario descriptor. Immutable; selecting one resets all
/// derived simulation state.
#[derive(Debug, Clone, Serialize)]
pub struct Scenario {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    /// Agent count per system (both fleets are sized equally).
    pub agents: u32,
    pub ogi_sync: &'static str,
    pub baseline_sync: &'static str,
}

pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        id: "medical_diagnosis",
        label: "Medical Diagnosis",
        description: "Five hospitals developing shared diagnostic intelligence \
                      for rare diseases without exchanging patient data.",
        agents: 5,
        ogi_sync: "Deferred supervised knowledge exchange every 5 epochs",
        baseline_sync: "Continuous weight upload to a central server each epoch",
    },
    Scenario {
        id: "disaster_response",
        label: "Disaster Response",
        description: "Field units refining coordination models under \
                      intermittent connectivity and air-gapped operation.",
        agents: 5,
        ogi_sync: "Deferred supervised knowledge exchange every 5 epochs",
        baseline_sync: "Continuous weight upload to a central server each epoch",
    },
    Scenario {
        id: "autonomous_labs",
        label: "Autonomous Labs",
        description: "Autonomous laboratories co-developing experiment \
                      planning policies from local trial outcomes.",
        agents: 5,
        ogi_sync: "Deferred supervised knowledge exchange every 5 epochs",
        baseline_sync: "Continuous weight upload to a central server each epoch",
    },
];

/// Look up a scenario by id.
pub fn find(id: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.id == id)
}

/// The full catalog, for selection UIs.
pub fn catalog() -> &'static [Scenario] {
    SCENARIOS
}
