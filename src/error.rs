// Copyright 2026 Uniqstic Research Group. All rights reserved.
// OGI Simulation Suite - Errors

/// Errors surfaced by the engine. All failures are local precondition
/// violations rejected at the call boundary; a failed call never leaves
/// partial state behind.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("unknown scenario id: {0}")]
    UnknownScenario(String),
}
