#[cfg(test)]
mod tests {
    use ogi_sim_engine::{
        LogTag, OgiSimulation, RngMode, RunState, EPOCH_CEILING, LOG_CAPACITY,
    };

    fn sim(seed: u64) -> OgiSimulation {
        OgiSimulation::create("medical_diagnosis", RngMode::Reproducible(seed)).unwrap()
    }

    // ========== Session Lifecycle ==========

    #[test]
    fn test_full_session_produces_twenty_records_and_pauses() {
        let mut sim = sim(1);
        assert_eq!(sim.run_state(), RunState::Idle);
        assert!(sim.start_core());

        sim.run_batch_core(1000);

        assert_eq!(sim.history().len(), EPOCH_CEILING as usize);
        assert_eq!(sim.current_epoch(), EPOCH_CEILING);
        assert_eq!(sim.run_state(), RunState::Paused);
        // No records beyond the ceiling until reset.
        assert!(!sim.start_core());
        assert!(sim.tick_core().is_none());
        assert_eq!(sim.history().len(), EPOCH_CEILING as usize);
    }

    #[test]
    fn test_tick_outside_running_is_noop() {
        let mut sim = sim(2);
        assert!(sim.tick_core().is_none(), "Idle tick must be a no-op");
        assert!(sim.history().is_empty());

        sim.start_core();
        sim.run_batch_core(3);
        sim.pause_core();
        assert!(sim.tick_core().is_none(), "Paused tick must be a no-op");
        assert_eq!(sim.history().len(), 3);
    }

    #[test]
    fn test_pause_and_resume() {
        let mut sim = sim(3);
        sim.start_core();
        sim.run_batch_core(7);
        sim.pause_core();
        assert_eq!(sim.run_state(), RunState::Paused);
        assert_eq!(sim.current_epoch(), 7);

        assert!(sim.start_core(), "Paused sessions must be resumable");
        sim.run_batch_core(1000);
        assert_eq!(sim.history().len(), EPOCH_CEILING as usize);
    }

    #[test]
    fn test_reset_yields_single_init_entry() {
        let mut sim = sim(4);
        sim.start_core();
        sim.run_batch_core(12);
        sim.reset_core();

        assert_eq!(sim.run_state(), RunState::Idle);
        assert_eq!(sim.current_epoch(), 0);
        assert!(sim.history().is_empty());
        assert!(sim.latest_components().is_none());
        assert!(sim.supervisor_log().is_empty());
        assert_eq!(sim.log_ring().len(), 1);
        assert_eq!(sim.log_ring()[0].tag, LogTag::Init);
    }

    #[test]
    fn test_scenario_change_resets_state() {
        let mut sim = sim(5);
        sim.start_core();
        sim.run_batch_core(4);

        sim.select_scenario_core("disaster_response").unwrap();
        assert_eq!(sim.run_state(), RunState::Idle);
        assert_eq!(sim.current_epoch(), 0);
        assert!(sim.history().is_empty());
        assert_eq!(sim.current_scenario().id, "disaster_response");

        sim.start_core();
        sim.run_batch_core(2);
        assert!(sim.history().iter().all(|r| r.scenario == "disaster_response"));
    }

    #[test]
    fn test_unknown_scenario_rejected_without_state_change() {
        let mut sim = sim(6);
        sim.start_core();
        sim.run_batch_core(3);

        let err = sim.select_scenario_core("time_travel");
        assert!(err.is_err());
        // Rejected at selection time: nothing was touched.
        assert_eq!(sim.history().len(), 3);
        assert_eq!(sim.current_epoch(), 3);
        assert_eq!(sim.current_scenario().id, "medical_diagnosis");
        assert_eq!(sim.run_state(), RunState::Running);
    }

    #[test]
    fn test_unknown_scenario_at_construction() {
        let result = OgiSimulation::create("time_travel", RngMode::Reproducible(0));
        assert!(result.is_err());
    }

    // ========== Record Semantics ==========

    #[test]
    fn test_epochs_are_monotone_from_zero() {
        let mut sim = sim(7);
        sim.start_core();
        sim.run_batch_core(1000);
        for (i, r) in sim.history().iter().enumerate() {
            assert_eq!(r.epoch, i as u32);
        }
    }

    #[test]
    fn test_medical_diagnosis_five_ticks() {
        let mut sim = sim(8);
        sim.start_core();
        sim.run_batch_core(5);

        assert_eq!(sim.history().len(), 5);
        let supervisor_epochs: Vec<u32> =
            sim.supervisor_log().iter().map(|c| c.epoch).collect();
        assert_eq!(supervisor_epochs, vec![0], "only epoch 0 is a sync epoch here");
    }

    #[test]
    fn test_supervisor_comment_iff_every_fifth_epoch() {
        let mut sim = sim(9);
        sim.start_core();
        sim.run_batch_core(1000);

        let epochs: Vec<u32> = sim.supervisor_log().iter().map(|c| c.epoch).collect();
        assert_eq!(epochs, vec![0, 5, 10, 15]);
    }

    #[test]
    fn test_ogi_comm_only_on_sync_epochs() {
        let mut sim = sim(10);
        sim.start_core();
        sim.run_batch_core(1000);

        for r in sim.history() {
            if r.epoch % 5 == 0 {
                assert!(r.comm_ogi_mb != 0.0, "epoch {} should sync", r.epoch);
            } else {
                assert_eq!(r.comm_ogi_mb, 0.0, "epoch {} must not sync", r.epoch);
            }
            assert!(r.comm_baseline_mb.is_finite());
        }
    }

    #[test]
    fn test_fidelity_is_one_minus_drift_floored() {
        let mut sim = sim(11);
        sim.start_core();
        sim.run_batch_core(1000);

        for r in sim.history() {
            assert_eq!(r.fidelity_ogi, (1.0 - r.drift_ogi).max(0.0));
            assert_eq!(r.fidelity_baseline, (1.0 - r.drift_baseline).max(0.0));
            assert!(r.fidelity_ogi >= 0.0);
            assert!(r.fidelity_baseline >= 0.0);
        }
    }

    #[test]
    fn test_component_snapshot_tracks_latest_epoch() {
        let mut sim = sim(12);
        sim.start_core();
        sim.run_batch_core(6);

        let snapshot = sim.latest_components().expect("six ticks ran");
        assert_eq!(snapshot.epoch, 5);
        assert!(snapshot.composite_ogi > 0.0);
        assert!(snapshot.composite_baseline > 0.0);
    }

    // ========== Aggregate Statistics ==========

    #[test]
    fn test_stats_gate_at_five_records() {
        let mut sim = sim(13);
        sim.start_core();
        sim.run_batch_core(3);
        assert!(sim.aggregate().is_none(), "3 records is not enough");

        sim.run_batch_core(2);
        let stats = sim.aggregate().expect("5 records is enough");
        assert!(stats.cci_advantage_pct.is_finite());
        assert!(stats.comm_reduction_pct.is_finite());
        assert!(stats.drift_improvement.is_finite());
        assert!(stats.ogi_stability.is_finite());
        assert!(stats.current_cci_gap_pct.is_finite());
    }

    #[test]
    fn test_full_session_favors_ogi() {
        let mut sim = sim(14);
        sim.start_core();
        sim.run_batch_core(1000);

        let stats = sim.aggregate().unwrap();
        // Deferred sync transmits a fraction of the baseline's volume.
        assert!(stats.comm_reduction_pct > 50.0);
        // OGI drift has decayed to 0.005 at epoch 19; baseline hovers near 0.25.
        assert!(stats.drift_improvement > 0.0);
    }

    // ========== Log Ring ==========

    #[test]
    fn test_log_ring_bounded_and_newest_first() {
        let mut sim = sim(15);
        sim.start_core();
        sim.run_batch_core(1000);

        // 20 epochs x 2 tick lines + 4 supervisor lines + 1 init = 45 emitted.
        assert_eq!(sim.log_ring().len(), LOG_CAPACITY);
        let epochs: Vec<u32> = sim.log_ring().iter().map(|e| e.epoch).collect();
        let mut sorted = epochs.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(epochs, sorted, "ring must be newest-first");
        // The init entry was evicted long ago.
        assert!(sim.log_ring().iter().all(|e| e.tag != LogTag::Init));
    }

    // ========== Reproducibility ==========

    #[test]
    fn test_reproducible_runs_are_identical() {
        let mut a = sim(42);
        let mut b = sim(42);
        a.start_core();
        b.start_core();
        a.run_batch_core(1000);
        b.run_batch_core(1000);

        for (ra, rb) in a.history().iter().zip(b.history()) {
            assert_eq!(ra.cci_baseline, rb.cci_baseline);
            assert_eq!(ra.drift_baseline, rb.drift_baseline);
            assert_eq!(ra.comm_ogi_mb, rb.comm_ogi_mb);
            assert_eq!(ra.comm_baseline_mb, rb.comm_baseline_mb);
        }
    }

    #[test]
    fn test_reset_replays_reproducible_stream() {
        let mut sim = sim(42);
        sim.start_core();
        sim.run_batch_core(1000);
        let first: Vec<f64> = sim.history().iter().map(|r| r.cci_baseline).collect();

        sim.reset_core();
        sim.start_core();
        sim.run_batch_core(1000);
        let second: Vec<f64> = sim.history().iter().map(|r| r.cci_baseline).collect();

        assert_eq!(first, second, "reset must replay the same seeded stream");
    }

    // ========== Export ==========

    #[test]
    fn test_history_export_shape() {
        let mut sim = sim(16);
        sim.start_core();
        sim.run_batch_core(1000);

        let csv = ogi_sim_engine::export::history_csv(sim.history());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 1 + EPOCH_CEILING as usize);
        assert!(lines[0].starts_with("scenario,epoch,"));
        assert!(lines[1].starts_with("medical_diagnosis,0,"));
    }

    #[test]
    fn test_log_export_is_newline_joined() {
        let mut sim = sim(17);
        sim.start_core();
        sim.run_batch_core(2);

        let text = ogi_sim_engine::export::log_text(sim.log_ring().iter());
        assert_eq!(text.lines().count(), sim.log_ring().len());
        // Newest first: the top line belongs to the later epoch.
        assert!(text.lines().next().unwrap().contains("Epoch 01"));
    }
}
