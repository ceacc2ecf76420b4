// Console Demo: one scenario in real time, interactive mode
//
// Usage:
//   cargo run --bin demo                      # medical_diagnosis
//   cargo run --bin demo -- disaster_response

use ogi_sim_engine::driver::TickPacer;
use ogi_sim_engine::{metrics, OgiSimulation, RngMode, EPOCH_CEILING};

fn main() {
    let scenario_id = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "medical_diagnosis".to_string());

    let mut sim = match OgiSimulation::create(&scenario_id, RngMode::Interactive) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let s = sim.current_scenario();
    println!("\n  OGI vs Federated Baseline: {}", s.label);
    println!("  {}", s.description);
    println!("  OGI sync:      {}", s.ogi_sync);
    println!("  Baseline sync: {}\n", s.baseline_sync);

    sim.start_core();
    let pacer = TickPacer::new();
    pacer.run(&mut sim, |_, tick| {
        let r = &tick.record;
        let sync_marker = if metrics::is_sync_epoch(r.epoch) {
            "  [sync]"
        } else {
            ""
        };
        println!(
            "  epoch {:2}/{}  cci ogi={:.3} baseline={:.3}  drift ogi={:.3} baseline={:.3}{}",
            r.epoch,
            EPOCH_CEILING,
            r.cci_ogi,
            r.cci_baseline,
            r.drift_ogi,
            r.drift_baseline,
            sync_marker,
        );
    });

    match sim.aggregate() {
        Some(stats) => {
            println!("\n  Final results:");
            println!("    CCI advantage:           +{:.1}%", stats.cci_advantage_pct);
            println!("    Communication reduction: {:.1}%", stats.comm_reduction_pct);
            println!("    Drift improvement:       {:.1}", stats.drift_improvement);
            println!("    OGI stability:           {:.3}\n", stats.ogi_stability);
        }
        None => println!("\n  Session too short for aggregate statistics.\n"),
    }
}
