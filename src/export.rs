// Copyright 2026 Uniqstic Research Group. All rights reserved.
// OGI Simulation Suite - Export Serialization
//
// User-initiated export formats only; writing the result anywhere is the
// host's business.

use std::fmt::Write as _;

use crate::types::{EpochRecord, LogEntry};

/// Column header matching the reference CSV export.
pub const HISTORY_HEADER: &str =
    "scenario,epoch,cci_ogi,cci_baseline,drift_ogi,drift_baseline,comm_ogi_mb,comm_baseline_mb";

/// Serialize the record history as delimited text, one line per epoch
/// plus a header row.
pub fn history_csv(history: &[EpochRecord]) -> String {
    let mut out = String::with_capacity(64 * (history.len() + 1));
    out.push_str(HISTORY_HEADER);
    out.push('\n');
    for r in history {
        let _ = writeln!(
            out,
            "{},{},{:.4},{:.4},{:.4},{:.4},{:.2},{:.2}",
            r.scenario,
            r.epoch,
            r.cci_ogi,
            r.cci_baseline,
            r.drift_ogi,
            r.drift_baseline,
            r.comm_ogi_mb,
            r.comm_baseline_mb,
        );
    }
    out
}

/// Join log entries (already newest-first) into newline-separated text.
pub fn log_text<'a>(entries: impl Iterator<Item = &'a LogEntry>) -> String {
    entries
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LogTag;

    fn record(epoch: u32) -> EpochRecord {
        EpochRecord {
            epoch,
            scenario: "autonomous_labs".to_string(),
            cci_ogi: 0.6931,
            cci_baseline: 0.5517,
            drift_ogi: 0.1,
            drift_baseline: 0.25,
            comm_ogi_mb: 15.5,
            comm_baseline_mb: 44.25,
            fidelity_ogi: 0.9,
            fidelity_baseline: 0.75,
        }
    }

    #[test]
    fn test_history_csv_shape() {
        let csv = history_csv(&[record(0), record(1)]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HISTORY_HEADER);
        assert_eq!(lines[1].split(',').count(), 8);
        assert!(lines[1].starts_with("autonomous_labs,0,0.6931,"));
    }

    #[test]
    fn test_empty_history_is_header_only() {
        let csv = history_csv(&[]);
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn test_log_text_joins_in_given_order() {
        let entries = vec![
            LogEntry { tag: LogTag::OgiCycle, epoch: 1, message: "second".into() },
            LogEntry { tag: LogTag::Init, epoch: 0, message: "first".into() },
        ];
        assert_eq!(log_text(entries.iter()), "second\nfirst");
    }
}
