//! Post-run aggregation and rendering.

use chatswarm_core::{ActorRecord, ActorSummary};

/// The completed records of one run, in ascending actor-id order.
#[derive(Clone, Debug)]
pub struct SimulationReport {
    records: Vec<ActorRecord>,
}

impl SimulationReport {
    pub fn new(records: Vec<ActorRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ActorRecord] {
        &self.records
    }

    /// Per-actor mean/min/max summaries, one per record.
    pub fn summaries(&self) -> Vec<ActorSummary> {
        self.records.iter().map(ActorSummary::from_record).collect()
    }

    /// Render the summary table: header, separator rule, one fixed-width
    /// row per actor. Pure function of the records; repeated calls yield
    /// byte-identical output.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("=== Per-actor summary ===\n");
        out.push_str(&format!(
            "{:<10} {:>10} {:>16} {:>10} {:>10}\n",
            "Actor", "Start(s)", "Avg(s)", "Min(s)", "Max(s)",
        ));
        out.push_str(&"-".repeat(60));
        out.push('\n');
        for summary in self.summaries() {
            out.push_str(&format!(
                "{:<10} {:>10.1} {:>16.3} {:>10.3} {:>10.3}\n",
                format!("Actor {:02}", summary.id),
                summary.arrival_offset.as_secs_f64(),
                summary.mean_latency.as_secs_f64(),
                summary.min_latency.as_secs_f64(),
                summary.max_latency.as_secs_f64(),
            ));
        }
        out
    }
}
