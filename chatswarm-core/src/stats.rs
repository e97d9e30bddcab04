use crate::data::ActorRecord;
use std::time::Duration;

/// Per-actor latency statistics over one completed record.
///
/// Mean, min and max only; a failed cycle's time-to-failure is folded in
/// like any other latency.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActorSummary {
    pub id: usize,
    pub arrival_offset: Duration,
    pub mean_latency: Duration,
    pub min_latency: Duration,
    pub max_latency: Duration,
}

impl ActorSummary {
    pub fn from_record(record: &ActorRecord) -> Self {
        // Records always carry a full cycle count by the time they are
        // summarized; the max(1) only keeps an empty record from dividing
        // by zero.
        let count = record.latencies.len().max(1) as u32;
        Self {
            id: record.id,
            arrival_offset: record.arrival_offset,
            mean_latency: record.latencies.iter().sum::<Duration>() / count,
            min_latency: record.latencies.iter().min().copied().unwrap_or(Duration::ZERO),
            max_latency: record.latencies.iter().max().copied().unwrap_or(Duration::ZERO),
        }
    }
}
