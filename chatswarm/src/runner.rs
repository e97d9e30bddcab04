//! Fan-out/fan-in coordination of one simulation run.

use crate::actor::run_actor;
use crate::report::SimulationReport;
use chatswarm_core::SimulationConfig;
use reqwest::Client;
use std::sync::Arc;
use thiserror::Error;
use tokio::time::Instant;
use tracing::info;

#[derive(Debug, Error)]
pub enum RunError {
    /// An actor task panicked or was cancelled. The report would be missing
    /// a row, so the run surfaces the failure instead of papering over it.
    /// Request failures never reach this path; actors absorb them.
    #[error("actor task failed to complete: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Run one full simulation: spawn every actor, wait for all of them, and
/// collect the completed records into a report.
///
/// The experiment origin is captured once, before any actor launches, and
/// one connection pool is shared across actors. The join is wait-for-all
/// with no timeout: a stalled actor holds up the whole report rather than
/// producing partial results.
pub async fn run_simulation(config: SimulationConfig) -> Result<SimulationReport, RunError> {
    info!(
        "Running {} actors against {}",
        config.user_count, config.url
    );

    let origin = Instant::now();
    let client = Client::new();
    let config = Arc::new(config);

    let mut tasks = Vec::with_capacity(config.user_count);
    for id in 1..=config.user_count {
        tasks.push(tokio::spawn(run_actor(
            id,
            client.clone(),
            Arc::clone(&config),
            origin,
        )));
    }

    let mut records = Vec::with_capacity(tasks.len());
    for task in tasks {
        records.push(task.await?);
    }
    records.sort_by_key(|record| record.id);

    info!("Simulation complete");

    Ok(SimulationReport::new(records))
}
