//! The per-actor lifecycle: staggered arrival followed by a fixed number of
//! request/wait cycles.

use crate::delay::{actor_rng, arrival_delay, cycle_wait};
use crate::driver::{completion_text, send_chat_request};
use chatswarm_core::{ActorRecord, CycleOutcome, SimulationConfig};
use reqwest::Client;
use std::sync::Arc;
use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};

/// Simulate one user end to end and return its completed record.
///
/// All failures are absorbed here: a cycle that fails records its
/// time-to-failure and still counts toward the cycle total. Nothing this
/// task does can abort its peers.
pub(crate) async fn run_actor(
    id: usize,
    client: Client,
    config: Arc<SimulationConfig>,
    origin: Instant,
) -> ActorRecord {
    let mut rng = actor_rng(config.seed, id);

    let delay = arrival_delay(
        &mut rng,
        config.arrival_mean,
        config.arrival_std_dev,
        config.duration,
    );
    sleep(delay).await;

    // Arrival offset is fixed here, before the first cycle, and never
    // written again.
    let mut record = ActorRecord::new(id, origin.elapsed());

    for cycle in 1..=config.cycles_per_actor {
        let start = Instant::now();
        let outcome = match send_chat_request(&client, &config).await {
            Ok((status, body)) => {
                if let Some(text) = completion_text(&body) {
                    debug!("[actor {id}] completion: {text}");
                }
                CycleOutcome::Status(status)
            }
            Err(err) => CycleOutcome::Failed(err.to_string()),
        };
        let elapsed = start.elapsed();
        record.record_latency(elapsed);

        match &outcome {
            CycleOutcome::Status(status) => info!(
                "[actor {id} | cycle {cycle}] delay {:.1}s | status: {status}, time: {:.3}s",
                delay.as_secs_f64(),
                elapsed.as_secs_f64(),
            ),
            CycleOutcome::Failed(reason) => warn!(
                "[actor {id} | cycle {cycle}] delay {:.1}s | error: {reason}, time: {:.3}s",
                delay.as_secs_f64(),
                elapsed.as_secs_f64(),
            ),
        }

        if cycle < config.cycles_per_actor {
            sleep(cycle_wait(&mut rng, config.wait_range)).await;
        }
    }

    record
}
