//! End-to-end run against the bundled mock service, compressed into a few
//! seconds of wall clock.

use chatswarm::prelude::*;
use std::time::Duration;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_env_filter("chatswarm=info,mock_service=debug")
        .init();

    let addr = mock_service::spawn().await;

    let url = format!("http://{addr}/delay/ms/150/v1/chat/completions");
    let config = SimulationConfig::new(&url)
        .user_count(5)
        .duration(Duration::from_secs(10))
        .arrival(3.0, 2.0)
        .wait_range(0.5, 1.5);

    let report = run_simulation(config).await?;
    print!("{}", report.render());
    Ok(())
}
