use chatswarm::prelude::*;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_env_filter("chatswarm=info")
        .init();

    let config = SimulationConfig::new("http://localhost:8000/v1/chat/completions");
    let report = run_simulation(config).await?;
    print!("{}", report.render());
    Ok(())
}
