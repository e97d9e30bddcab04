use std::net::SocketAddr;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    FmtSubscriber::builder()
        .with_env_filter("mock_service=debug")
        .init();

    tokio::task::spawn(async { mock_service::rps_measure_task().await });

    let addr: SocketAddr = "0.0.0.0:3000".parse().unwrap();
    mock_service::run(addr).await;
}
