use mock_auth::{run, tps_measure_task, Credentials};
use std::net::SocketAddr;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    FmtSubscriber::builder()
        .with_env_filter("mock_auth=debug")
        .init();

    tokio::task::spawn(async { tps_measure_task().await });

    let addr: SocketAddr = "0.0.0.0:8080".parse().unwrap();
    run(addr, Credentials::demo()).await;
}
