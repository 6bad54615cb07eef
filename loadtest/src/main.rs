use auth_loadtest::login::{self, login_scenario};
use auth_loadtest::LoadProfile;
use balter::prelude::*;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    FmtSubscriber::builder()
        .with_env_filter("balter=info,auth_loadtest=info")
        .init();

    PrometheusBuilder::new()
        .with_http_listener("0.0.0.0:8002".parse::<SocketAddr>().unwrap())
        .install()
        .unwrap();

    let profile = LoadProfile::constant_rps();
    profile.validate().unwrap();
    info!("Running login scenario with {profile:?}");

    let stats = login_scenario()
        .tps(profile.goal_tps().into())
        .duration(profile.duration)
        .await;

    info!(
        "Run complete: goal tps {}, concurrency {}",
        stats.goal_tps, stats.concurrency
    );

    if stats.concurrency > profile.max_concurrency {
        warn!(
            "run needed {} workers, above the configured ceiling of {}",
            stats.concurrency, profile.max_concurrency
        );
    }

    let checks = login::checks();
    for check in [&checks.status_is_200, &checks.token_received] {
        info!(
            "check '{}': {} passed, {} failed",
            check.name(),
            check.passes(),
            check.fails()
        );
    }
}
