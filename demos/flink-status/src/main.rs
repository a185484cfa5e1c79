use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use pmet_core::MetricsResolver;
use pmet_flink::{FlinkConfig, register_flink_metrics};
use pmet_model::ProgressStats;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    // 1) logger
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    info!("logger initialized");

    // 2) resolver + flink capability
    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:8081".to_string());
    let cfg = FlinkConfig {
        base_url,
        ..Default::default()
    };

    let mut resolver = MetricsResolver::new();
    register_flink_metrics(&mut resolver, &cfg)?;

    // 3) supported runner resolves to a handle
    if let Some(metrics) = resolver.resolve_name("FlinkRunner") {
        match metrics.counters().await {
            Ok(counters) => {
                for counter in counters.iter() {
                    info!(name = counter.name(), value = counter.value(), "counter");
                }
                let progress = ProgressStats::from_counters(&counters);
                info!(
                    processed = progress.processed,
                    total = progress.total,
                    percent = progress.percent(),
                    "pipeline progress",
                );
            }
            Err(e) => warn!(error = %e, "failed to read flink metrics"),
        }
    }

    // 4) unsupported runner resolves to absent, with a logged warning
    let direct = resolver.resolve_name("DirectRunner");
    info!(supported = direct.is_some(), "direct runner metrics");

    Ok(())
}
