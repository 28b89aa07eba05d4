use surveyscraper::pipeline;
use surveyscraper::process::stats;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) acquire the dataset ──────────────────────────────────────
    let acquisition = pipeline::acquire();
    info!(
        source = %acquisition.source.label,
        kind = ?acquisition.source.kind,
        rows = acquisition.dataset.row_count(),
        columns = acquisition.dataset.column_count(),
        "dataset ready"
    );

    // ─── 3) report capabilities ──────────────────────────────────────
    for (capability, enabled) in acquisition.capabilities.flags() {
        info!(capability, enabled, "capability");
    }

    // ─── 4) summarize the data ───────────────────────────────────────
    for (column, summary) in stats::numeric_summary(&acquisition.dataset) {
        info!(
            column = %column,
            min = summary.min,
            max = summary.max,
            mean = summary.mean,
            median = summary.median,
            "numeric column"
        );
    }

    for (language, count) in stats::language_counts(&acquisition.dataset).iter().take(10) {
        info!(language = %language, count, "language");
    }
}
