use std::path::Path;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mynews::{pipeline, registry};

const OUTPUT_PATH: &str = "index.html";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout is reserved for progress output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mynews=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let feeds = registry::default_feeds();
    pipeline::run(&feeds, Path::new(OUTPUT_PATH)).await?;

    Ok(())
}
