use anyhow::Context;
use image_fetcher::{logging, FetchConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    logging::init_logging(logging::DEFAULT_LOG_LEVEL);

    let config = FetchConfig::default();

    info!("Downloading coffee images from Unsplash...");

    let report = image_fetcher::run(&config)
        .with_context(|| format!("downloading into {}", config.target_dir.display()))?;

    println!();
    print!("{}", report);

    Ok(())
}
