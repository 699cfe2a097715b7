use anyhow::{Context, Result};
use icon_crop::IconJob;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let job = IconJob::default();
    let written = icon_crop::run(&job)
        .with_context(|| format!("failed to produce icons from {}", job.source().display()))?;

    log::debug!("produced {} icons", written.len());
    Ok(())
}
