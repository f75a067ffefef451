use anyhow::{Context, Result};
use tracing::info;

use datedim::dimension::TimeDimension;
use datedim::export::write_csv_file;

use crate::cli::TimesArgs;
use crate::config::DatedimConfig;

/// Derive the time-of-day dimension and write it as CSV.
pub fn run(args: TimesArgs) -> Result<()> {
    let config = DatedimConfig::load(args.config.as_deref())?;
    let step = args.step.unwrap_or(config.times.step_seconds);
    let output = args.output.unwrap_or(config.times.output);

    let dimension = TimeDimension::new(step).context("invalid time step")?;
    info!(step, rows = dimension.len(), "generating time dimension");

    let rows = dimension.rows()?;
    write_csv_file(&output, &rows)
        .with_context(|| format!("failed to write CSV: {}", output.display()))?;
    info!(path = %output.display(), "time dimension written");
    Ok(())
}
