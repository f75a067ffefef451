use anyhow::{Context, Result};
use tracing::info;

use datedim::dimension::DateDimension;
use datedim::export::write_csv_file;

use crate::cli::DatesArgs;
use crate::config::DatedimConfig;

/// Derive the date dimension and write it as CSV.
pub fn run(args: DatesArgs) -> Result<()> {
    let config = DatedimConfig::load(args.config.as_deref())?;

    // CLI flags win over the config file
    let start = args.start.unwrap_or(config.dates.start);
    let end = args.end.unwrap_or(config.dates.end);
    let rule = args.half_year_day.unwrap_or(config.dates.half_year_day);
    let output = args.output.unwrap_or(config.dates.output);

    let dimension = DateDimension::new(start, end)
        .context("invalid date range")?
        .half_year_day(rule);
    info!(%start, %end, rows = dimension.len(), ?rule, "generating date dimension");

    let rows = dimension.rows().context("date derivation failed")?;
    write_csv_file(&output, &rows)
        .with_context(|| format!("failed to write CSV: {}", output.display()))?;
    info!(path = %output.display(), rows = rows.len(), "date dimension written");
    Ok(())
}
