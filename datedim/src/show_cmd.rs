use anyhow::{Context, Result};

use datedim::dimension::{DateRow, HolidayClassifier};

use crate::cli::ShowArgs;

/// Print every attribute of one date key as `column = value` lines.
pub fn run(args: ShowArgs) -> Result<()> {
    let classifier = HolidayClassifier::united_states();
    let row = DateRow::derive(args.key, &classifier, args.half_year_day)
        .with_context(|| format!("cannot derive attributes of {}", args.key))?;
    let text = toml::to_string(&row).context("failed to format row")?;
    print!("{text}");
    Ok(())
}
