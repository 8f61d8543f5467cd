//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::source::JsonFileSource;
use shika_domain::traits::BulletinSource;
use shika_extractor::Extractor;
use tracing::info;

/// Execute the extract command.
pub fn execute_extract(
    args: ExtractArgs,
    extractor: &Extractor,
    formatter: &Formatter,
) -> Result<()> {
    if let (Some(since), Some(until)) = (args.since, args.until) {
        if since > until {
            return Err(CliError::InvalidInput(format!(
                "--since {} is after --until {}",
                since, until
            )));
        }
    }

    let bulletins = JsonFileSource::new(&args.input).load()?;
    info!("Loaded {} bulletins from {}", bulletins.len(), args.input.display());

    let mut report = extractor.extract_batch(&bulletins);
    report.records.retain(|r| {
        args.since.map_or(true, |d| r.date() >= d)
            && args.until.map_or(true, |d| r.date() <= d)
            && (args.category.is_empty() || args.category.contains(&r.object_category()))
    });

    println!("{}", formatter.format_records(&report.records)?);

    if args.diagnostics {
        let diagnostics = formatter.format_diagnostics(&report.skipped, &report.rejected)?;
        if !diagnostics.is_empty() {
            eprintln!("{}", diagnostics);
        }
    }

    Ok(())
}
