//! Summary command implementation.

use crate::cli::SummaryArgs;
use crate::error::Result;
use crate::output::Formatter;
use crate::source::JsonFileSource;
use shika_domain::traits::BulletinSource;
use shika_extractor::Extractor;

/// Execute the summary command.
pub fn execute_summary(
    args: SummaryArgs,
    extractor: &Extractor,
    formatter: &Formatter,
) -> Result<()> {
    let bulletins = JsonFileSource::new(&args.input).load()?;
    let report = extractor.extract_batch(&bulletins);

    println!("{}", formatter.format_summary(&report)?);
    Ok(())
}
