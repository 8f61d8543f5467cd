//! Check command implementation.

use crate::cli::CheckArgs;
use crate::error::Result;
use crate::output::Formatter;
use chrono::Local;
use shika_domain::Bulletin;
use shika_extractor::Extractor;

/// Execute the check command.
pub fn execute_check(args: CheckArgs, extractor: &Extractor, formatter: &Formatter) -> Result<()> {
    let timestamp = args
        .timestamp
        .unwrap_or_else(|| Local::now().naive_local().format("%Y-%m-%dT%H:%M:%S").to_string());
    let bulletin = Bulletin::new("cli", timestamp, args.text);

    let extraction = extractor.extract_with_diagnostics(&bulletin)?;

    println!(
        "{}",
        formatter.info(&format!(
            "{} segment(s), {} record(s)",
            extraction.segment_count,
            extraction.records.len()
        ))
    );
    if !extraction.records.is_empty() {
        println!("{}", formatter.format_records(&extraction.records)?);
    }
    if extraction.skipped.is_empty() {
        println!("{}", formatter.success("All segments matched"));
    } else {
        println!("{}", formatter.format_diagnostics(&extraction.skipped, &[])?);
    }

    Ok(())
}
