//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use shika_domain::{IncidentRecord, ObjectCategory};
use shika_extractor::{ExtractionReport, RejectedBulletin, SkippedSegment};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format incident records.
    pub fn format_records(&self, records: &[IncidentRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
            OutputFormat::Table => Ok(self.format_records_table(records)),
            OutputFormat::Quiet => Ok(format_records_quiet(records)),
        }
    }

    /// Format records as a table.
    fn format_records_table(&self, records: &[IncidentRecord]) -> String {
        if records.is_empty() {
            return self.colorize("No incidents found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Date", "Locations", "Train", "Cause", "Category", "Bulletin"]);

        for record in records {
            let locations = record
                .locations()
                .iter()
                .map(|l| l.to_string())
                .collect::<Vec<_>>()
                .join(" / ");
            builder.push_record([
                record.date().format("%Y/%m/%d").to_string(),
                locations,
                record.train_label().to_string(),
                record.cause().to_string(),
                record.object_category().to_string(),
                record.bulletin_id().to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format dropped segments and rejected bulletins.
    pub fn format_diagnostics(
        &self,
        skipped: &[SkippedSegment],
        rejected: &[RejectedBulletin],
    ) -> Result<String> {
        if let OutputFormat::Json = self.format {
            let value = serde_json::json!({
                "skipped": skipped,
                "rejected": rejected,
            });
            return Ok(serde_json::to_string_pretty(&value)?);
        }

        let mut lines = Vec::new();
        for s in skipped {
            lines.push(self.warning(&format!(
                "{}#{} {}: {}",
                s.bulletin_id, s.segment_index, s.reason, s.text
            )));
        }
        for r in rejected {
            lines.push(self.error(&format!("{} rejected: {}", r.bulletin_id, r.reason)));
        }
        Ok(lines.join("\n"))
    }

    /// Format the period, record count and per-category counts of a run.
    pub fn format_summary(&self, report: &ExtractionReport) -> Result<String> {
        let range = report
            .date_range()
            .map(|(lo, hi)| (lo.format("%Y/%m/%d").to_string(), hi.format("%Y/%m/%d").to_string()));
        let counts = report.category_counts();

        match self.format {
            OutputFormat::Json => {
                let categories: serde_json::Map<String, serde_json::Value> = ObjectCategory::ALL
                    .iter()
                    .map(|category| {
                        let count = counts.get(category).copied().unwrap_or(0);
                        (category.to_string(), count.into())
                    })
                    .collect();
                let value = serde_json::json!({
                    "from": range.as_ref().map(|r| r.0.clone()),
                    "to": range.as_ref().map(|r| r.1.clone()),
                    "records": report.records.len(),
                    "bulletins": report.metadata.bulletins_seen,
                    "skipped_segments": report.skipped.len(),
                    "rejected_bulletins": report.rejected.len(),
                    "categories": categories,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Quiet => Ok(report.records.len().to_string()),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Category", "Records"]);
                for category in ObjectCategory::ALL {
                    let count = counts.get(&category).copied().unwrap_or(0);
                    builder.push_record([category.to_string(), count.to_string()]);
                }
                let mut table = builder.build();
                table.with(Style::rounded());

                let period = match &range {
                    Some((lo, hi)) => format!("Period: {}～{}", lo, hi),
                    None => "Period: -".to_string(),
                };
                Ok(format!(
                    "{}\n{}\n{}",
                    self.info(&period),
                    self.info(&format!(
                        "Records: {} from {} bulletins ({} segments skipped, {} bulletins rejected)",
                        report.records.len(),
                        report.metadata.bulletins_seen,
                        report.skipped.len(),
                        report.rejected.len()
                    )),
                    table
                ))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// One tooltip line per location.
fn format_records_quiet(records: &[IncidentRecord]) -> String {
    records
        .iter()
        .flat_map(|r| r.tooltips())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shika_domain::LocationRef;
    use shika_extractor::SkipReason;

    fn create_test_record() -> IncidentRecord {
        IncidentRecord::new(
            "1577812345".to_string(),
            NaiveDate::from_ymd_opt(2022, 10, 5).unwrap(),
            vec![LocationRef::between("札幌", "桑園"), LocationRef::between("琴似", "発寒")],
            "鹿と衝突".to_string(),
            "鹿".to_string(),
            ObjectCategory::Deer,
            "普通列車".to_string(),
            "列車が札幌～桑園駅間 & 琴似～発寒駅間で鹿と衝突".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_records(&[create_test_record()]).unwrap();
        assert!(output.contains("\"train_label\""));
        assert!(output.contains("\"object_category\": \"deer\""));
    }

    #[test]
    fn test_quiet_format_one_line_per_location() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_records(&[create_test_record()]).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "札幌～桑園駅間 2022/10/05 普通列車 鹿と衝突");
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_records(&[create_test_record()]).unwrap();
        assert!(output.contains("Locations"));
        assert!(output.contains("札幌～桑園駅間 / 琴似～発寒駅間"));
    }

    #[test]
    fn test_empty_records() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_records(&[]).unwrap();
        assert!(output.contains("No incidents found"));
    }

    #[test]
    fn test_diagnostics_text() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let skipped = vec![SkippedSegment {
            bulletin_id: "9".to_string(),
            segment_index: 1,
            reason: SkipReason::NoLocationPattern,
            text: "列車が鹿と衝突".to_string(),
        }];
        let output = formatter.format_diagnostics(&skipped, &[]).unwrap();
        assert_eq!(output, "⚠ 9#1 no_location_pattern: 列車が鹿と衝突");
    }

    #[test]
    fn test_summary_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let mut report = ExtractionReport {
            records: vec![create_test_record()],
            ..Default::default()
        };
        report.metadata.observe(NaiveDate::from_ymd_opt(2022, 10, 5).unwrap());
        let output = formatter.format_summary(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["from"], "2022/10/05");
        assert_eq!(value["records"], 1);
        assert_eq!(value["categories"]["deer"], 1);
        assert_eq!(value["categories"]["bear"], 0);
        assert_eq!(value["categories"].as_object().unwrap().len(), ObjectCategory::ALL.len());
    }

    #[test]
    fn test_summary_table_lists_every_category() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let report = ExtractionReport::default();
        let output = formatter.format_summary(&report).unwrap();
        assert!(output.contains("Period: -"));
        for category in ObjectCategory::ALL {
            assert!(output.contains(category.as_str()));
        }
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
    }
}
