//! Result and diagnostics types for extraction

use chrono::NaiveDate;
use serde::Serialize;
use shika_domain::{IncidentRecord, ObjectCategory};
use std::collections::BTreeMap;
use std::fmt;

/// Why a segment produced no record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// No clause rule matched (train, cause or object missing)
    NoTrainPattern,

    /// No location tier matched
    NoLocationPattern,
}

impl SkipReason {
    /// Reason code as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::NoTrainPattern => "no_train_pattern",
            SkipReason::NoLocationPattern => "no_location_pattern",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A segment that was dropped
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedSegment {
    /// Bulletin the segment belongs to
    pub bulletin_id: String,

    /// Position of the segment within its bulletin
    pub segment_index: usize,

    /// Reason for dropping it
    pub reason: SkipReason,

    /// Normalized segment text
    pub text: String,
}

/// A bulletin rejected as a whole
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedBulletin {
    /// Bulletin identifier
    pub bulletin_id: String,

    /// Error message
    pub reason: String,
}

/// Records and dropped segments for one bulletin
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BulletinExtraction {
    /// Records in segment order
    pub records: Vec<IncidentRecord>,

    /// Segments that yielded no record
    pub skipped: Vec<SkippedSegment>,

    /// Number of segments the bulletin was split into
    pub segment_count: usize,

    /// Local date of the bulletin
    pub date: Option<NaiveDate>,
}

/// Counters for a batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionMetadata {
    /// Bulletins handed to the extractor
    pub bulletins_seen: usize,

    /// Segments examined across accepted bulletins
    pub segments_seen: usize,

    /// Oldest and latest date of any accepted bulletin, with or without records
    pub period: Option<(NaiveDate, NaiveDate)>,
}

impl ExtractionMetadata {
    /// Widen the reporting period to include `date`
    pub fn observe(&mut self, date: NaiveDate) {
        self.period = Some(match self.period {
            Some((lo, hi)) => (lo.min(date), hi.max(date)),
            None => (date, date),
        });
    }
}

/// Result of extracting a batch of bulletins
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionReport {
    /// Records, in input order
    pub records: Vec<IncidentRecord>,

    /// Segments that matched no rule
    pub skipped: Vec<SkippedSegment>,

    /// Bulletins rejected before segmentation
    pub rejected: Vec<RejectedBulletin>,

    /// Batch counters
    pub metadata: ExtractionMetadata,
}

impl ExtractionReport {
    /// Reporting period: oldest and latest date among the accepted bulletins
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.metadata.period
    }

    /// Number of records per object category
    pub fn category_counts(&self) -> BTreeMap<ObjectCategory, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.object_category()).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shika_domain::LocationRef;

    fn record(date: (i32, u32, u32), category: ObjectCategory) -> IncidentRecord {
        IncidentRecord::new(
            "b".to_string(),
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            vec![LocationRef::station("A")],
            "鹿と衝突".to_string(),
            "鹿".to_string(),
            category,
            "普通列車".to_string(),
            "raw".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_report_has_no_range() {
        assert_eq!(ExtractionReport::default().date_range(), None);
    }

    #[test]
    fn test_date_range_ignores_order() {
        let mut report = ExtractionReport::default();
        for (y, m, d) in [(2022, 10, 5), (2021, 1, 2), (2022, 3, 1)] {
            report.metadata.observe(NaiveDate::from_ymd_opt(y, m, d).unwrap());
        }
        let (lo, hi) = report.date_range().unwrap();
        assert_eq!(lo, NaiveDate::from_ymd_opt(2021, 1, 2).unwrap());
        assert_eq!(hi, NaiveDate::from_ymd_opt(2022, 10, 5).unwrap());
    }

    #[test]
    fn test_date_range_does_not_depend_on_records() {
        let mut report = ExtractionReport {
            records: vec![record((2022, 10, 5), ObjectCategory::Deer)],
            ..Default::default()
        };
        assert_eq!(report.date_range(), None);

        report.metadata.observe(NaiveDate::from_ymd_opt(2022, 9, 30).unwrap());
        report.metadata.observe(NaiveDate::from_ymd_opt(2022, 10, 5).unwrap());
        assert_eq!(
            report.date_range(),
            Some((
                NaiveDate::from_ymd_opt(2022, 9, 30).unwrap(),
                NaiveDate::from_ymd_opt(2022, 10, 5).unwrap()
            ))
        );
    }

    #[test]
    fn test_category_counts() {
        let report = ExtractionReport {
            records: vec![
                record((2022, 10, 5), ObjectCategory::Deer),
                record((2022, 10, 6), ObjectCategory::Deer),
                record((2022, 10, 7), ObjectCategory::Other),
            ],
            ..Default::default()
        };
        let counts = report.category_counts();
        assert_eq!(counts.get(&ObjectCategory::Deer), Some(&2));
        assert_eq!(counts.get(&ObjectCategory::Other), Some(&1));
        assert_eq!(counts.get(&ObjectCategory::Bear), None);
    }

    #[test]
    fn test_skip_reason_codes() {
        assert_eq!(SkipReason::NoTrainPattern.to_string(), "no_train_pattern");
        assert_eq!(
            serde_json::to_string(&SkipReason::NoLocationPattern).unwrap(),
            "\"no_location_pattern\""
        );
    }
}
