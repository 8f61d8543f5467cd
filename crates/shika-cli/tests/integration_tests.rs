//! Integration tests for the Shika CLI
//!
//! Exercise the library path the binary takes: load a bulletin file, run the
//! extractor, format the result.

use shika_cli::{Formatter, JsonFileSource, OutputFormat};
use shika_domain::traits::BulletinSource;
use shika_extractor::{Extractor, SkipReason};
use std::io::Write;

const FEED_CACHE: &str = r#"{
  "total": 4,
  "tweets": [
    {"id": 4, "created_at": "2022-10-08T07:00:00+09:00", "text": "函館線 列車が札幌～桑園駅間で鹿と衝突した影響で、一部列車に遅れが出ています。"},
    {"id": 3, "created_at": "2022-10-07T21:10:00+09:00", "text": "石勝線 特急おおぞら9号が新得～トマム駅間で鹿と衝突ならびに列車が苫小牧駅構内でクマと接触"},
    {"id": 2, "created_at": "broken", "text": "列車が札幌～桑園駅間で鹿と衝突"},
    {"id": 1, "created_at": "2022-10-01T06:00:00+09:00", "text": "強風のため運転を見合わせています。"}
  ]
}"#;

fn write_cache() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(FEED_CACHE.as_bytes()).unwrap();
    file
}

#[test]
fn test_feed_cache_end_to_end() {
    let file = write_cache();
    let bulletins = JsonFileSource::new(file.path()).load().unwrap();
    assert_eq!(bulletins.len(), 4);

    let extractor = Extractor::default_config().unwrap();
    let report = extractor.extract_batch(&bulletins);

    assert_eq!(report.records.len(), 3);
    assert_eq!(report.records[0].bulletin_id(), "4");
    assert_eq!(report.records[1].train_label(), "特急おおぞら9号");
    assert!(report.records[2].locations()[0].is_single_station());

    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].bulletin_id, "2");

    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].bulletin_id, "1");
    assert_eq!(report.skipped[0].reason, SkipReason::NoTrainPattern);
}

#[test]
fn test_summary_output() {
    let file = write_cache();
    let bulletins = JsonFileSource::new(file.path()).load().unwrap();
    let report = Extractor::default_config().unwrap().extract_batch(&bulletins);

    let formatter = Formatter::new(OutputFormat::Json, false);
    let value: serde_json::Value =
        serde_json::from_str(&formatter.format_summary(&report).unwrap()).unwrap();

    // Bulletin 1 produced no record but still counts toward the period.
    assert_eq!(value["from"], "2022/10/01");
    assert_eq!(value["to"], "2022/10/08");
    assert_eq!(value["records"], 3);
    assert_eq!(value["categories"]["deer"], 2);
    assert_eq!(value["categories"]["bear"], 1);
    assert_eq!(value["rejected_bulletins"], 1);
}

#[test]
fn test_quiet_output_lines() {
    let file = write_cache();
    let bulletins = JsonFileSource::new(file.path()).load().unwrap();
    let report = Extractor::default_config().unwrap().extract_batch(&bulletins);

    let formatter = Formatter::new(OutputFormat::Quiet, false);
    let output = formatter.format_records(&report.records).unwrap();
    let lines: Vec<_> = output.lines().collect();

    assert_eq!(lines[0], "札幌～桑園駅間 2022/10/08 普通列車 鹿と衝突");
    assert_eq!(lines[2], "苫小牧駅 2022/10/07 普通列車 クマと接触");
}
