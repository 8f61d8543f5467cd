//! Bulletin loading from cached JSON files.

use crate::error::{CliError, Result};
use serde::Deserialize;
use shika_domain::traits::BulletinSource;
use shika_domain::Bulletin;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Accepted file layouts: the feed cache (`{"total": n, "tweets": [...]}`)
/// or a bare array of bulletins.
#[derive(Deserialize)]
#[serde(untagged)]
enum BulletinFile {
    Cache { tweets: Vec<Bulletin> },
    Plain(Vec<Bulletin>),
}

/// Reads bulletins from a JSON file, or stdin when the path is `-`.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a source for the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_input(&self) -> Result<String> {
        if self.path == Path::new("-") {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        } else {
            Ok(std::fs::read_to_string(&self.path)?)
        }
    }
}

impl BulletinSource for JsonFileSource {
    type Error = CliError;

    fn load(&self) -> Result<Vec<Bulletin>> {
        let contents = self.read_input()?;
        parse_bulletins(&contents)
    }
}

/// Parse bulletin JSON, tolerating a UTF-8 byte order mark.
pub fn parse_bulletins(contents: &str) -> Result<Vec<Bulletin>> {
    let contents = contents.trim_start_matches('\u{feff}');
    let file: BulletinFile = serde_json::from_str(contents).map_err(|e| {
        CliError::InvalidInput(format!("Not a bulletin file: {}", e))
    })?;

    Ok(match file {
        BulletinFile::Cache { tweets } => tweets,
        BulletinFile::Plain(bulletins) => bulletins,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_feed_cache_with_bom() {
        let json = "\u{feff}{\"total\": 1, \"tweets\": [{\"id\": 42, \"created_at\": \"2022-10-05T08:15:00+00:00\", \"text\": \"本文\"}]}";
        let bulletins = parse_bulletins(json).unwrap();
        assert_eq!(bulletins, vec![Bulletin::new("42", "2022-10-05T08:15:00+00:00", "本文")]);
    }

    #[test]
    fn test_parse_plain_array() {
        let json = r#"[{"id": "a", "timestamp": "2022-10-05", "text": "x"}, {"id": "b", "timestamp": "2022-10-06", "text": "y"}]"#;
        let bulletins = parse_bulletins(json).unwrap();
        assert_eq!(bulletins.len(), 2);
        assert_eq!(bulletins[1].id, "b");
    }

    #[test]
    fn test_parse_garbage() {
        assert!(matches!(parse_bulletins("{\"nope\": true}"), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"tweets": [{{"id": 1, "created_at": "2022-10-05T08:15:00", "text": "t"}}]}}"#).unwrap();

        let source = JsonFileSource::new(file.path());
        let bulletins = source.load().unwrap();
        assert_eq!(bulletins.len(), 1);
        assert_eq!(bulletins[0].id, "1");
    }

    #[test]
    fn test_load_missing_file() {
        let source = JsonFileSource::new("/definitely/not/here.json");
        assert!(matches!(source.load(), Err(CliError::Io(_))));
    }
}
