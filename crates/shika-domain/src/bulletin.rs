//! Bulletin module - raw announcements as supplied by a bulletin source

use serde::{Deserialize, Deserializer, Serialize};

/// A raw service announcement
///
/// Bulletins are created by a bulletin source and never mutated; the
/// extractor only borrows them. The timestamp is kept as the source string so
/// that a malformed value can be reported against the bulletin that carried it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bulletin {
    /// Opaque identifier (feed status id, file row, ...)
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,

    /// ISO-8601 date-time in source-local time
    #[serde(alias = "created_at")]
    pub timestamp: String,

    /// Raw bulletin text, possibly reporting several incidents
    pub text: String,
}

impl Bulletin {
    /// Create a new bulletin
    ///
    /// # Examples
    ///
    /// ```
    /// use shika_domain::Bulletin;
    ///
    /// let b = Bulletin::new("1", "2022-10-05T08:15:00", "列車が鹿と衝突");
    /// assert_eq!(b.id, "1");
    /// ```
    pub fn new(
        id: impl Into<String>,
        timestamp: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            timestamp: timestamp.into(),
            text: text.into(),
        }
    }
}

/// Feed caches store status ids as JSON numbers; accept both forms.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}
