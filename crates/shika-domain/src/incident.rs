//! Incident records - the structured output of extraction

use crate::{LocationRef, ObjectCategory};
use chrono::NaiveDate;
use serde::Serialize;

/// One collision extracted from a bulletin
///
/// Records are immutable once built. The constructor enforces that every
/// record names at least one location, a cause and a train; a segment that
/// cannot provide all three never becomes a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncidentRecord {
    bulletin_id: String,
    date: NaiveDate,
    locations: Vec<LocationRef>,
    cause: String,
    object: String,
    object_category: ObjectCategory,
    train_label: String,
    raw_text: String,
}

impl IncidentRecord {
    /// Create a new record
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        bulletin_id: String,
        date: NaiveDate,
        locations: Vec<LocationRef>,
        cause: String,
        object: String,
        object_category: ObjectCategory,
        train_label: String,
        raw_text: String,
    ) -> Result<Self, String> {
        if locations.is_empty() {
            return Err("incident has no location".to_string());
        }
        if cause.trim().is_empty() {
            return Err("cause is empty".to_string());
        }
        if train_label.trim().is_empty() {
            return Err("train_label is empty".to_string());
        }

        Ok(Self {
            bulletin_id,
            date,
            locations,
            cause,
            object,
            object_category,
            train_label,
            raw_text,
        })
    }

    /// Id of the bulletin this record came from
    pub fn bulletin_id(&self) -> &str {
        &self.bulletin_id
    }

    /// Local calendar date of the bulletin
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Locations, in bulletin order (never empty)
    pub fn locations(&self) -> &[LocationRef] {
        &self.locations
    }

    /// Reason phrase, e.g. `鹿と衝突`
    pub fn cause(&self) -> &str {
        &self.cause
    }

    /// Struck-object token as written in the bulletin
    pub fn object(&self) -> &str {
        &self.object
    }

    /// Category of the struck object
    pub fn object_category(&self) -> ObjectCategory {
        self.object_category
    }

    /// Normalized train label
    pub fn train_label(&self) -> &str {
        &self.train_label
    }

    /// Segment text the record was derived from
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// One line per location, in the shape used for map tooltips
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use shika_domain::{IncidentRecord, LocationRef, ObjectCategory};
    ///
    /// let record = IncidentRecord::new(
    ///     "1".into(),
    ///     NaiveDate::from_ymd_opt(2022, 10, 5).unwrap(),
    ///     vec![LocationRef::between("札幌", "桑園")],
    ///     "鹿と衝突".into(),
    ///     "鹿".into(),
    ///     ObjectCategory::Deer,
    ///     "普通列車".into(),
    ///     "列車が札幌～桑園駅間で鹿と衝突".into(),
    /// ).unwrap();
    ///
    /// assert_eq!(record.tooltips(), vec!["札幌～桑園駅間 2022/10/05 普通列車 鹿と衝突"]);
    /// ```
    pub fn tooltips(&self) -> Vec<String> {
        self.locations
            .iter()
            .map(|loc| {
                format!(
                    "{} {} {} {}",
                    loc,
                    self.date.format("%Y/%m/%d"),
                    self.train_label,
                    self.cause
                )
            })
            .collect()
    }
}
