//! Shika Extractor
//!
//! Converts railway collision bulletins into structured incident records.
//!
//! # Overview
//!
//! Bulletins are short Japanese announcements written by hand over several
//! years. The extractor recognises a whitelist of phrasings and ignores
//! everything else: a missed incident is preferable to an invented one.
//!
//! # Architecture
//!
//! ```text
//! Bulletin → normalize → segment → { clause rules, location tiers } → classify → IncidentRecord
//! ```
//!
//! - **Normalizer**: flattens conjunctions to one ` & ` separator
//! - **Segmenter**: splits independent incidents joined by `ならびに`
//! - **Clause rules**: ordered train-noun rules, first match wins
//! - **Location tiers**: station pairs, else single stations
//! - **Classifier**: closed object-token table with an `other` fallback
//!
//! # Example Usage
//!
//! ```
//! use shika_domain::{Bulletin, LocationRef, ObjectCategory};
//! use shika_extractor::Extractor;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = Extractor::default_config()?;
//! let bulletin = Bulletin::new(
//!     "1",
//!     "2022-10-05T08:15:00+09:00",
//!     "函館線 列車が札幌～桑園駅間で鹿と衝突した影響で遅れが出ています。",
//! );
//!
//! let records = extractor.extract_incidents(&bulletin)?;
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].train_label(), "普通列車");
//! assert_eq!(records[0].locations(), &[LocationRef::between("札幌", "桑園")]);
//! assert_eq!(records[0].object_category(), ObjectCategory::Deer);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]

mod error;
mod config;
mod types;
mod normalize;
mod segment;
mod clause;
mod location;
mod classify;
mod timestamp;
mod extractor;


pub use error::ExtractorError;
pub use config::{ExtractorConfig, ORDINARY_TRAIN_LABEL};
pub use types::{
    BulletinExtraction, ExtractionMetadata, ExtractionReport, RejectedBulletin, SkipReason,
    SkippedSegment,
};
pub use normalize::{normalize, SEPARATOR};
pub use segment::{segment, INCIDENT_CONNECTIVE};
pub use clause::{ClauseMatch, ClauseRule, ClauseRules};
pub use location::{LocationRules, LocationTier};
pub use classify::classify;
pub use timestamp::local_date;
pub use extractor::Extractor;
