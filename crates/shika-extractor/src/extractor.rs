//! Core Extractor implementation

use crate::classify::classify;
use crate::clause::ClauseRules;
use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::location::LocationRules;
use crate::normalize::normalize;
use crate::segment::segment;
use crate::timestamp::local_date;
use crate::types::{
    BulletinExtraction, ExtractionMetadata, ExtractionReport, RejectedBulletin, SkipReason,
    SkippedSegment,
};
use shika_domain::traits::IncidentExtractor;
use shika_domain::{Bulletin, IncidentRecord};
use tracing::{debug, info, warn};

/// The Extractor converts bulletins into incident records
///
/// Holds only compiled, immutable rule tables, so one instance can be shared
/// across threads and reused for any number of bulletins.
#[derive(Debug)]
pub struct Extractor {
    clauses: ClauseRules,
    locations: LocationRules,
    config: ExtractorConfig,
}

impl Extractor {
    /// Create a new Extractor
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;

        Ok(Self {
            clauses: ClauseRules::compile(&config.canonical_train_label)?,
            locations: LocationRules::compile()?,
            config,
        })
    }

    /// Create an Extractor with the default configuration
    pub fn default_config() -> Result<Self, ExtractorError> {
        Self::new(ExtractorConfig::default())
    }

    /// Active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract the incidents reported by one bulletin
    ///
    /// Segments that match no rule are dropped silently; use
    /// [`Extractor::extract_with_diagnostics`] to see why.
    pub fn extract_incidents(&self, bulletin: &Bulletin) -> Result<Vec<IncidentRecord>, ExtractorError> {
        Ok(self.extract_with_diagnostics(bulletin)?.records)
    }

    /// Extract records and keep a reason code for every dropped segment
    pub fn extract_with_diagnostics(
        &self,
        bulletin: &Bulletin,
    ) -> Result<BulletinExtraction, ExtractorError> {
        if let Some(limit) = self.config.max_text_length {
            let length = bulletin.text.chars().count();
            if length > limit {
                return Err(ExtractorError::TextTooLong(length, limit));
            }
        }

        let date = local_date(&bulletin.timestamp).ok_or_else(|| ExtractorError::MalformedTimestamp {
            bulletin_id: bulletin.id.clone(),
            timestamp: bulletin.timestamp.clone(),
        })?;

        let segments = segment(&normalize(&bulletin.text));
        let mut result = BulletinExtraction {
            segment_count: segments.len(),
            date: Some(date),
            ..Default::default()
        };

        for (index, text) in segments.into_iter().enumerate() {
            let clause = self.clauses.extract(&text);
            let locations = self.locations.extract(&text);

            let reason = match (clause, locations.is_empty()) {
                (Some(clause), false) => {
                    let category = classify(&clause.object);
                    match IncidentRecord::new(
                        bulletin.id.clone(),
                        date,
                        locations,
                        clause.cause,
                        clause.object,
                        category,
                        clause.train_label,
                        text.clone(),
                    ) {
                        Ok(record) => {
                            result.records.push(record);
                            continue;
                        }
                        Err(e) => {
                            debug!(bulletin = %bulletin.id, index, "record rejected: {}", e);
                            SkipReason::NoTrainPattern
                        }
                    }
                }
                (None, _) => SkipReason::NoTrainPattern,
                (Some(_), true) => SkipReason::NoLocationPattern,
            };

            if self.config.log_skipped_segments {
                debug!(bulletin = %bulletin.id, index, reason = %reason, "segment skipped");
            }
            result.skipped.push(SkippedSegment {
                bulletin_id: bulletin.id.clone(),
                segment_index: index,
                reason,
                text,
            });
        }

        Ok(result)
    }

    /// Extract a batch of bulletins
    ///
    /// A bulletin that fails validation is listed in
    /// [`ExtractionReport::rejected`] and the batch carries on.
    pub fn extract_batch(&self, bulletins: &[Bulletin]) -> ExtractionReport {
        info!("Starting extraction for {} bulletins", bulletins.len());

        let mut report = ExtractionReport {
            metadata: ExtractionMetadata {
                bulletins_seen: bulletins.len(),
                ..Default::default()
            },
            ..Default::default()
        };

        for bulletin in bulletins {
            match self.extract_with_diagnostics(bulletin) {
                Ok(extraction) => {
                    report.metadata.segments_seen += extraction.segment_count;
                    if let Some(date) = extraction.date {
                        report.metadata.observe(date);
                    }
                    report.records.extend(extraction.records);
                    report.skipped.extend(extraction.skipped);
                }
                Err(e) => {
                    warn!("Skipping bulletin {}: {}", bulletin.id, e);
                    report.rejected.push(RejectedBulletin {
                        bulletin_id: bulletin.id.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(
            "Extracted {} records ({} segments skipped, {} bulletins rejected)",
            report.records.len(),
            report.skipped.len(),
            report.rejected.len()
        );

        report
    }
}

impl IncidentExtractor for Extractor {
    type Error = ExtractorError;

    fn extract(&self, bulletin: &Bulletin) -> Result<Vec<IncidentRecord>, Self::Error> {
        self.extract_incidents(bulletin)
    }
}
