//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the domain and its
//! collaborators. Implementations live in other crates.

use crate::{Bulletin, IncidentRecord};

/// Supplies bulletins, deduplicated and ordered by recency
///
/// Implemented by whatever holds the raw corpus (a feed client, a cached
/// JSON file). The extractor is agnostic to where bulletins come from.
pub trait BulletinSource {
    /// Error type for load operations
    type Error;

    /// Load all available bulletins
    fn load(&self) -> Result<Vec<Bulletin>, Self::Error>;
}

/// Turns one bulletin into incident records
///
/// Implemented by the application layer (shika-extractor)
pub trait IncidentExtractor {
    /// Error type for extraction operations
    type Error;

    /// Extract the incidents reported by a bulletin, in bulletin order
    fn extract(&self, bulletin: &Bulletin) -> Result<Vec<IncidentRecord>, Self::Error>;
}
