//! Shika Domain Layer
//!
//! Core value types shared by the extractor and its callers. A railway
//! operator publishes short collision bulletins; the extractor turns each
//! [`Bulletin`] into zero or more [`IncidentRecord`]s.
//!
//! ## Key Concepts
//!
//! - **Bulletin**: one raw announcement with an id and a source timestamp
//! - **IncidentRecord**: one extracted collision (date, locations, cause, train)
//! - **LocationRef**: a station pair, or a single station when the report
//!   names only one
//! - **ObjectCategory**: coarse bucket for the struck object, used for marker
//!   selection downstream
//!
//! ## Architecture
//!
//! This crate holds plain data and the trait seams for the collaborators
//! (bulletin sources and extractors). Pattern matching lives in
//! `shika-extractor`; I/O lives in the CLI.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bulletin;
pub mod category;
pub mod incident;
pub mod location;
pub mod traits;

// Re-exports for convenience
pub use bulletin::Bulletin;
pub use category::ObjectCategory;
pub use incident::IncidentRecord;
pub use location::LocationRef;
