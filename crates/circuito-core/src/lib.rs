#![forbid(unsafe_code)]

//! Circuit XML extraction (headless).
//!
//! Design goals:
//! - the document namespace is detected once and every lookup is bound to it
//! - extraction is a pure function of the document: same input, same records
//! - malformed numbers are errors, absent elements are not

pub mod altimetry;
pub mod error;
pub mod info;
pub mod resolver;
pub mod source;
pub mod track;

pub use altimetry::{CircuitSample, ExtractionResult, extract_altimetry};
pub use error::{Error, Result};
pub use info::{CircuitInfo, Measurement, Photo, StandingEntry, Video, extract_info};
pub use resolver::{DEFAULT_NAMESPACE, Resolver, parse_document};
pub use source::{DEFAULT_INPUT_PATH, read_document_source};
pub use track::{CircuitTrack, GeoPoint, TrackSegment, extract_track};

/// Parses `text` and extracts its altimetry samples.
pub fn altimetry_from_str(text: &str) -> Result<ExtractionResult> {
    let doc = parse_document(text)?;
    extract_altimetry(&Resolver::new(&doc))
}

/// Parses `text` and extracts the flat information record.
pub fn info_from_str(text: &str) -> Result<CircuitInfo> {
    let doc = parse_document(text)?;
    Ok(extract_info(&Resolver::new(&doc)))
}

/// Parses `text` and extracts the geographic track.
pub fn track_from_str(text: &str) -> Result<CircuitTrack> {
    let doc = parse_document(text)?;
    extract_track(&Resolver::new(&doc))
}

#[cfg(test)]
mod tests;
