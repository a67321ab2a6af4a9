//! Cumulative distance / altitude samples of a circuit.

use crate::resolver::{self, Resolver};
use crate::{Error, Result};
use roxmltree::Node;
use serde::Serialize;

/// Name used when the document does not carry a `nombre` element.
pub const FALLBACK_CIRCUIT_NAME: &str = "Circuito";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CircuitSample {
    /// Cumulative distance from the origin, in metres.
    pub distance: f64,
    /// Altitude in metres.
    pub altitude: f64,
}

impl CircuitSample {
    pub fn new(distance: f64, altitude: f64) -> Self {
        Self { distance, altitude }
    }
}

/// Named, non-empty, ordered series of samples.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractionResult {
    name: String,
    samples: Vec<CircuitSample>,
}

impl ExtractionResult {
    /// Fails with [`Error::MissingAltimetryData`] when `samples` is empty.
    pub fn new(name: impl Into<String>, samples: Vec<CircuitSample>) -> Result<Self> {
        if samples.is_empty() {
            return Err(Error::MissingAltimetryData);
        }
        Ok(Self {
            name: name.into(),
            samples,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn samples(&self) -> &[CircuitSample] {
        &self.samples
    }

    /// Index of the highest sample; the first one wins on ties.
    pub fn max_altitude_index(&self) -> usize {
        first_extreme_index(&self.samples, |candidate, best| candidate > best)
    }

    /// Index of the lowest sample; the first one wins on ties.
    pub fn min_altitude_index(&self) -> usize {
        first_extreme_index(&self.samples, |candidate, best| candidate < best)
    }

    pub fn max_altitude(&self) -> f64 {
        self.samples[self.max_altitude_index()].altitude
    }

    pub fn min_altitude(&self) -> f64 {
        self.samples[self.min_altitude_index()].altitude
    }

    /// Largest cumulative distance, i.e. the course length covered by the samples.
    pub fn total_distance(&self) -> f64 {
        self.samples
            .iter()
            .map(|s| s.distance)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Difference between the highest and lowest sampled altitudes.
    pub fn elevation_gain(&self) -> f64 {
        self.max_altitude() - self.min_altitude()
    }
}

fn first_extreme_index(samples: &[CircuitSample], better: impl Fn(f64, f64) -> bool) -> usize {
    let mut best = 0usize;
    for (idx, s) in samples.iter().enumerate().skip(1) {
        if better(s.altitude, samples[best].altitude) {
            best = idx;
        }
    }
    best
}

/// Length of one `tramo` in metres. Negative lengths would make the running distance decrease,
/// so they are rejected like any other malformed number.
pub(crate) fn segment_length(node: Node<'_, '_>) -> Result<f64> {
    let length = resolver::number(node)?;
    if length < 0.0 {
        return Err(Error::MalformedNumericValue {
            field: node.tag_name().name().to_string(),
            value: resolver::text(node).unwrap_or_default().to_string(),
        });
    }
    Ok(length)
}

/// Walks the origin and the segments of a circuit document and accumulates distance.
///
/// Segments are visited in document order. A segment without `distancia` adds nothing to the
/// running distance; a segment whose `puntoFinal` has no `altitud` produces no sample but still
/// contributes its length.
pub fn extract_altimetry(resolver: &Resolver<'_, '_>) -> Result<ExtractionResult> {
    let name = resolver
        .find_text("nombre")
        .unwrap_or(FALLBACK_CIRCUIT_NAME)
        .to_string();

    let mut samples = Vec::new();
    let mut cumulative = 0.0_f64;

    if let Some(origin) = resolver.find("geografia.origen") {
        if let Some(alt) = resolver.child(origin, "altitud") {
            samples.push(CircuitSample::new(cumulative, resolver::number(alt)?));
        }
    }

    let segments = resolver.find_all("tramos.tramo");
    tracing::debug!(segments = segments.len(), circuit = %name, "extracting altimetry");

    for segment in segments {
        if let Some(length) = resolver.find_in(segment, "distancia") {
            cumulative += segment_length(length)?;
        }
        let Some(end) = resolver.find_in(segment, "puntoFinal") else {
            continue;
        };
        if let Some(alt) = resolver.child(end, "altitud") {
            let altitude = resolver::number(alt)?;
            tracing::trace!(distance = cumulative, altitude, "sample");
            samples.push(CircuitSample::new(cumulative, altitude));
        }
    }

    ExtractionResult::new(name, samples)
}
