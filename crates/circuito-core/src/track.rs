//! Geographic coordinates of the origin and of every segment endpoint.

use crate::altimetry::{FALLBACK_CIRCUIT_NAME, segment_length};
use crate::resolver::{self, Resolver};
use crate::{Error, Result};
use roxmltree::Node;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
    /// Metres; `0` when the document does not state it.
    pub altitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackSegment {
    /// 1-based position of the segment among all `tramo` elements.
    pub index: usize,
    pub sector: Option<String>,
    pub length: Option<f64>,
    pub end: GeoPoint,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircuitTrack {
    pub name: String,
    pub origin: Option<GeoPoint>,
    pub segments: Vec<TrackSegment>,
}

impl CircuitTrack {
    /// Origin followed by every segment endpoint, in document order.
    pub fn coordinates(&self) -> Vec<GeoPoint> {
        self.origin
            .iter()
            .copied()
            .chain(self.segments.iter().map(|s| s.end))
            .collect()
    }
}

/// Reads a point from an element with `longitud`/`latitud`/`altitud` children.
///
/// Returns `Ok(None)` when longitude or latitude is missing; a present but non-numeric value
/// is an error.
fn geo_point<'a, 'input>(
    resolver: &Resolver<'a, 'input>,
    node: Node<'a, 'input>,
) -> Result<Option<GeoPoint>> {
    let (Some(lon), Some(lat)) = (
        resolver.child(node, "longitud"),
        resolver.child(node, "latitud"),
    ) else {
        return Ok(None);
    };
    let altitude = match resolver.child(node, "altitud") {
        Some(alt) if resolver::text(alt).is_some() => resolver::number(alt)?,
        _ => 0.0,
    };
    Ok(Some(GeoPoint {
        longitude: resolver::number(lon)?,
        latitude: resolver::number(lat)?,
        altitude,
    }))
}

/// Extracts the track; fails with [`Error::MissingCoordinates`] when no point has both a
/// longitude and a latitude.
pub fn extract_track(resolver: &Resolver<'_, '_>) -> Result<CircuitTrack> {
    let name = resolver
        .find_text("nombre")
        .unwrap_or(FALLBACK_CIRCUIT_NAME)
        .to_string();

    let origin = match resolver.find("geografia.origen") {
        Some(node) => geo_point(resolver, node)?,
        None => None,
    };

    let mut segments = Vec::new();
    for (i, segment) in resolver.find_all("tramos.tramo").into_iter().enumerate() {
        let Some(end_node) = resolver.find_in(segment, "puntoFinal") else {
            continue;
        };
        let Some(end) = geo_point(resolver, end_node)? else {
            continue;
        };
        let length = match resolver.child(segment, "distancia") {
            Some(node) => Some(segment_length(node)?),
            None => None,
        };
        segments.push(TrackSegment {
            index: i + 1,
            sector: resolver.child_text(segment, "sector").map(str::to_string),
            length,
            end,
        });
    }

    let track = CircuitTrack {
        name,
        origin,
        segments,
    };
    if track.origin.is_none() && track.segments.is_empty() {
        return Err(Error::MissingCoordinates);
    }
    tracing::debug!(
        circuit = %track.name,
        has_origin = track.origin.is_some(),
        segments = track.segments.len(),
        "extracted track"
    );
    Ok(track)
}
