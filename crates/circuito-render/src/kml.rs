//! KML export of a circuit track (origin marker, full line string, one marker per segment).

use crate::svg::escape_xml;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use circuito_core::{CircuitTrack, GeoPoint, TrackSegment};
use std::fmt::Write as _;

#[derive(Debug, Clone, PartialEq)]
pub struct KmlOptions {
    /// Shown in the document description as the origin of the data.
    pub source_name: String,
    /// Generation timestamp for the description. `None` keeps the output reproducible.
    pub generated_at: Option<DateTime<Utc>>,
    /// Line color in KML `aabbggrr` notation.
    pub line_color: String,
    pub line_width: f64,
}

impl Default for KmlOptions {
    fn default() -> Self {
        Self {
            source_name: circuito_core::DEFAULT_INPUT_PATH.to_string(),
            generated_at: None,
            line_color: "ff0000ff".to_string(),
            line_width: 4.0,
        }
    }
}

// Numbers are written from the parsed values, so "420.50" in the source becomes "420.5".
fn coordinate(p: &GeoPoint) -> String {
    format!("{},{},{}", p.longitude, p.latitude, p.altitude)
}

fn segment_description(segment: &TrackSegment) -> String {
    let mut parts = Vec::new();
    if let Some(sector) = segment.sector.as_deref() {
        parts.push(format!("Sector: {sector}"));
    }
    if let Some(length) = segment.length {
        parts.push(format!("Distancia: {length} m"));
    }
    if parts.is_empty() {
        format!("Tramo {}", segment.index)
    } else {
        parts.join(" | ")
    }
}

fn write_point_placemark(out: &mut String, name: &str, description: &str, p: &GeoPoint) {
    let _ = write!(
        out,
        "    <Placemark>\n      <name>{}</name>\n      <description>{}</description>\n      <Point>\n        <coordinates>{}</coordinates>\n      </Point>\n    </Placemark>\n",
        escape_xml(name),
        escape_xml(description),
        coordinate(p)
    );
}

/// Renders `track` as a KML 2.2 document.
///
/// The origin marker falls back to the first coordinate when the track has no origin.
pub fn render_circuit_kml(track: &CircuitTrack, options: &KmlOptions) -> Result<String> {
    let coordinates = track.coordinates();
    let Some(origin) = track.origin.or_else(|| coordinates.first().copied()) else {
        return Err(Error::EmptyTrack);
    };

    let name = escape_xml(&track.name);
    let mut description = format!("Generado desde {}", options.source_name);
    if let Some(at) = options.generated_at {
        let _ = write!(description, " el {}", at.format("%Y-%m-%d %H:%M:%SZ"));
    }

    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<kml xmlns=\"http://www.opengis.net/kml/2.2\">\n  <Document>\n");
    let _ = writeln!(out, "    <name>{name} - Planimetría</name>");
    let _ = writeln!(out, "    <description>{}</description>", escape_xml(&description));
    let _ = write!(
        out,
        "    <Style id=\"circuitLineStyle\">\n      <LineStyle>\n        <color>{}</color>\n        <width>{}</width>\n      </LineStyle>\n    </Style>\n",
        escape_xml(&options.line_color),
        options.line_width
    );

    write_point_placemark(&mut out, "Origen", "Origen definido en geografía", &origin);

    let _ = writeln!(
        out,
        "    <Placemark>\n      <name>{name} - Track</name>\n      <styleUrl>#circuitLineStyle</styleUrl>\n      <LineString>\n        <tessellate>1</tessellate>\n        <altitudeMode>absolute</altitudeMode>\n        <coordinates>"
    );
    for p in &coordinates {
        let _ = writeln!(out, "{}", coordinate(p));
    }
    out.push_str("        </coordinates>\n      </LineString>\n    </Placemark>\n");

    for segment in &track.segments {
        write_point_placemark(
            &mut out,
            &format!("Tramo {}", segment.index),
            &segment_description(segment),
            &segment.end,
        );
    }

    out.push_str("  </Document>\n</kml>\n");
    tracing::debug!(
        circuit = %track.name,
        coordinates = coordinates.len(),
        placemarks = track.segments.len() + 2,
        "rendered track export"
    );
    Ok(out)
}
