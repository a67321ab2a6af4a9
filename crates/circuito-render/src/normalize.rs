//! Sample domain to render space.
//!
//! ```text
//! x = margin + fx * (width  - 2 * margin)
//! y = height - margin - fy * (height - 2 * margin)
//! ```
//!
//! where `fx`/`fy` are the fractional positions of the sample inside the distance/altitude
//! ranges. The Y axis is inverted: higher altitudes map to smaller `y`. A range with zero span
//! puts every sample at fraction `0.5` on that axis.

use crate::geom::{Point, point};
use circuito_core::{CircuitSample, ExtractionResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderBounds {
    pub min_distance: f64,
    pub max_distance: f64,
    pub min_altitude: f64,
    pub max_altitude: f64,
}

impl RenderBounds {
    pub fn from_samples(samples: &[CircuitSample]) -> Option<Self> {
        let first = samples.first()?;
        let init = Self {
            min_distance: first.distance,
            max_distance: first.distance,
            min_altitude: first.altitude,
            max_altitude: first.altitude,
        };
        Some(samples.iter().skip(1).fold(init, |b, s| Self {
            min_distance: b.min_distance.min(s.distance),
            max_distance: b.max_distance.max(s.distance),
            min_altitude: b.min_altitude.min(s.altitude),
            max_altitude: b.max_altitude.max(s.altitude),
        }))
    }

    pub fn distance_span(&self) -> f64 {
        self.max_distance - self.min_distance
    }

    pub fn altitude_span(&self) -> f64 {
        self.max_altitude - self.min_altitude
    }

    pub fn distance_fraction(&self, distance: f64) -> f64 {
        fraction(distance, self.min_distance, self.max_distance)
    }

    pub fn altitude_fraction(&self, altitude: f64) -> f64 {
        fraction(altitude, self.min_altitude, self.max_altitude)
    }
}

fn fraction(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span == 0.0 { 0.5 } else { (value - min) / span }
}

/// Maps every sample of `result` into the `width` x `height` canvas inset by `margin`.
///
/// The returned points have the same length and order as the samples.
pub fn normalize(
    result: &ExtractionResult,
    width: f64,
    height: f64,
    margin: f64,
) -> (Vec<Point>, RenderBounds) {
    let samples = result.samples();
    // `ExtractionResult` is never empty.
    let bounds = RenderBounds::from_samples(samples).unwrap_or(RenderBounds {
        min_distance: 0.0,
        max_distance: 0.0,
        min_altitude: 0.0,
        max_altitude: 0.0,
    });

    let plot_width = width - 2.0 * margin;
    let plot_height = height - 2.0 * margin;
    let points = samples
        .iter()
        .map(|s| {
            point(
                margin + bounds.distance_fraction(s.distance) * plot_width,
                height - margin - bounds.altitude_fraction(s.altitude) * plot_height,
            )
        })
        .collect();

    tracing::debug!(
        samples = samples.len(),
        min_distance = bounds.min_distance,
        max_distance = bounds.max_distance,
        min_altitude = bounds.min_altitude,
        max_altitude = bounds.max_altitude,
        "normalized altimetry"
    );
    (points, bounds)
}
