//! Altimetry profile: grid, axes, filled profile, extrema and summary.

use crate::config::RenderConfig;
use crate::drawing::{Drawing, StyleClass, TextAnchor, TextOptions};
use crate::geom::{point, vector};
use crate::normalize::normalize;
use crate::Result;
use circuito_core::ExtractionResult;

const TITLE_BASELINE: f64 = 40.0;
const CAPTION_OFFSET: f64 = 20.0;
const SUMMARY_OFFSET: f64 = 50.0;
const MAX_MARKER_FILL: &str = "red";
const MIN_MARKER_FILL: &str = "blue";

/// Builds the profile drawing for `result`.
///
/// Paint order: title, altitude grid with labels, distance grid with labels, axes, axis
/// captions, filled profile, extrema markers, summary line.
pub fn render_altimetry(result: &ExtractionResult, config: &RenderConfig) -> Result<Drawing> {
    config.validate()?;

    let (points, bounds) = normalize(result, config.width, config.height, config.margin);
    let plot = config.plot_area();
    let middle = TextOptions::anchored(TextAnchor::Middle);
    let mut d = Drawing::new();

    d.text(
        point(config.width / 2.0, TITLE_BASELINE),
        format!("Perfil Altimétrico: {}", result.name()),
        StyleClass::Title,
        middle,
    );

    let rows = config.horizontal_divisions;
    for i in 0..=rows {
        let t = f64::from(i) / f64::from(rows);
        let y = plot.max_y() - t * plot.height();
        d.line(point(plot.min_x(), y), point(plot.max_x(), y), StyleClass::Grid);
        let altitude = bounds.min_altitude + bounds.altitude_span() * t;
        d.text(
            point(plot.min_x() - 10.0, y + 5.0),
            format!("{altitude:.1}m"),
            StyleClass::Label,
            TextOptions::anchored(TextAnchor::End),
        );
    }

    let cols = config.vertical_divisions;
    for i in 0..=cols {
        let t = f64::from(i) / f64::from(cols);
        let x = plot.min_x() + t * plot.width();
        d.line(point(x, plot.min_y()), point(x, plot.max_y()), StyleClass::Grid);
        let distance = bounds.min_distance + bounds.distance_span() * t;
        d.text(
            point(x, plot.max_y() + 20.0),
            format!("{distance:.0}m"),
            StyleClass::Label,
            middle,
        );
    }

    let bottom_left = point(plot.min_x(), plot.max_y());
    let bottom_right = point(plot.max_x(), plot.max_y());
    d.line(point(plot.min_x(), plot.min_y()), bottom_left, StyleClass::Axis);
    d.line(bottom_left, bottom_right, StyleClass::Axis);

    d.text(
        point(config.width / 2.0, config.height - CAPTION_OFFSET),
        "Distancia (metros)",
        StyleClass::Text,
        middle,
    );
    let pivot = point(CAPTION_OFFSET, config.height / 2.0);
    d.text(
        pivot,
        "Altitud (metros)",
        StyleClass::Text,
        middle.rotated(-90.0, pivot),
    );

    let mut outline = Vec::with_capacity(points.len() + 2);
    outline.extend_from_slice(&points);
    outline.push(bottom_right);
    outline.push(bottom_left);
    d.polyline(outline, StyleClass::Profile);

    let max_idx = result.max_altitude_index();
    let min_idx = result.min_altitude_index();
    let max_at = points[max_idx];
    let min_at = points[min_idx];
    d.circle(max_at, config.marker_radius, MAX_MARKER_FILL);
    d.text(
        max_at - vector(0.0, 10.0),
        format!("Máx: {:.1}m", result.max_altitude()),
        StyleClass::Text,
        middle,
    );
    d.circle(min_at, config.marker_radius, MIN_MARKER_FILL);
    d.text(
        min_at + vector(0.0, 20.0),
        format!("Mín: {:.1}m", result.min_altitude()),
        StyleClass::Text,
        middle,
    );

    d.text(
        point(config.width / 2.0, config.height - SUMMARY_OFFSET),
        format!(
            "Distancia total: {:.0}m | Desnivel: {:.1}m",
            bounds.max_distance,
            result.elevation_gain()
        ),
        StyleClass::Label,
        middle,
    );

    tracing::debug!(
        circuit = result.name(),
        primitives = d.len(),
        "rendered altimetry profile"
    );
    Ok(d)
}

/// Renders `result` straight to an SVG document.
pub fn render_altimetry_svg(result: &ExtractionResult, config: &RenderConfig) -> Result<String> {
    Ok(render_altimetry(result, config)?.into_svg(config))
}
