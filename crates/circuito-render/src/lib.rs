#![forbid(unsafe_code)]

//! Headless writers for extracted circuit records: altimetry SVG, information page (HTML) and
//! geographic export (KML).

pub mod altimetry;
pub mod config;
pub mod drawing;
pub mod geom;
pub mod html;
pub mod kml;
pub mod normalize;
pub mod svg;

pub use altimetry::{render_altimetry, render_altimetry_svg};
pub use config::RenderConfig;
pub use drawing::{Drawing, DrawingPrimitive, Rotation, StyleClass, TextAnchor, TextOptions};
pub use html::{HtmlOptions, render_circuit_html};
pub use kml::{KmlOptions, render_circuit_kml};
pub use normalize::{RenderBounds, normalize};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid render configuration: {message}")]
    InvalidConfig { message: String },
    /// The writer accepts any [`circuito_core::CircuitTrack`], including hand-built ones.
    /// Extracted tracks never reach this: `extract_track` already fails with
    /// `MissingCoordinates`.
    #[error("track has no coordinates to export")]
    EmptyTrack,
}

pub type Result<T> = std::result::Result<T, Error>;
