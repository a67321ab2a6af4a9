#![forbid(unsafe_code)]

//! `circuito` converts circuit description XML documents into an altimetry profile (SVG), an
//! information page (HTML) and a geographic track (KML).
//!
//! # Features
//!
//! - `render`: enable the document writers (`circuito::render`)

pub use circuito_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use circuito_render::{
        Drawing, HtmlOptions, KmlOptions, RenderBounds, RenderConfig, render_altimetry,
        render_altimetry_svg, render_circuit_html, render_circuit_kml,
    };

    #[derive(Debug, thiserror::Error)]
    pub enum ConvertError {
        #[error(transparent)]
        Core(#[from] circuito_core::Error),
        #[error(transparent)]
        Render(#[from] circuito_render::Error),
    }

    pub type Result<T> = std::result::Result<T, ConvertError>;

    /// Extracts the altimetry of `text` and renders it as SVG.
    ///
    /// The extracted samples are returned alongside the document for reporting.
    pub fn altimetry_svg(
        text: &str,
        config: &RenderConfig,
    ) -> Result<(circuito_core::ExtractionResult, String)> {
        let result = circuito_core::altimetry_from_str(text)?;
        let svg = render_altimetry_svg(&result, config)?;
        Ok((result, svg))
    }

    pub fn circuit_html(
        text: &str,
        options: &HtmlOptions,
    ) -> Result<(circuito_core::CircuitInfo, String)> {
        let info = circuito_core::info_from_str(text)?;
        let html = render_circuit_html(&info, options);
        Ok((info, html))
    }

    pub fn circuit_kml(
        text: &str,
        options: &KmlOptions,
    ) -> Result<(circuito_core::CircuitTrack, String)> {
        let track = circuito_core::track_from_str(text)?;
        let kml = render_circuit_kml(&track, options)?;
        Ok((track, kml))
    }

    /// Current UTC time, truncated to whole seconds, for [`KmlOptions::generated_at`].
    pub fn generation_timestamp() -> chrono::DateTime<chrono::Utc> {
        let now = chrono::Utc::now();
        chrono::DateTime::from_timestamp(now.timestamp(), 0).unwrap_or(now)
    }

}
