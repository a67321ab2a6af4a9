//! Flat circuit record used by the information page.
//!
//! Every field is best effort: a missing element yields an empty string (or `None` for
//! measurements) rather than an error.

use crate::altimetry::FALLBACK_CIRCUIT_NAME;
use crate::resolver::{self, Resolver};
use roxmltree::Node;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Measurement {
    pub value: String,
    pub units: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Photo {
    pub file: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Video {
    pub file: String,
    pub description: String,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingEntry {
    pub position: String,
    pub rider: String,
    pub team: String,
    pub points: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CircuitInfo {
    pub name: String,
    pub length: Option<Measurement>,
    pub mean_width: Option<Measurement>,
    pub date: String,
    pub start_time: String,
    pub laps: String,
    pub town: String,
    pub country: String,
    pub sponsor: String,
    pub references: Vec<String>,
    pub photos: Vec<Photo>,
    pub videos: Vec<Video>,
    pub winner: String,
    pub total_time: String,
    pub standings: Vec<StandingEntry>,
}

fn attr(node: Node<'_, '_>, name: &str) -> String {
    node.attribute(name).unwrap_or_default().to_string()
}

pub fn extract_info(resolver: &Resolver<'_, '_>) -> CircuitInfo {
    let text_at = |path: &str| resolver.find_text(path).unwrap_or_default().to_string();

    let measurement = |path: &str| {
        resolver.find(path).map(|node| Measurement {
            value: resolver::text(node).unwrap_or_default().to_string(),
            units: node.attribute("unidades").unwrap_or("m").to_string(),
        })
    };

    let references = resolver
        .find_all("referencias.referencia")
        .into_iter()
        .filter_map(resolver::text)
        .map(str::to_string)
        .collect();

    let photos = resolver
        .find_all("galeriaFotos.foto")
        .into_iter()
        .map(|n| Photo {
            file: attr(n, "archivo"),
            description: attr(n, "descripcion"),
        })
        .collect();

    let videos = resolver
        .find_all("galeriaVideos.video")
        .into_iter()
        .map(|n| Video {
            file: attr(n, "archivo"),
            description: attr(n, "descripcion"),
            duration: attr(n, "duracion"),
        })
        .collect();

    let standings = resolver
        .find_all("clasificacionMundial.piloto")
        .into_iter()
        .map(|n| StandingEntry {
            position: attr(n, "posicion"),
            rider: resolver.child_text(n, "nombrePiloto").unwrap_or_default().to_string(),
            team: resolver.child_text(n, "equipo").unwrap_or_default().to_string(),
            points: resolver.child_text(n, "puntos").unwrap_or_default().to_string(),
        })
        .collect::<Vec<_>>();

    let info = CircuitInfo {
        name: resolver
            .find_text("nombre")
            .unwrap_or(FALLBACK_CIRCUIT_NAME)
            .to_string(),
        length: measurement("medidas.longitud"),
        mean_width: measurement("medidas.anchuraMedia"),
        date: text_at("evento.fecha"),
        start_time: text_at("evento.horaInicio"),
        laps: text_at("evento.numeroVueltas"),
        town: text_at("ubicacion.localidadProxima"),
        country: text_at("ubicacion.pais"),
        sponsor: text_at("patrocinio.patrocinadorPrincipal"),
        references,
        photos,
        videos,
        winner: text_at("resultado.vencedor"),
        total_time: text_at("resultado.tiempoTotal"),
        standings,
    };
    tracing::debug!(
        circuit = %info.name,
        references = info.references.len(),
        photos = info.photos.len(),
        videos = info.videos.len(),
        standings = info.standings.len(),
        "extracted circuit info"
    );
    info
}
