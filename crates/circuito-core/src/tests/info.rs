use crate::*;

const INFO_DOC: &str = r#"<circuito xmlns="http://www.uniovi.es/circuito">
  <nombre>Circuito de Jerez</nombre>
  <medidas>
    <longitud unidades="km">4.423</longitud>
    <anchuraMedia>11</anchuraMedia>
  </medidas>
  <evento>
    <fecha>2025-04-27</fecha>
    <horaInicio>14:00</horaInicio>
    <numeroVueltas>25</numeroVueltas>
  </evento>
  <ubicacion>
    <localidadProxima>Jerez de la Frontera</localidadProxima>
    <pais>España</pais>
  </ubicacion>
  <referencias>
    <referencia>https://example.org/a?x=1&amp;y=2</referencia>
    <referencia>  </referencia>
  </referencias>
  <galeriaFotos>
    <foto archivo="multimedia/img/jerez.jpg" descripcion="Recta de meta"/>
  </galeriaFotos>
  <galeriaVideos>
    <video archivo="multimedia/video/jerez.webm" duracion="PT1M"/>
  </galeriaVideos>
  <clasificacionMundial>
    <piloto posicion="1">
      <nombrePiloto>Piloto Uno</nombrePiloto>
      <equipo>Equipo A</equipo>
      <puntos>120</puntos>
    </piloto>
    <piloto posicion="2">
      <nombrePiloto>Piloto Dos</nombrePiloto>
    </piloto>
  </clasificacionMundial>
</circuito>"#;

#[test]
fn extracts_flat_info_record() {
    let info = info_from_str(INFO_DOC).unwrap();
    assert_eq!(info.name, "Circuito de Jerez");
    assert_eq!(
        info.length,
        Some(Measurement {
            value: "4.423".to_string(),
            units: "km".to_string()
        })
    );
    assert_eq!(info.mean_width.as_ref().map(|m| m.units.as_str()), Some("m"));
    assert_eq!(info.laps, "25");
    assert_eq!(info.country, "España");
    assert_eq!(info.references, vec!["https://example.org/a?x=1&y=2"]);
    assert_eq!(info.photos.len(), 1);
    assert_eq!(info.videos[0].description, "");
    assert_eq!(info.videos[0].duration, "PT1M");
    assert_eq!(info.standings.len(), 2);
    assert_eq!(info.standings[1].team, "");
    assert_eq!(info.standings[0].points, "120");
}

#[test]
fn absent_sections_are_empty_not_errors() {
    let info = info_from_str(r#"<circuito xmlns="http://www.uniovi.es/circuito"/>"#).unwrap();
    assert_eq!(info.name, "Circuito");
    assert!(info.length.is_none());
    assert!(info.sponsor.is_empty());
    assert!(info.winner.is_empty());
    assert!(info.standings.is_empty());
}
