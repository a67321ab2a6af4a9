use super::SAMPLE_DOC;
use crate::*;

#[test]
fn extracts_origin_and_segment_endpoints() {
    let track = track_from_str(SAMPLE_DOC).unwrap();
    assert_eq!(track.name, "Circuito de Prueba");
    let origin = track.origin.unwrap();
    assert_eq!(origin.longitude, -6.0343);
    assert_eq!(track.segments.len(), 2);
    assert_eq!(track.segments[1].index, 2);
    assert_eq!(track.segments[1].sector.as_deref(), Some("2"));
    assert_eq!(track.segments[1].length, Some(500.0));
    assert_eq!(track.coordinates().len(), 3);
    assert_eq!(track.coordinates()[2].altitude, 90.0);
}

#[test]
fn segments_without_position_keep_their_index_gap() {
    let text = r#"<circuito xmlns="http://www.uniovi.es/circuito">
      <tramos>
        <tramo><puntoFinal><altitud>3</altitud></puntoFinal></tramo>
        <tramo><puntoFinal><longitud>1</longitud><latitud>2</latitud></puntoFinal></tramo>
      </tramos>
    </circuito>"#;
    let track = track_from_str(text).unwrap();
    assert!(track.origin.is_none());
    assert_eq!(track.segments.len(), 1);
    assert_eq!(track.segments[0].index, 2);
    assert_eq!(track.segments[0].end.altitude, 0.0);
    assert!(track.segments[0].sector.is_none());
}

#[test]
fn no_coordinates_is_an_error() {
    let err = track_from_str(r#"<circuito xmlns="http://www.uniovi.es/circuito"/>"#).unwrap_err();
    assert!(matches!(err, Error::MissingCoordinates));
}

#[test]
fn malformed_longitude_is_fatal() {
    let text = r#"<circuito xmlns="http://www.uniovi.es/circuito">
      <geografia><origen><longitud>oeste</longitud><latitud>1</latitud></origen></geografia>
    </circuito>"#;
    assert!(matches!(
        track_from_str(text),
        Err(Error::MalformedNumericValue { .. })
    ));
}

#[test]
fn negative_segment_length_is_a_malformed_number() {
    let text = r#"<circuito xmlns="http://www.uniovi.es/circuito">
      <tramos>
        <tramo>
          <distancia>-5</distancia>
          <puntoFinal><longitud>1</longitud><latitud>2</latitud></puntoFinal>
        </tramo>
      </tramos>
    </circuito>"#;
    assert!(matches!(
        track_from_str(text),
        Err(Error::MalformedNumericValue { field, .. }) if field == "distancia"
    ));
}
