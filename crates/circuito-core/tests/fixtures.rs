use circuito_core::{
    Error, Resolver, extract_altimetry, extract_info, extract_track, parse_document,
    read_document_source,
};
use std::path::{Path, PathBuf};

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
}

fn fixture(name: &str) -> PathBuf {
    workspace_root().join("fixtures").join("circuito").join(name)
}

#[test]
fn reference_circuit_extracts_every_record() {
    let text = read_document_source(fixture("circuitoEsquema.xml")).expect("fixture");
    let doc = parse_document(&text).expect("well-formed");
    let resolver = Resolver::new(&doc);

    let altimetry = extract_altimetry(&resolver).expect("altimetry");
    assert_eq!(altimetry.name(), "Circuito de Jerez - Ángel Nieto");
    assert_eq!(altimetry.samples().len(), 12);
    assert_eq!(altimetry.samples()[0].distance, 0.0);
    assert_eq!(altimetry.total_distance(), 4423.0);
    assert_eq!(altimetry.max_altitude(), 61.0);
    assert_eq!(altimetry.min_altitude(), 41.0);
    assert_eq!(altimetry.samples()[altimetry.max_altitude_index()].distance, 1395.0);
    assert!(
        altimetry
            .samples()
            .windows(2)
            .all(|w| w[0].distance <= w[1].distance),
        "distances must be non-decreasing"
    );

    let info = extract_info(&resolver);
    assert_eq!(info.town, "Jerez de la Frontera");
    assert_eq!(info.winner, "Álex Márquez");
    assert_eq!(info.standings.len(), 3);
    assert_eq!(info.references.len(), 3);

    let track = extract_track(&resolver).expect("track");
    assert_eq!(track.coordinates().len(), 12);
    assert_eq!(track.segments.last().map(|s| s.index), Some(11));
}

#[test]
fn missing_input_is_reported_as_not_found() {
    let err = read_document_source(fixture("no-existe.xml")).unwrap_err();
    assert!(matches!(err, Error::InputNotFound { .. }), "{err:?}");
}

#[test]
fn malformed_fixture_is_a_malformed_document() {
    let text = read_document_source(fixture("malformado.xml")).expect("fixture");
    assert!(matches!(
        parse_document(&text),
        Err(Error::MalformedDocument { .. })
    ));
}

#[test]
fn fixture_without_altitudes_is_missing_altimetry_data() {
    let text = read_document_source(fixture("sin-altimetria.xml")).expect("fixture");
    let err = circuito_core::altimetry_from_str(&text).unwrap_err();
    assert!(matches!(err, Error::MissingAltimetryData));
}
