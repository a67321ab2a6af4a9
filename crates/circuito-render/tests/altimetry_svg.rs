use circuito_core::{CircuitSample, ExtractionResult, altimetry_from_str, read_document_source};
use circuito_render::{
    DrawingPrimitive, Error, RenderConfig, StyleClass, render_altimetry, render_altimetry_svg,
};
use std::path::{Path, PathBuf};

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
}

fn load(name: &str) -> ExtractionResult {
    let path = workspace_root().join("fixtures").join("circuito").join(name);
    let text = read_document_source(&path).expect("fixture");
    altimetry_from_str(&text).expect("altimetry")
}

fn texts(primitives: &[DrawingPrimitive]) -> Vec<&str> {
    primitives
        .iter()
        .filter_map(|p| match p {
            DrawingPrimitive::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
        .collect()
}

#[test]
fn reference_circuit_paints_in_order() {
    let result = load("circuitoEsquema.xml");
    let config = RenderConfig::default();
    let drawing = render_altimetry(&result, &config).unwrap();
    let primitives = drawing.primitives();

    let DrawingPrimitive::Text { content, .. } = &primitives[0] else {
        panic!("title must come first: {:?}", primitives[0]);
    };
    assert_eq!(content, "Perfil Altimétrico: Circuito de Jerez - Ángel Nieto");

    let grid = primitives
        .iter()
        .filter(|p| matches!(p, DrawingPrimitive::Line { style: StyleClass::Grid, .. }))
        .count();
    assert_eq!(grid, 6 + 11);

    let profile = primitives
        .iter()
        .position(|p| matches!(p, DrawingPrimitive::Polyline { .. }))
        .expect("profile polygon");
    let last_axis = primitives
        .iter()
        .rposition(|p| matches!(p, DrawingPrimitive::Line { style: StyleClass::Axis, .. }))
        .expect("axes");
    assert!(last_axis < profile);
    let DrawingPrimitive::Polyline { points, .. } = &primitives[profile] else {
        unreachable!()
    };
    assert_eq!(points.len(), result.samples().len() + 2);

    let circles: Vec<usize> = primitives
        .iter()
        .enumerate()
        .filter(|(_, p)| matches!(p, DrawingPrimitive::Circle { .. }))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(circles.len(), 2);
    assert!(circles[0] > profile);

    let labels = texts(primitives);
    assert!(labels.contains(&"Máx: 61.0m"));
    assert!(labels.contains(&"Mín: 41.0m"));
    assert!(labels.contains(&"41.0m") && labels.contains(&"61.0m"));
    assert!(labels.contains(&"0m") && labels.contains(&"4423m"));
    assert_eq!(
        labels.last(),
        Some(&"Distancia total: 4423m | Desnivel: 20.0m")
    );
}

#[test]
fn three_sample_profile_places_markers_and_labels() {
    let result = ExtractionResult::new(
        "Perfil de Prueba",
        vec![
            CircuitSample::new(0.0, 100.0),
            CircuitSample::new(500.0, 150.0),
            CircuitSample::new(1000.0, 90.0),
        ],
    )
    .unwrap();
    let drawing = render_altimetry(&result, &RenderConfig::default()).unwrap();
    let primitives = drawing.primitives();

    let outline = primitives
        .iter()
        .find_map(|p| match p {
            DrawingPrimitive::Polyline { points, .. } => Some(points.clone()),
            _ => None,
        })
        .expect("profile polygon");
    let expected = [
        (80.0, 446.67),
        (600.0, 80.0),
        (1120.0, 520.0),
        (1120.0, 520.0),
        (80.0, 520.0),
    ];
    assert_eq!(outline.len(), expected.len());
    for (p, (x, y)) in outline.iter().zip(expected) {
        assert!((p.x - x).abs() < 0.01, "x: expected {x}, got {}", p.x);
        assert!((p.y - y).abs() < 0.01, "y: expected {y}, got {}", p.y);
    }

    let circles: Vec<_> = primitives
        .iter()
        .filter_map(|p| match p {
            DrawingPrimitive::Circle { center, fill, .. } => {
                Some((fill.as_str(), center.x, center.y))
            }
            _ => None,
        })
        .collect();
    assert_eq!(circles, vec![("red", 600.0, 80.0), ("blue", 1120.0, 520.0)]);

    let labels = texts(primitives);
    assert!(labels.contains(&"Máx: 150.0m"));
    assert!(labels.contains(&"Mín: 90.0m"));
    assert!(labels.contains(&"90.0m") && labels.contains(&"150.0m"));
    assert_eq!(
        labels.last(),
        Some(&"Distancia total: 1000m | Desnivel: 60.0m")
    );
}

#[test]
fn max_marker_sits_on_the_highest_sample() {
    let result = load("circuitoEsquema.xml");
    let config = RenderConfig::default();
    let drawing = render_altimetry(&result, &config).unwrap();

    let markers: Vec<_> = drawing
        .primitives()
        .iter()
        .filter_map(|p| match p {
            DrawingPrimitive::Circle { center, fill, .. } => Some((fill.as_str(), *center)),
            _ => None,
        })
        .collect();
    let (fill, center) = markers[0];
    assert_eq!(fill, "red");
    // Highest altitude maps onto the top edge of the plot area.
    assert!((center.y - config.margin).abs() < 1e-9);
    let expected_x = config.margin + 1395.0 / 4423.0 * (config.width - 2.0 * config.margin);
    assert!((center.x - expected_x).abs() < 1e-9);
    assert_eq!(markers[1].0, "blue");
    assert!((markers[1].1.y - (config.height - config.margin)).abs() < 1e-9);
}

#[test]
fn svg_output_is_deterministic_and_well_formed() {
    let result = load("circuitoEsquema.xml");
    let config = RenderConfig::default();
    let a = render_altimetry_svg(&result, &config).unwrap();
    let b = render_altimetry_svg(&result, &config).unwrap();
    assert_eq!(a, b);

    let doc = roxmltree::Document::parse(&a).expect("svg must be well-formed");
    let root = doc.root_element();
    assert_eq!(root.tag_name().name(), "svg");
    assert_eq!(root.attribute("viewBox"), Some("0 0 1200 600"));
    assert_eq!(
        doc.descendants()
            .filter(|n| n.has_tag_name("circle"))
            .count(),
        2
    );
    let polyline = doc
        .descendants()
        .find(|n| n.has_tag_name("polyline"))
        .expect("profile");
    assert_eq!(
        polyline.attribute("points").map(|p| p.split(' ').count()),
        Some(result.samples().len() + 2)
    );
}

#[test]
fn flat_profile_renders_without_nan() {
    let result = load("flat.xml");
    let svg = render_altimetry_svg(&result, &RenderConfig::default()).unwrap();
    assert!(!svg.contains("NaN"));
    assert!(!svg.contains("inf"));
    // Equal altitudes sit on the vertical midline of the plot area.
    assert!(svg.contains(r#"<polyline points="80,300 600,300 1120,300 1120,520 80,520""#));
    assert!(svg.contains("Desnivel: 0.0m"));
}

#[test]
fn custom_canvas_is_honoured() {
    let result = load("circuitoEsquema.xml");
    let config = RenderConfig {
        width: 800.0,
        height: 400.0,
        margin: 40.0,
        ..RenderConfig::default()
    };
    let svg = render_altimetry_svg(&result, &config).unwrap();
    assert!(svg.contains(r#"width="800" height="400" viewBox="0 0 800 400""#));
    assert!(svg.contains(r#"transform="rotate(-90 20 200)""#));
}

#[test]
fn margin_that_swallows_the_canvas_is_rejected() {
    let result = load("flat.xml");
    let config = RenderConfig {
        margin: 300.0,
        ..RenderConfig::default()
    };
    let err = render_altimetry_svg(&result, &config).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig { .. }), "{err:?}");
}
