//! Circuit information page.

use crate::svg::escape_xml;
use circuito_core::{CircuitInfo, Measurement};
use std::fmt::Write as _;

const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq)]
pub struct HtmlOptions {
    pub lang: String,
    pub author: Option<String>,
    pub keywords: String,
    pub stylesheets: Vec<String>,
    pub favicon: Option<String>,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            lang: "es".to_string(),
            author: None,
            keywords: "MotoGP, circuito, carreras, motociclismo".to_string(),
            stylesheets: vec![
                "estilo/estilo.css".to_string(),
                "estilo/layout.css".to_string(),
            ],
            favicon: Some("multimedia/img/favicon/favicon.ico".to_string()),
        }
    }
}

const NAVIGATION: [(&str, &str, &str); 7] = [
    ("index.html", "Index", "Home"),
    ("piloto.html", "Piloto", "Piloto"),
    ("circuito.html", "Circuito", "Circuito"),
    ("metereologia.html", "Metereología", "Metereologia"),
    ("clasificacion.html", "Clasificacion", "Clasificacion"),
    ("juegos.html", "Juegos", "Juegos"),
    ("ayuda.html", "Ayuda", "Ayuda"),
];
const ACTIVE_PAGE: &str = "circuito.html";

struct Page {
    out: String,
}

impl Page {
    fn heading(&mut self, level: u8, text: &str) {
        let _ = writeln!(self.out, "    <h{level}>{}</h{level}>", escape_xml(text));
    }

    fn open_section(&mut self, class: &str) {
        let _ = writeln!(self.out, r#"    <section class="{}">"#, escape_xml(class));
    }

    fn close_section(&mut self) {
        self.out.push_str("    </section>\n");
    }

    /// `<dl>` with one `<dt>`/`<dd>` pair per entry; empty values render as "N/A".
    fn definitions(&mut self, entries: &[(&str, &str)]) {
        self.out.push_str("      <dl>\n");
        for (term, value) in entries {
            let value = if value.is_empty() { NOT_AVAILABLE } else { *value };
            let _ = writeln!(self.out, "        <dt>{}</dt>", escape_xml(term));
            let _ = writeln!(self.out, "        <dd>{}</dd>", escape_xml(value));
        }
        self.out.push_str("      </dl>\n");
    }

    fn table_row(&mut self, cells: &[&str], header: bool) {
        let tag = if header { "th" } else { "td" };
        self.out.push_str("          <tr>\n");
        for cell in cells {
            let _ = writeln!(self.out, "            <{tag}>{}</{tag}>", escape_xml(cell));
        }
        self.out.push_str("          </tr>\n");
    }

    fn caption_paragraph(&mut self, text: &str) {
        if !text.is_empty() {
            let _ = writeln!(self.out, "      <p>{}</p>", escape_xml(text));
        }
    }
}

fn measurement_text(m: Option<&Measurement>) -> String {
    match m {
        Some(m) if !m.value.is_empty() => format!("{} {}", m.value, m.units),
        _ => String::new(),
    }
}

fn write_head(page: &mut Page, info: &CircuitInfo, options: &HtmlOptions) {
    let out = &mut page.out;
    out.push_str("<!DOCTYPE html>\n");
    let _ = writeln!(out, r#"<html lang="{}">"#, escape_xml(&options.lang));
    out.push_str("<head>\n  <meta charset=\"UTF-8\" />\n");
    if let Some(author) = options.author.as_deref() {
        let _ = writeln!(out, r#"  <meta name="author" content="{}" />"#, escape_xml(author));
    }
    let _ = writeln!(
        out,
        r#"  <meta name="description" content="Información sobre el circuito {}" />"#,
        escape_xml(&info.name)
    );
    let _ = writeln!(
        out,
        r#"  <meta name="keywords" content="{}" />"#,
        escape_xml(&options.keywords)
    );
    out.push_str(
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />\n\n",
    );
    for href in &options.stylesheets {
        let _ = writeln!(out, r#"  <link rel="stylesheet" href="{}" />"#, escape_xml(href));
    }
    let _ = writeln!(out, "  <title>MotoGP - {}</title>", escape_xml(&info.name));
    if let Some(icon) = options.favicon.as_deref() {
        let _ = writeln!(
            out,
            r#"  <link rel="icon" type="image/x-icon" href="{}" />"#,
            escape_xml(icon)
        );
    }
    out.push_str("</head>\n\n<body>\n  <header>\n");
    out.push_str("    <h1><a href=\"index.html\">MotoGP</a></h1>\n\n    <nav>\n");
    for (href, title, label) in NAVIGATION {
        let active = if href == ACTIVE_PAGE {
            r#" class="active""#
        } else {
            ""
        };
        let _ = writeln!(
            out,
            r#"      <a href="{href}"{active} title="{title}">{label}</a>"#
        );
    }
    out.push_str("    </nav>\n\n");
    out.push_str(
        "    <p>\n      Estás en: <a href=\"index.html\">Inicio</a> &gt; &gt;\n      <strong>Circuito</strong>\n    </p>\n",
    );
    out.push_str("  </header>\n\n  <main>\n");
}

/// Renders the information page for `info`.
///
/// Sponsor, result, standings, galleries and references are only emitted when the record has
/// data for them. All record text is escaped.
pub fn render_circuit_html(info: &CircuitInfo, options: &HtmlOptions) -> String {
    let mut page = Page { out: String::new() };
    write_head(&mut page, info, options);

    page.heading(2, &info.name);

    page.open_section("info-general");
    page.heading(3, "Información General");
    page.heading(4, "Características del Circuito");
    let length = measurement_text(info.length.as_ref());
    let width = measurement_text(info.mean_width.as_ref());
    page.definitions(&[("Longitud", length.as_str()), ("Anchura Media", width.as_str())]);
    page.heading(4, "Ubicación");
    page.definitions(&[("Localidad", info.town.as_str()), ("País", info.country.as_str())]);
    page.close_section();

    page.open_section("evento");
    page.heading(3, "Información del Evento");
    page.definitions(&[
        ("Fecha", info.date.as_str()),
        ("Hora de Inicio", info.start_time.as_str()),
        ("Número de Vueltas", info.laps.as_str()),
    ]);
    page.close_section();

    if !info.sponsor.is_empty() {
        page.open_section("patrocinio");
        page.heading(3, "Patrocinio");
        page.definitions(&[("Patrocinador Principal", info.sponsor.as_str())]);
        page.close_section();
    }

    if !info.winner.is_empty() {
        page.open_section("resultado");
        page.heading(3, "Resultado de la Carrera");
        page.definitions(&[
            ("Vencedor", info.winner.as_str()),
            ("Tiempo Total", info.total_time.as_str()),
        ]);
        page.close_section();
    }

    if !info.standings.is_empty() {
        page.open_section("clasificacion");
        page.heading(3, "Clasificación Mundial");
        page.out.push_str("      <table>\n");
        page.out
            .push_str("        <caption>Top Pilotos en el Campeonato</caption>\n");
        page.out.push_str("        <thead>\n");
        page.table_row(&["Posición", "Piloto", "Equipo", "Puntos"], true);
        page.out.push_str("        </thead>\n        <tbody>\n");
        for entry in &info.standings {
            page.table_row(
                &[
                    entry.position.as_str(),
                    entry.rider.as_str(),
                    entry.team.as_str(),
                    entry.points.as_str(),
                ],
                false,
            );
        }
        page.out.push_str("        </tbody>\n      </table>\n");
        page.close_section();
    }

    if !info.photos.is_empty() {
        page.open_section("galeria-fotos");
        page.heading(3, "Galería de Fotos");
        for photo in &info.photos {
            let alt = if photo.description.is_empty() {
                "Imagen del circuito"
            } else {
                photo.description.as_str()
            };
            let _ = writeln!(
                page.out,
                r#"      <img src="{}" alt="{}" />"#,
                escape_xml(&photo.file),
                escape_xml(alt)
            );
            page.caption_paragraph(&photo.description);
        }
        page.close_section();
    }

    if !info.videos.is_empty() {
        page.open_section("galeria-videos");
        page.heading(3, "Galería de Videos");
        for video in &info.videos {
            let _ = writeln!(
                page.out,
                "      <video controls>\n        <source src=\"{}\" type=\"video/webm\" />\n        Tu navegador no soporta el elemento de video.\n      </video>",
                escape_xml(&video.file)
            );
            page.caption_paragraph(&video.description);
        }
        page.close_section();
    }

    if !info.references.is_empty() {
        page.open_section("referencias");
        page.heading(3, "Referencias");
        page.out.push_str("      <ul>\n");
        for reference in &info.references {
            let _ = writeln!(page.out, "        <li>{}</li>", escape_xml(reference));
        }
        page.out.push_str("      </ul>\n");
        page.close_section();
    }

    page.out.push_str("  </main>\n</body>\n</html>\n");
    tracing::debug!(circuit = %info.name, bytes = page.out.len(), "rendered circuit page");
    page.out
}
