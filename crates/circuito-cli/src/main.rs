use circuito::render::{
    ConvertError, HtmlOptions, KmlOptions, RenderConfig, altimetry_svg, circuit_html, circuit_kml,
    generation_timestamp,
};
use circuito::{CircuitInfo, CircuitTrack, ExtractionResult};
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Circuit(circuito::Error),
    Render(ConvertError),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Circuit(err) => write!(f, "{err}"),
            CliError::Render(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<circuito::Error> for CliError {
    fn from(value: circuito::Error) -> Self {
        Self::Circuit(value)
    }
}

impl From<ConvertError> for CliError {
    fn from(value: ConvertError) -> Self {
        Self::Render(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Command {
    #[default]
    Altimetria,
    Html,
    Kml,
    Extract,
}

impl Command {
    fn default_output(self) -> Option<&'static str> {
        match self {
            Command::Altimetria => Some("altimetria.svg"),
            Command::Html => Some("circuito.html"),
            Command::Kml => Some("circuito.kml"),
            Command::Extract => None,
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    output: Option<String>,
    width: Option<f64>,
    height: Option<f64>,
    margin: Option<f64>,
    author: Option<String>,
    pretty: bool,
}

#[derive(Serialize)]
struct ExtractOut<'a> {
    altimetry: Option<&'a ExtractionResult>,
    info: &'a CircuitInfo,
    track: Option<&'a CircuitTrack>,
}

fn usage() -> &'static str {
    "circuito-cli\n\
\n\
USAGE:\n\
  circuito-cli [altimetria] [--width <px>] [--height <px>] [--margin <px>] [<input> [<output>]]\n\
  circuito-cli html [--author <name>] [<input> [<output>]]\n\
  circuito-cli kml [<input> [<output>]]\n\
  circuito-cli extract [--pretty] [<input> [<output>]]\n\
\n\
NOTES:\n\
  - <input> defaults to circuitoEsquema.xml in the current directory.\n\
  - Outputs default to altimetria.svg, circuito.html and circuito.kml.\n\
  - extract prints the extracted records as JSON unless <output> is given.\n\
  - Set RUST_LOG (e.g. RUST_LOG=debug) to trace extraction on stderr.\n\
"
}

fn parse_number(value: Option<&String>) -> Result<f64, CliError> {
    let Some(value) = value else {
        return Err(CliError::Usage(usage()));
    };
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .ok_or(CliError::Usage(usage()))
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();
    let mut positional = Vec::new();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "altimetria" if positional.is_empty() => args.command = Command::Altimetria,
            "html" if positional.is_empty() => args.command = Command::Html,
            "kml" if positional.is_empty() => args.command = Command::Kml,
            "extract" if positional.is_empty() => args.command = Command::Extract,
            "--width" => args.width = Some(parse_number(it.next())?),
            "--height" => args.height = Some(parse_number(it.next())?),
            "--margin" => args.margin = Some(parse_number(it.next())?),
            "--author" => {
                let Some(author) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.author = Some(author.clone());
            }
            "--pretty" => args.pretty = true,
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => positional.push(path.to_string()),
        }
    }

    let mut positional = positional.into_iter();
    args.input = positional.next();
    args.output = positional.next();
    if positional.next().is_some() {
        return Err(CliError::Usage(usage()));
    }
    Ok(args)
}

fn render_config(args: &Args) -> RenderConfig {
    let mut config = RenderConfig::default();
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(margin) = args.margin {
        config.margin = margin;
    }
    config
}

fn write_json(value: &impl Serialize, pretty: bool, out: Option<&str>) -> Result<(), CliError> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    match out {
        None => println!("{text}"),
        Some(path) => std::fs::write(path, format!("{text}\n"))?,
    }
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    let input = args
        .input
        .clone()
        .unwrap_or_else(|| circuito::DEFAULT_INPUT_PATH.to_string());
    let text = circuito::read_document_source(&input)?;
    let output = args
        .output
        .clone()
        .or_else(|| args.command.default_output().map(str::to_string));
    tracing::debug!(command = ?args.command, %input, output = ?output, "converting");

    match args.command {
        Command::Altimetria => {
            let (result, svg) = altimetry_svg(&text, &render_config(&args))?;
            let out = output.unwrap_or_default();
            std::fs::write(&out, svg)?;
            println!(
                "Extraídos {} puntos de altimetría de {}",
                result.samples().len(),
                input
            );
            println!("SVG generado: {out}");
            println!("Distancia total: {:.0} m", result.total_distance());
            println!(
                "Altitud mínima: {:.1} m | Altitud máxima: {:.1} m | Desnivel: {:.1} m",
                result.min_altitude(),
                result.max_altitude(),
                result.elevation_gain()
            );
        }
        Command::Html => {
            let options = HtmlOptions {
                author: args.author.clone(),
                ..HtmlOptions::default()
            };
            let (info, html) = circuit_html(&text, &options)?;
            let out = output.unwrap_or_default();
            std::fs::write(&out, html)?;
            println!("HTML generado: {out}");
            println!("Circuito: {}", info.name);
        }
        Command::Kml => {
            let source_name = Path::new(&input)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| input.clone());
            let options = KmlOptions {
                source_name,
                generated_at: Some(generation_timestamp()),
                ..KmlOptions::default()
            };
            let (track, kml) = circuit_kml(&text, &options)?;
            let out = output.unwrap_or_default();
            std::fs::write(&out, kml)?;
            println!("KML generado: {out}");
            println!("Coordenadas exportadas: {}", track.coordinates().len());
        }
        Command::Extract => {
            let altimetry = match circuito::altimetry_from_str(&text) {
                Ok(result) => Some(result),
                Err(circuito::Error::MissingAltimetryData) => None,
                Err(err) => return Err(err.into()),
            };
            let info = circuito::info_from_str(&text)?;
            let track = match circuito::track_from_str(&text) {
                Ok(track) => Some(track),
                Err(circuito::Error::MissingCoordinates) => None,
                Err(err) => return Err(err.into()),
            };
            let out = ExtractOut {
                altimetry: altimetry.as_ref(),
                info: &info,
                track: track.as_ref(),
            };
            write_json(&out, args.pretty, output.as_deref())?;
        }
    }
    Ok(())
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
