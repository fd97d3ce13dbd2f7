// ./src/main.rs
//! Zeichnet eine Voronoi-Karte aus einer Punkttabelle.
//!
//! Usage:
//!   voronoi_mapper places.csv map                 -> map.png
//!   voronoi_mapper places.csv map -p svg          -> map.svg
//!   voronoi_mapper places.csv map -f Home --seed 7

use clap::Parser;
use std::fmt;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;
use voronoi_mapper::error::AtStage;
use voronoi_mapper::{MapperConfig, RenderRequest, Stage, StageError, VoronoiMapper};

#[derive(Parser, Debug)]
#[command(name = "voronoi_mapper")]
#[command(about = "Render a Voronoi map of labelled points")]
struct Args {
    /// Tabelle mit den Spalten Label, X, Y, Visited
    incsv: PathBuf,

    /// Ausgabepfad ohne Endung
    outplot: String,

    /// Ausgabeformat (svg, pdf, png, jpg, bmp, tif, webp)
    #[arg(short = 'p', long = "plot-type", default_value = "png")]
    plot_type: String,

    /// Label des Fokuspunkts für die Fisheye-Transformation
    #[arg(short = 'f', long)]
    fisheye: Option<String>,

    /// Seed für reproduzierbare Zellfarben
    #[arg(long)]
    seed: Option<u64>,

    /// Rand um die Punkte in Datenkoordinaten
    #[arg(long, default_value_t = 0.6)]
    margin: f64,

    #[arg(long, default_value_t = 10.0)]
    padding_factor: f64,

    #[arg(long, default_value_t = 2000)]
    width: u32,

    #[arg(long, default_value_t = 1600)]
    height: u32,

    /// TrueType-Schrift für Beschriftungen in Rasterbildern
    #[arg(long)]
    font: Option<PathBuf>,

    /// Trennzeichen der Tabelle
    #[arg(long, default_value_t = ',')]
    delimiter: char,
}

impl Args {
    fn config(&self) -> Result<MapperConfig, String> {
        let delimiter = u8::try_from(self.delimiter)
            .map_err(|_| format!("delimiter '{}' must be a single ASCII byte", self.delimiter))?;

        let mut config = MapperConfig::new()
            .with_margin(self.margin)
            .with_padding_factor(self.padding_factor)
            .with_canvas_size(self.width, self.height)
            .with_delimiter(delimiter);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(font) = &self.font {
            config = config.with_font(font);
        }
        Ok(config)
    }

    fn request(&self) -> RenderRequest {
        let mut request =
            RenderRequest::new(&self.incsv, self.outplot.as_str()).with_format(&self.plot_type);
        if let Some(label) = self.fisheye.as_deref().filter(|l| !l.is_empty()) {
            request = request.with_fisheye(label);
        }
        request
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match args.config() {
        Ok(config) => config,
        Err(message) => return fail(&message),
    };

    let result = VoronoiMapper::new(config)
        .at_stage(Stage::Load)
        .and_then(|mapper| mapper.render(&args.request()));

    match result {
        Ok(outcome) => {
            println!("SAVED: {}", outcome.path.display());
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e),
    }
}

/// Meldet einen fatalen Fehler unabhängig vom Log-Filter auf stderr.
fn fail(err: &dyn fmt::Display) -> ExitCode {
    error!("{}", err);
    eprintln!("{}", failure_line(err));
    ExitCode::FAILURE
}

fn failure_line(err: &dyn fmt::Display) -> String {
    format!("ERROR: {}", err)
}
