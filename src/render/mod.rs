// src/render/mod.rs

pub mod canvas;
pub mod figure;
pub mod font;
pub mod format;
pub mod output;
pub mod pdf;
pub mod raster;
pub mod vector;
pub mod viewport;

pub use self::canvas::Canvas;
pub use self::figure::{FigureRenderer, FigureStats};
pub use self::font::{FontSource, LabelFont};
pub use self::format::{OutputFormat, OutputTarget};
pub use self::output::persist_atomically;
pub use self::pdf::PdfCanvas;
pub use self::raster::RasterCanvas;
pub use self::vector::SvgCanvas;
pub use self::viewport::{Viewport, axis_limits};

use crate::config::MapperConfig;
use crate::error::MapperResult;
use crate::math::voronoi::RenderSpec;
use tracing::info;

/// Zeichnet die Specs im gewählten Format und schreibt genau eine Datei.
pub fn render_figure(
    config: &MapperConfig,
    specs: &[RenderSpec],
    target: &OutputTarget,
) -> MapperResult<FigureStats> {
    let renderer = FigureRenderer::new(config, specs)?;

    let (bytes, stats) = match target.format {
        OutputFormat::Svg => {
            let mut canvas = SvgCanvas::new(config);
            let stats = renderer.draw(specs, &mut canvas)?;
            (canvas.encode()?, stats)
        }
        OutputFormat::Pdf => {
            let font = LabelFont::for_config(config)?;
            let mut canvas = PdfCanvas::new(config, &font);
            let stats = renderer.draw(specs, &mut canvas)?;
            (canvas.encode()?, stats)
        }
        OutputFormat::Raster(format) => {
            let font = LabelFont::for_config(config)?.to_font_vec()?;
            let mut canvas = RasterCanvas::new(config, format, font);
            let stats = renderer.draw(specs, &mut canvas)?;
            (canvas.encode()?, stats)
        }
    };

    persist_atomically(&target.path, &bytes)?;
    info!(
        "Rendered {} cells ({} filled), {} markers, {} labels as {} output",
        stats.outlined_cells,
        stats.filled_cells,
        stats.markers,
        stats.labels,
        if target.format.is_vector() { "vector" } else { "raster" }
    );
    Ok(stats)
}
