// src/pipeline.rs

use crate::config::MapperConfig;
use crate::data::{PointRecord, PointSetLoader};
use crate::error::{AtStage, MapperResult, Stage, StageError};
use crate::math::prelude::{
    BoundaryPadder, CellClassifier, Point2D, RenderSpec, SpadeBackend, VoronoiBackend,
    apply_optional_fisheye,
};
use crate::render::{FigureStats, OutputTarget, render_figure};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};
use tracing::info;

/// Eingaben eines einzelnen Laufs.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub input_table: PathBuf,
    pub output_stem: String,
    pub format: String,
    pub fisheye_focal_label: Option<String>,
}

impl RenderRequest {
    pub fn new(input_table: impl Into<PathBuf>, output_stem: impl Into<String>) -> Self {
        Self {
            input_table: input_table.into(),
            output_stem: output_stem.into(),
            format: "png".to_string(),
            fisheye_focal_label: None,
        }
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn with_fisheye(mut self, label: impl Into<String>) -> Self {
        self.fisheye_focal_label = Some(label.into());
        self
    }
}

/// Ergebnis eines erfolgreichen Laufs.
#[derive(Debug, Clone)]
pub struct RenderOutcome {
    pub path: PathBuf,
    pub stats: FigureStats,
    pub specs: Vec<RenderSpec>,
}

/// Ein vollständiger, isolierter Lauf: Laden, Transformieren, Tessellieren, Rendern.
pub struct VoronoiMapper<B: VoronoiBackend = SpadeBackend> {
    config: MapperConfig,
    backend: B,
}

impl VoronoiMapper<SpadeBackend> {
    pub fn new(config: MapperConfig) -> MapperResult<Self> {
        Self::with_backend(config, SpadeBackend::new())
    }
}

impl<B: VoronoiBackend> VoronoiMapper<B> {
    pub fn with_backend(config: MapperConfig, backend: B) -> MapperResult<Self> {
        config.validate()?;
        Ok(Self { config, backend })
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Führt den Lauf mit der im Config gewählten Zufallsquelle aus.
    pub fn render(&self, request: &RenderRequest) -> Result<RenderOutcome, StageError> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.render_with_rng(request, &mut rng)
    }

    pub fn render_with_rng<R: Rng + ?Sized>(
        &self,
        request: &RenderRequest,
        rng: &mut R,
    ) -> Result<RenderOutcome, StageError> {
        // Format zuerst prüfen, damit ein ungültiges Format keine Geometrie-Arbeit auslöst.
        let target =
            OutputTarget::new(&request.output_stem, &request.format).at_stage(Stage::Render)?;

        let records = PointSetLoader::new(self.config.delimiter)
            .load_path(&request.input_table)
            .at_stage(Stage::Load)?;
        info!(
            "Loaded {} points from '{}'",
            records.len(),
            request.input_table.display()
        );

        self.render_records(records, request.fisheye_focal_label.as_deref(), &target, rng)
    }

    /// Gemeinsamer Teil ab den geladenen Datensätzen.
    pub fn render_records<R: Rng + ?Sized>(
        &self,
        mut records: Vec<PointRecord>,
        focal_label: Option<&str>,
        target: &OutputTarget,
        rng: &mut R,
    ) -> Result<RenderOutcome, StageError> {
        apply_optional_fisheye(&mut records, focal_label).at_stage(Stage::Transform)?;

        let real: Vec<Point2D> = records.iter().map(PointRecord::position).collect();
        let padded = BoundaryPadder::new(self.config.padding_factor)
            .and_then(|padder| padder.pad(&real))
            .at_stage(Stage::Tessellate)?;
        let tessellation = self
            .backend
            .compute_voronoi(&padded)
            .at_stage(Stage::Tessellate)?;

        let specs = CellClassifier::new(&tessellation).classify(&records, rng);
        let stats = render_figure(&self.config, &specs, target).at_stage(Stage::Render)?;

        Ok(RenderOutcome {
            path: target.path.clone(),
            stats,
            specs,
        })
    }
}

/// Kurzform: `render(inputTable, outputPathStem, format, fisheyeFocalLabel)`.
///
/// Eine ungültige Konfiguration wird der Stufe `load` zugeordnet, da sie vor
/// dem Einlesen geprüft wird.
pub fn render(
    input_table: impl AsRef<Path>,
    output_stem: &str,
    format: &str,
    fisheye_focal_label: &str,
) -> Result<PathBuf, StageError> {
    render_with_config(MapperConfig::default(), input_table, output_stem, format, fisheye_focal_label)
}

pub fn render_with_config(
    config: MapperConfig,
    input_table: impl AsRef<Path>,
    output_stem: &str,
    format: &str,
    fisheye_focal_label: &str,
) -> Result<PathBuf, StageError> {
    let mapper = VoronoiMapper::new(config).at_stage(Stage::Load)?;
    let mut request = RenderRequest::new(input_table.as_ref(), output_stem).with_format(format);
    if !fisheye_focal_label.is_empty() {
        request = request.with_fisheye(fisheye_focal_label);
    }
    mapper.render(&request).map(|outcome| outcome.path)
}
