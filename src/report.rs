use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::future;

use crate::charts::{ChartData, ChartSpec};
use crate::elements::Dataset;
use crate::error::BenchPlotError;
use crate::metrics::CHARTS_RENDERED;
use crate::phases::load::load_dataset;
use crate::phases::render::ChartRenderer;
use crate::settings::Settings;
use crate::BenchPlotResult;

/// A chart that was aggregated and written.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOutcome {
    pub path: PathBuf,
    pub chart: ChartData,
}

impl ChartOutcome {
    pub fn name(&self) -> &'static str {
        self.chart.spec.name
    }
}

/// Loads the configured results file and writes every chart in `specs`.
///
/// The whole file is loaded before the output directory is touched, so a malformed input leaves
/// no new files behind.
#[tracing::instrument(level = "info", skip(settings, specs, renderer), fields(input = ?settings.input))]
pub async fn plot_benchmarks(
    settings: &Settings, specs: &[ChartSpec], renderer: Arc<dyn ChartRenderer>,
) -> BenchPlotResult<Vec<ChartOutcome>> {
    let dataset = Arc::new(load_dataset(&settings.input)?);
    generate_reports(dataset, specs, renderer, &settings.output_dir).await
}

/// Aggregates and renders every chart into `output_dir`.
///
/// The output directory is created first if it does not exist. Charts are independent, so each
/// is aggregated and drawn on the blocking pool concurrently; the dataset is shared read-only.
/// Outcomes are returned in `specs` order. When any chart fails, the first failure in `specs`
/// order is returned once all charts have finished.
#[tracing::instrument(level = "info", skip(dataset, specs, renderer), fields(nr_records = dataset.len()))]
pub async fn generate_reports(
    dataset: Arc<Dataset>, specs: &[ChartSpec], renderer: Arc<dyn ChartRenderer>, output_dir: &Path,
) -> BenchPlotResult<Vec<ChartOutcome>> {
    tokio::fs::create_dir_all(output_dir)
        .await
        .map_err(|source| BenchPlotError::Io { path: output_dir.to_path_buf(), source })?;

    let tasks = specs.iter().copied().map(|spec| {
        let dataset = Arc::clone(&dataset);
        let renderer = Arc::clone(&renderer);
        let path = output_dir.join(spec.file_name(renderer.extension()));
        tokio::task::spawn_blocking(move || render_chart(&spec, &dataset, renderer.as_ref(), path))
    });

    let results = future::join_all(tasks).await;

    let mut outcomes = Vec::with_capacity(results.len());
    for result in results {
        outcomes.push(result??);
    }

    tracing::info!(nr_charts = outcomes.len(), ?output_dir, "all charts saved.");
    Ok(outcomes)
}

fn render_chart(
    spec: &ChartSpec, dataset: &Dataset, renderer: &dyn ChartRenderer, path: PathBuf,
) -> BenchPlotResult<ChartOutcome> {
    let chart = spec.aggregate(dataset);
    renderer.render(&chart, &path)?;
    CHARTS_RENDERED.with_label_values(&[spec.name]).inc();
    Ok(ChartOutcome { path, chart })
}
