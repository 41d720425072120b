use std::path::Path;

use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};

use crate::error::{BenchPlotError, MetricLabel};

pub static DATASET_ROWS: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new("benchplot_dataset_rows", "Number of benchmark records loaded")
        .expect("failed creating benchplot_dataset_rows metric")
});

pub static CHARTS_RENDERED: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("benchplot_charts_rendered", "Number of chart images written"),
        &["chart"],
    )
    .expect("failed creating benchplot_charts_rendered metric")
});

pub static BENCHPLOT_ERRORS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("benchplot_errors", "Number of errors raised while producing charts"),
        &["error_type"],
    )
    .expect("failed creating benchplot_errors metric")
});

#[tracing::instrument(level = "info", skip(registry))]
pub fn register_benchplot_metrics(registry: &Registry) -> Result<(), BenchPlotError> {
    registry.register(Box::new(DATASET_ROWS.clone()))?;
    registry.register(Box::new(CHARTS_RENDERED.clone()))?;
    registry.register(Box::new(BENCHPLOT_ERRORS.clone()))?;
    Ok(())
}

pub fn track_errors(error: &BenchPlotError) {
    BENCHPLOT_ERRORS.with_label_values(&[error.label().as_ref()]).inc()
}

/// Writes the registry's metrics in Prometheus text exposition format.
#[tracing::instrument(level = "debug", skip(registry))]
pub fn write_metrics(registry: &Registry, path: &Path) -> Result<(), BenchPlotError> {
    let mut buffer = vec![];
    TextEncoder::new().encode(&registry.gather(), &mut buffer)?;
    std::fs::write(path, buffer).map_err(|source| BenchPlotError::Io { path: path.to_path_buf(), source })
}
