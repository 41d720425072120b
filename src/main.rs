use std::sync::Arc;

use anyhow::Result;
use benchplot::metrics::{self, register_benchplot_metrics, write_metrics};
use benchplot::phases::{register_chart_font, BarChartRenderer, ChartRenderer};
use benchplot::settings::{get_settings, CliOptions};
use benchplot::tracing::{get_subscriber, init_subscriber};
use benchplot::{plot_benchmarks, CHARTS};
use clap::Parser;
use prometheus::Registry;

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = get_subscriber("benchplot", "warn");
    init_subscriber(subscriber)?;

    let main_span = tracing::info_span!("main");
    let _main_span_guard = main_span.enter();

    let options = CliOptions::parse();
    let settings = get_settings(&options)?;

    let registry = Registry::new();
    register_benchplot_metrics(&registry)?;

    register_chart_font(settings.image.font.as_deref())?;
    let renderer: Arc<dyn ChartRenderer> = Arc::new(BarChartRenderer::from(&settings.image));
    let outcome = plot_benchmarks(&settings, &CHARTS, renderer).await;
    if let Err(ref err) = outcome {
        metrics::track_errors(err);
    }

    if let Some(ref metrics_path) = settings.metrics_path {
        write_metrics(&registry, metrics_path)?;
    }

    let outcomes = outcome?;
    if settings.summary {
        for outcome in outcomes.iter() {
            println!("{}", outcome.chart);
        }
    }

    let prefix = if settings.output_dir.is_relative() { "./" } else { "" };
    println!("✅ All plots saved to {}{}/", prefix, settings.output_dir.display());
    Ok(())
}
