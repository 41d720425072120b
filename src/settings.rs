pub use model::*;

mod model;

use std::path::{Path, PathBuf};

use clap::Parser;
use config::{Config, Environment, File};

use crate::error::SettingsError;

/// Prefix of environment variables that override settings,
/// e.g. `BENCHPLOT_OUTPUT_DIR=out` or `BENCHPLOT_IMAGE__FORMAT=svg`.
pub const ENV_PREFIX: &str = "BENCHPLOT";

/// Assembles settings for the current working directory.
///
/// Layers, lowest precedence first: built-in defaults, `configuration/base.*` (optional), the
/// `--config` file, `BENCHPLOT_*` environment variables, then explicit command line options.
pub fn get_settings(options: &CliOptions) -> Result<Settings, SettingsError> {
    let base_path = std::env::current_dir()?;
    load_settings(options, &base_path.join("configuration"))
}

#[tracing::instrument(level = "debug")]
pub fn load_settings(options: &CliOptions, configuration_directory: &Path) -> Result<Settings, SettingsError> {
    let mut builder = Config::builder().add_source(File::from(configuration_directory.join("base")).required(false));

    if let Some(ref config_path) = options.config {
        builder = builder.add_source(File::from(config_path.as_path()).required(true));
    }

    let settings: Settings = builder
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__").try_parsing(true))
        .set_override_option("input", options.input.as_deref().map(path_value))?
        .set_override_option("output_dir", options.output_dir.as_deref().map(path_value))?
        .set_override_option("image.format", options.format.map(|f| f.to_string()))?
        .set_override_option("summary", options.summary.then_some(true))?
        .set_override_option("metrics_path", options.metrics_path.as_deref().map(path_value))?
        .build()?
        .try_deserialize()?;

    tracing::debug!(?settings, "settings loaded.");
    Ok(settings)
}

fn path_value(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Renders summary bar charts from headerless RocksDB benchmark results.
#[derive(Parser, Debug, Default, Clone, PartialEq)]
#[command(version, about)]
pub struct CliOptions {
    /// Configuration file layered over `configuration/base`.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Benchmark results file [default: results.csv]
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory receiving the charts [default: plots]
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Chart image format, png or svg [default: png]
    #[arg(short, long)]
    pub format: Option<ImageFormat>,

    /// Print each chart's aggregated values.
    #[arg(long)]
    pub summary: bool,

    /// Write Prometheus metrics for the run to this file.
    #[arg(long = "metrics")]
    pub metrics_path: Option<PathBuf>,
}
