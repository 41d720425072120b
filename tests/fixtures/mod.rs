#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use benchplot::charts::ChartData;
use benchplot::error::RenderError;
use benchplot::phases::ChartRenderer;
use benchplot::settings::Settings;

pub const SCENARIO_ROW: &str = "1000,0.1,true,level,block,100,2.5,1.1,4000,9000,0.00025,0.00011,5000,2097152";

pub fn init_tracing() {
    once_cell::sync::Lazy::force(&benchplot::tracing::TEST_TRACING);
}

pub fn data_path(file: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data").join(file)
}

pub fn settings_for(input: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Settings {
    Settings { input: input.into(), output_dir: output_dir.into(), ..Settings::default() }
}

/// Writes each chart's summary table instead of an image, so pipeline tests do not depend on
/// the fonts plotters needs for text.
#[derive(Debug, Default)]
pub struct TableRenderer;

impl TableRenderer {
    pub fn shared() -> Arc<dyn ChartRenderer> {
        Arc::new(Self)
    }
}

impl ChartRenderer for TableRenderer {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, chart: &ChartData, path: &Path) -> Result<(), RenderError> {
        std::fs::write(path, chart.to_string())?;
        Ok(())
    }
}

pub fn list_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}
