use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

pub const DEFAULT_INPUT: &str = "results.csv";
pub const DEFAULT_OUTPUT_DIR: &str = "plots";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Headerless benchmark results to load.
    pub input: PathBuf,

    /// Directory receiving the chart images; created when absent.
    pub output_dir: PathBuf,

    pub image: ImageSettings,

    /// Print each chart's aggregate table to stdout.
    pub summary: bool,

    /// Write the run's metrics in Prometheus text format to this file.
    pub metrics_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            image: ImageSettings::default(),
            summary: false,
            metrics_path: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSettings {
    #[serde(
        serialize_with = "crate::serde::serialize_to_str",
        deserialize_with = "crate::serde::deserialize_from_str"
    )]
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,

    /// TrueType font for chart text; common system fonts are tried when unset.
    pub font: Option<PathBuf>,
}

impl Default for ImageSettings {
    fn default() -> Self {
        // 7x5 inch figure at 100 dpi
        Self { format: ImageFormat::Png, width: 700, height: 500, font: None }
    }
}

#[derive(Debug, Display, AsRefStr, EnumString, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }
}
