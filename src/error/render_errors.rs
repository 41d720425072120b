use std::path::PathBuf;

use either::{Either, Left};
use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

use super::MetricLabel;
use crate::SharedString;

#[derive(Debug, Error)]
pub enum RenderError {
    /// Error raised by the plotting backend while drawing or saving a chart.
    #[error("failed to draw {chart} chart: {message}")]
    Drawing { chart: String, message: String },

    #[error("no TrueType font found for chart text; set image.font")]
    FontUnavailable,

    #[error("failed to load chart font {path:?}: not a valid TrueType font")]
    Font { path: PathBuf },

    #[error("IO failed: {0}")]
    IO(#[from] std::io::Error),
}

impl RenderError {
    pub fn drawing<E>(chart: impl Into<String>) -> impl FnOnce(DrawingAreaErrorKind<E>) -> Self
    where
        E: std::error::Error + Send + Sync,
    {
        let chart = chart.into();
        move |err| Self::Drawing { chart, message: err.to_string() }
    }
}

impl MetricLabel for RenderError {
    fn slug(&self) -> SharedString {
        "render".into()
    }

    fn next(&self) -> Either<SharedString, Box<&dyn MetricLabel>> {
        match self {
            Self::Drawing { .. } => Left("drawing".into()),
            Self::FontUnavailable => Left("font_unavailable".into()),
            Self::Font { .. } => Left("font".into()),
            Self::IO(_) => Left("io".into()),
        }
    }
}
