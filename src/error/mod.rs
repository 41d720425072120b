use std::fmt::Debug;

use either::{Either, Left, Right};
use thiserror::Error;

use crate::SharedString;

mod load_errors;
mod render_errors;
mod settings_errors;

pub use load_errors::LoadError;
pub use render_errors::RenderError;
pub use settings_errors::SettingsError;

pub trait MetricLabel {
    fn label(&self) -> SharedString {
        match self.next() {
            Either::Right(n) => format!("{}::{}", self.slug(), n.label()).into(),
            Either::Left(ls) => format!("{}::{}", self.slug(), ls).into(),
        }
    }

    fn slug(&self) -> SharedString;
    fn next(&self) -> Either<SharedString, Box<&dyn MetricLabel>>;
}

#[derive(Debug, Error)]
pub enum BenchPlotError {
    #[error("{0}")]
    Load(#[from] LoadError),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("{0}")]
    Settings(#[from] SettingsError),

    /// Failure preparing the output directory or writing a report artifact.
    #[error("IO failed for {path:?}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("chart task failed to complete: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("{0}")]
    Metrics(#[from] prometheus::Error),
}

impl MetricLabel for BenchPlotError {
    fn slug(&self) -> SharedString {
        "benchplot".into()
    }

    fn next(&self) -> Either<SharedString, Box<&dyn MetricLabel>> {
        match self {
            Self::Load(e) => Right(Box::new(e)),
            Self::Render(e) => Right(Box::new(e)),
            Self::Settings(e) => Right(Box::new(e)),
            Self::Io { .. } => Left("io".into()),
            Self::Task(_) => Left("task".into()),
            Self::Metrics(_) => Left("prometheus".into()),
        }
    }
}
