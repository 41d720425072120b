use std::path::PathBuf;

use either::{Either, Left};
use thiserror::Error;

use super::MetricLabel;
use crate::SharedString;

/// Set of errors occurring while loading benchmark results.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The results file is absent or cannot be opened.
    #[error("could not open benchmark results at {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// An error reading or decoding a CSV record.
    #[error("Could not properly load CSV results: {0}")]
    Csv(#[from] csv::Error),

    #[error("row at line {line} has {actual} fields but {expected} are required")]
    ColumnCount { line: u64, expected: usize, actual: usize },
}

impl MetricLabel for LoadError {
    fn slug(&self) -> SharedString {
        "load".into()
    }

    fn next(&self) -> Either<SharedString, Box<&dyn MetricLabel>> {
        match self {
            Self::Open { .. } => Left("open".into()),
            Self::Csv(_) => Left("csv".into()),
            Self::ColumnCount { .. } => Left("column_count".into()),
        }
    }
}
