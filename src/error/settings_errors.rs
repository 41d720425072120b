use either::{Either, Left};
use thiserror::Error;

use super::MetricLabel;
use crate::SharedString;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to assemble configuration: {0}")]
    Configuration(#[from] config::ConfigError),

    #[error("IO failed: {0}")]
    IO(#[from] std::io::Error),
}

impl MetricLabel for SettingsError {
    fn slug(&self) -> SharedString {
        "settings".into()
    }

    fn next(&self) -> Either<SharedString, Box<&dyn MetricLabel>> {
        match self {
            Self::Configuration(_) => Left("configuration".into()),
            Self::IO(_) => Left("io".into()),
        }
    }
}
