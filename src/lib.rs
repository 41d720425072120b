pub mod charts;
pub mod elements;
pub mod error;
pub mod metrics;
pub mod phases;
pub mod report;
pub mod serde;
pub mod settings;
pub mod tracing;

pub use charts::{ChartSpec, CHARTS};
pub use elements::{BenchmarkRecord, Dataset, GroupBy, GroupKey, Metric};
pub use report::{generate_reports, plot_benchmarks, ChartOutcome};

pub type BenchPlotResult<T> = Result<T, error::BenchPlotError>;

pub type SharedString = std::borrow::Cow<'static, str>;
