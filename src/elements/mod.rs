mod dataset;
mod group_key;
mod record;

pub use dataset::{Bar, Dataset};
pub use group_key::GroupKey;
pub use record::{BenchmarkRecord, GroupBy, Metric, COLUMNS};
