use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use super::GroupKey;

/// Positional column names of a headerless results file.
pub const COLUMNS: [&str; 14] = [
    "size",
    "duplicates",
    "bloom",
    "compaction",
    "format",
    "batch",
    "write_time",
    "read_time",
    "write_throughput",
    "read_throughput",
    "write_latency",
    "read_latency",
    "mem_kb",
    "db_size",
];

/// One benchmark run. Field order matches [`COLUMNS`] and is how rows are decoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Number of items written.
    #[serde(deserialize_with = "crate::serde::deserialize_optional_i64")]
    pub size: Option<i64>,

    /// Fraction of written keys that are duplicates.
    #[serde(deserialize_with = "crate::serde::deserialize_optional_f64")]
    pub duplicates: Option<f64>,

    #[serde(deserialize_with = "crate::serde::deserialize_optional_text")]
    pub bloom: Option<String>,

    #[serde(deserialize_with = "crate::serde::deserialize_optional_text")]
    pub compaction: Option<String>,

    /// SST table format.
    #[serde(deserialize_with = "crate::serde::deserialize_optional_text")]
    pub format: Option<String>,

    #[serde(deserialize_with = "crate::serde::deserialize_optional_i64")]
    pub batch: Option<i64>,

    #[serde(deserialize_with = "crate::serde::deserialize_lenient_f64")]
    pub write_time: f64,

    #[serde(deserialize_with = "crate::serde::deserialize_lenient_f64")]
    pub read_time: f64,

    #[serde(deserialize_with = "crate::serde::deserialize_lenient_f64")]
    pub write_throughput: f64,

    #[serde(deserialize_with = "crate::serde::deserialize_lenient_f64")]
    pub read_throughput: f64,

    #[serde(deserialize_with = "crate::serde::deserialize_lenient_f64")]
    pub write_latency: f64,

    #[serde(deserialize_with = "crate::serde::deserialize_lenient_f64")]
    pub read_latency: f64,

    /// Peak resident memory in KiB.
    #[serde(deserialize_with = "crate::serde::deserialize_lenient_f64")]
    pub mem_kb: f64,

    /// Final on-disk database size in bytes.
    #[serde(deserialize_with = "crate::serde::deserialize_lenient_f64")]
    pub db_size: f64,
}

impl BenchmarkRecord {
    pub fn group_key(&self, column: GroupBy) -> Option<GroupKey> {
        match column {
            GroupBy::Size => self.size.map(GroupKey::Integer),
            GroupBy::Duplicates => self.duplicates.map(GroupKey::Float),
            GroupBy::Bloom => self.bloom.clone().map(GroupKey::Text),
            GroupBy::Compaction => self.compaction.clone().map(GroupKey::Text),
            GroupBy::Format => self.format.clone().map(GroupKey::Text),
            GroupBy::Batch => self.batch.map(GroupKey::Integer),
        }
    }

    pub fn metric(&self, column: Metric) -> f64 {
        match column {
            Metric::WriteTime => self.write_time,
            Metric::ReadTime => self.read_time,
            Metric::WriteThroughput => self.write_throughput,
            Metric::ReadThroughput => self.read_throughput,
            Metric::WriteLatency => self.write_latency,
            Metric::ReadLatency => self.read_latency,
            Metric::MemKb => self.mem_kb,
            Metric::DbSize => self.db_size,
        }
    }
}

/// Configuration columns a chart may group by.
#[derive(
    Debug, Display, AsRefStr, EnumString, EnumIter, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum GroupBy {
    Size,
    Duplicates,
    Bloom,
    Compaction,
    Format,
    Batch,
}

/// Performance columns a chart may average.
#[derive(
    Debug, Display, AsRefStr, EnumString, EnumIter, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    WriteTime,
    ReadTime,
    WriteThroughput,
    ReadThroughput,
    WriteLatency,
    ReadLatency,
    MemKb,
    DbSize,
}
