use std::fmt;

use itertools::Itertools;
use serde::Serialize;

use crate::elements::{Bar, Dataset, GroupBy, Metric};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;
const KB_PER_MB: f64 = 1024.0;

/// Definition of one summary chart.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    /// Output file stem.
    pub name: &'static str,
    pub group_by: GroupBy,
    pub metric: Metric,
    /// Every aggregated value is divided by this before rendering.
    pub divisor: Option<f64>,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub title: &'static str,
}

pub const CHARTS: [ChartSpec; 6] = [
    ChartSpec {
        name: "read_throughput_vs_bloom",
        group_by: GroupBy::Bloom,
        metric: Metric::ReadThroughput,
        divisor: None,
        x_label: "Bloom filter",
        y_label: "Ops/sec",
        title: "Read Throughput vs Bloom Filter",
    },
    ChartSpec {
        name: "write_time_vs_compaction",
        group_by: GroupBy::Compaction,
        metric: Metric::WriteTime,
        divisor: None,
        x_label: "Compaction style",
        y_label: "Seconds",
        title: "Write Time vs Compaction Style",
    },
    ChartSpec {
        name: "read_latency_vs_batch",
        group_by: GroupBy::Batch,
        metric: Metric::ReadLatency,
        divisor: None,
        x_label: "Batch size",
        y_label: "Seconds per op",
        title: "Read Latency vs Batch Size",
    },
    ChartSpec {
        name: "db_size_vs_format",
        group_by: GroupBy::Format,
        metric: Metric::DbSize,
        divisor: Some(BYTES_PER_MB),
        x_label: "SST Format",
        y_label: "DB Size (MB)",
        title: "Final DB Size vs Table Format",
    },
    ChartSpec {
        name: "write_throughput_vs_duplicates",
        group_by: GroupBy::Duplicates,
        metric: Metric::WriteThroughput,
        divisor: None,
        x_label: "Duplicate ratio",
        y_label: "Ops/sec",
        title: "Write Throughput vs Duplicates",
    },
    ChartSpec {
        name: "memory_vs_size",
        group_by: GroupBy::Size,
        metric: Metric::MemKb,
        divisor: Some(KB_PER_MB),
        x_label: "Database size (items)",
        y_label: "Memory (MB)",
        title: "Memory Usage vs Database Size",
    },
];

impl ChartSpec {
    /// Means of the metric per distinct group key, rescaled by the divisor when one is set.
    #[tracing::instrument(level = "debug", skip(self, dataset), fields(chart = %self.name))]
    pub fn aggregate(&self, dataset: &Dataset) -> ChartData {
        let mut bars = dataset.group_mean(self.group_by, self.metric);
        if let Some(divisor) = self.divisor {
            bars.iter_mut().for_each(|bar| bar.value /= divisor);
        }

        tracing::debug!(nr_bars = bars.len(), "aggregated {} by {}", self.metric, self.group_by);
        ChartData { spec: *self, bars }
    }

    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.name, extension)
    }
}

/// Aggregated values of one chart, ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub spec: ChartSpec,
    pub bars: Vec<Bar>,
}

impl ChartData {
    pub fn values(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.value).collect()
    }

    pub fn labels(&self) -> Vec<String> {
        self.bars.iter().map(|b| b.key.to_string()).collect()
    }
}

impl fmt::Display for ChartData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key_width = self
            .bars
            .iter()
            .map(|b| b.key.to_string().len())
            .chain(std::iter::once(self.spec.x_label.len()))
            .max()
            .unwrap_or_default();

        writeln!(f, "{}", self.spec.title)?;
        writeln!(f, "{:>width$} | {}", self.spec.x_label, self.spec.y_label, width = key_width)?;
        writeln!(f, "{}", "-".repeat(key_width + 3 + self.spec.y_label.len().max(12)))?;
        let rows = self
            .bars
            .iter()
            .map(|b| format!("{:>width$} | {:.4}", b.key.to_string(), b.value, width = key_width))
            .join("\n");
        if !rows.is_empty() {
            writeln!(f, "{}", rows)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::elements::{BenchmarkRecord, GroupKey};

    fn record(format: &str, size: i64, mem_kb: f64, db_size: f64) -> BenchmarkRecord {
        BenchmarkRecord {
            size: Some(size),
            duplicates: Some(0.1),
            bloom: Some("true".to_string()),
            compaction: Some("level".to_string()),
            format: Some(format.to_string()),
            batch: Some(100),
            write_time: 2.5,
            read_time: 1.1,
            write_throughput: 4000.0,
            read_throughput: 9000.0,
            write_latency: 0.00025,
            read_latency: 0.00011,
            mem_kb,
            db_size,
        }
    }

    #[test]
    fn test_chart_names_are_unique() {
        let names: HashSet<&str> = CHARTS.iter().map(|c| c.name).collect();
        assert_eq!(names.len(), CHARTS.len());
    }

    #[test]
    fn test_db_size_scaled_to_megabytes() {
        let data = Dataset::new(vec![
            record("block", 1000, 5000.0, 1_048_576.0),
            record("block", 1000, 5000.0, 2_097_152.0),
        ]);
        let spec = CHARTS.iter().find(|c| c.name == "db_size_vs_format").copied().unwrap();
        let chart = spec.aggregate(&data);
        assert_eq!(chart.labels(), vec!["block".to_string()]);
        assert_relative_eq!(chart.bars[0].value, 1.5);
    }

    #[test]
    fn test_memory_scaled_to_megabytes() {
        let data = Dataset::new(vec![
            record("block", 1000, 1024.0, 0.0),
            record("block", 2000, 2048.0, 0.0),
            record("plain", 2000, 4096.0, 0.0),
        ]);
        let spec = CHARTS.iter().find(|c| c.name == "memory_vs_size").copied().unwrap();
        let chart = spec.aggregate(&data);
        assert_eq!(chart.bars[0].key, GroupKey::from(1000));
        assert_eq!(chart.values(), vec![1.0, 3.0]);
    }

    #[test]
    fn test_nan_survives_rescale() {
        let data = Dataset::new(vec![record("block", 1000, 5000.0, f64::NAN)]);
        let spec = CHARTS[3];
        let chart = spec.aggregate(&data);
        assert!(chart.bars[0].value.is_nan());
    }

    #[test]
    fn test_summary_table() {
        let data = Dataset::new(vec![record("block", 1000, 5000.0, 2_097_152.0)]);
        let summary = CHARTS[3].aggregate(&data).to_string();
        assert!(summary.starts_with("Final DB Size vs Table Format\n"));
        assert!(summary.contains("SST Format | DB Size (MB)"));
        assert!(summary.contains("     block | 2.0000"));
    }
}
