use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::{BenchmarkRecord, GroupBy, GroupKey, Metric};

/// In-memory benchmark results, in file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<BenchmarkRecord>,
}

impl Dataset {
    pub fn new(records: Vec<BenchmarkRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct non-missing values of a grouping column, ascending.
    pub fn distinct(&self, column: GroupBy) -> BTreeSet<GroupKey> {
        self.records.iter().filter_map(|r| r.group_key(column)).collect()
    }

    /// Groups rows by `group_by` and averages `metric` within each group.
    ///
    /// Rows with a missing key are left out. `NaN` metric values are skipped, so a group yields
    /// `NaN` only when none of its rows has a value.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn group_mean(&self, group_by: GroupBy, metric: Metric) -> Vec<Bar> {
        let mut groups: BTreeMap<GroupKey, Mean> = BTreeMap::new();
        for record in self.records.iter() {
            if let Some(key) = record.group_key(group_by) {
                groups.entry(key).or_default().push(record.metric(metric));
            }
        }

        groups
            .into_iter()
            .map(|(key, mean)| Bar { key, value: mean.value() })
            .collect()
    }
}

impl From<Vec<BenchmarkRecord>> for Dataset {
    fn from(records: Vec<BenchmarkRecord>) -> Self {
        Self::new(records)
    }
}

/// One bar of a chart: a group key and its aggregated value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub key: GroupKey,
    pub value: f64,
}

#[derive(Debug, Default, Copy, Clone)]
struct Mean {
    sum: f64,
    count: usize,
}

impl Mean {
    fn push(&mut self, value: f64) {
        if !value.is_nan() {
            self.sum += value;
            self.count += 1;
        }
    }

    fn value(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            self.sum / self.count as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use claim::*;
    use pretty_assertions::assert_eq;

    use super::*;

    fn record(size: i64, bloom: Option<&str>, read_throughput: f64) -> BenchmarkRecord {
        BenchmarkRecord {
            size: Some(size),
            duplicates: Some(0.0),
            bloom: bloom.map(|b| b.to_string()),
            compaction: Some("leveled".to_string()),
            format: Some("block".to_string()),
            batch: Some(100),
            write_time: 1.0,
            read_time: 1.0,
            write_throughput: 1000.0,
            read_throughput,
            write_latency: 0.001,
            read_latency: 0.001,
            mem_kb: 1024.0,
            db_size: 1_048_576.0,
        }
    }

    #[test]
    fn test_group_mean_orders_and_averages() {
        let data = Dataset::new(vec![
            record(1000, Some("on"), 10.0),
            record(1000, Some("off"), 3.0),
            record(1000, Some("on"), 20.0),
            record(1000, Some("off"), 5.0),
        ]);

        let actual = data.group_mean(GroupBy::Bloom, Metric::ReadThroughput);
        assert_eq!(
            actual,
            vec![
                Bar { key: "off".into(), value: 4.0 },
                Bar { key: "on".into(), value: 15.0 },
            ]
        );
    }

    #[test]
    fn test_group_mean_skips_nan() {
        let data = Dataset::new(vec![
            record(1000, Some("on"), 10.0),
            record(1000, Some("on"), f64::NAN),
            record(2000, Some("on"), f64::NAN),
        ]);

        let actual = data.group_mean(GroupBy::Size, Metric::ReadThroughput);
        assert_eq!(actual.len(), 2);
        assert_eq!(actual[0].key, GroupKey::from(1000));
        assert_relative_eq!(actual[0].value, 10.0);
        assert_eq!(actual[1].key, GroupKey::from(2000));
        assert!(actual[1].value.is_nan());
    }

    #[test]
    fn test_missing_keys_are_dropped() {
        let data = Dataset::new(vec![record(1000, None, 10.0), record(1000, Some("on"), 7.0)]);
        let actual = data.group_mean(GroupBy::Bloom, Metric::ReadThroughput);
        assert_eq!(actual, vec![Bar { key: "on".into(), value: 7.0 }]);
        assert_eq!(data.distinct(GroupBy::Bloom).len(), 1);
    }

    #[test]
    fn test_empty_dataset() {
        let data = Dataset::default();
        assert!(data.is_empty());
        assert_none!(data.group_mean(GroupBy::Format, Metric::DbSize).first());
    }
}
