use std::io;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::elements::{BenchmarkRecord, Dataset, COLUMNS};
use crate::error::LoadError;
use crate::metrics::DATASET_ROWS;

/// Loads the whole results file into memory.
///
/// The file has no header row; the fourteen [`COLUMNS`] are assigned by position. Any row with a
/// different number of fields fails the load, and no partial dataset is returned. Missing or
/// non-numeric metric values are not errors; they load as `NaN`.
#[tracing::instrument(level = "info")]
pub fn load_dataset(path: &Path) -> Result<Dataset, LoadError> {
    let reader = reader_builder()
        .from_path(path)
        .map_err(|source| LoadError::Open { path: path.to_path_buf(), source })?;

    let dataset = read_records(reader)?;
    tracing::info!(nr_records = dataset.len(), ?path, "loaded benchmark results.");
    Ok(dataset)
}

/// Loads results from any reader, following the same rules as [`load_dataset`].
pub fn load_dataset_from_reader<R: io::Read>(rdr: R) -> Result<Dataset, LoadError> {
    read_records(reader_builder().from_reader(rdr))
}

fn reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    // row length is checked per record so a short row reports its line
    builder.has_headers(false).flexible(true).trim(Trim::All);
    builder
}

fn read_records<R: io::Read>(mut reader: csv::Reader<R>) -> Result<Dataset, LoadError> {
    let csv_span = tracing::debug_span!("reading CSV records");
    let _csv_span_guard = csv_span.enter();

    let mut records = vec![];
    for result in reader.records() {
        let row = result?;
        if row.len() != COLUMNS.len() {
            let line = row.position().map(|p| p.line()).unwrap_or_default();
            tracing::error!(line, nr_fields = row.len(), "malformed benchmark results row.");
            return Err(LoadError::ColumnCount { line, expected: COLUMNS.len(), actual: row.len() });
        }

        let record: BenchmarkRecord = row.deserialize(None)?;
        records.push(record);
    }

    tracing::debug!("deserialized {} records from CSV.", records.len());
    DATASET_ROWS.set(records.len() as i64);
    Ok(Dataset::new(records))
}
