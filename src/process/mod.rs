// src/process/mod.rs
pub mod convert;
pub mod raw_table;
pub mod utils;

use arrow::{
    array::BooleanArray,
    compute::{and, filter_record_batch, is_not_null},
    record_batch::RecordBatch,
};
use csv::ReaderBuilder;
use std::{fs::File, io, path::Path};
use tracing::{debug, info};

use crate::config::ReportConfig;
use crate::error::ReportError;
pub use raw_table::RawTable;

/// Rows loaded from one input file, every column still `Utf8`.
#[derive(Debug, Clone)]
pub struct Table {
    batch: RecordBatch,
}

impl Table {
    pub fn new(batch: RecordBatch) -> Self {
        Self { batch }
    }

    pub fn batch(&self) -> &RecordBatch {
        &self.batch
    }

    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    /// Header names in file order.
    pub fn column_names(&self) -> Vec<String> {
        self.batch
            .schema()
            .fields()
            .iter()
            .map(|f| f.name().clone())
            .collect()
    }
}

/// Read `path` as delimited text: the first row is the header, every later
/// row a record. Short rows are padded with missing cells, extra fields are
/// dropped, blank cells become `None`.
pub fn read_raw_table(path: &Path, config: &ReportConfig) -> Result<RawTable, ReportError> {
    if !path.is_file() {
        return Err(ReportError::not_found(path, None));
    }
    let file = File::open(path).map_err(|e| ReportError::not_found(path, Some(e)))?;

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true) // short rows are missing data, not parse errors
        .delimiter(config.delimiter)
        .from_reader(file);

    let headers: Vec<String> = rdr
        .headers()
        .map_err(|e| ReportError::not_found(path, Some(io::Error::from(e))))?
        .iter()
        .map(str::to_string)
        .collect();

    let width = headers.len();
    let mut rows = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result.map_err(|e| ReportError::not_found(path, Some(io::Error::from(e))))?;
        if record.len() > width {
            debug!(
                record = idx,
                fields = record.len(),
                width,
                "ignoring fields beyond the header"
            );
        }
        let row: Vec<Option<String>> = (0..width)
            .map(|i| {
                record
                    .get(i)
                    .filter(|cell| !utils::is_missing(cell))
                    .map(str::to_string)
            })
            .collect();
        rows.push(row);
    }

    Ok(RawTable { headers, rows })
}

/// Keep only the rows where every column holds a value.
pub fn drop_missing_rows(table: &Table) -> Result<Table, ReportError> {
    let batch = table.batch();
    let mut keep = BooleanArray::from(vec![true; batch.num_rows()]);
    for column in batch.columns() {
        keep = and(&keep, &is_not_null(column.as_ref())?)?;
    }

    let dropped = batch.num_rows() - keep.true_count();
    if dropped > 0 {
        info!(dropped, "dropped rows with missing values");
    }
    Ok(Table::new(filter_record_batch(batch, &keep)?))
}

/// Load `path` into a [`Table`] with incomplete rows already removed.
#[tracing::instrument(level = "info", skip(path, config), fields(path = %path.as_ref().display()))]
pub fn load_table<P: AsRef<Path>>(path: P, config: &ReportConfig) -> Result<Table, ReportError> {
    let raw = read_raw_table(path.as_ref(), config)?;
    debug!(columns = raw.headers.len(), rows = raw.rows.len(), "parsed file");
    let table = raw.into_table()?;
    let table = drop_missing_rows(&table)?;
    info!(rows = table.num_rows(), "loaded table");
    Ok(table)
}
