use arrow::{
    array::{ArrayRef, StringArray},
    datatypes::{DataType, Field, Schema},
    record_batch::{RecordBatch, RecordBatchOptions},
};
use std::sync::Arc;

use crate::error::ReportError;
use crate::process::Table;

#[derive(Debug, Default)]
pub struct RawTable {
    /// Column names, verbatim from the header row.
    pub headers: Vec<String>,
    /// Each data row, padded or cut to the header width. `None` marks a
    /// missing cell.
    pub rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    /// Build an all-`Utf8` Arrow table, one nullable column per header.
    pub fn into_table(self) -> Result<Table, ReportError> {
        let num_rows = self.rows.len();
        let fields: Vec<Field> = self
            .headers
            .iter()
            .map(|name| Field::new(name, DataType::Utf8, true))
            .collect();

        let mut columns: Vec<Vec<Option<String>>> = (0..self.headers.len())
            .map(|_| Vec::with_capacity(num_rows))
            .collect();
        for row in self.rows {
            for (column, cell) in columns.iter_mut().zip(row) {
                column.push(cell);
            }
        }
        let arrays: Vec<ArrayRef> = columns
            .into_iter()
            .map(|cells| Arc::new(StringArray::from(cells)) as ArrayRef)
            .collect();

        // a header-less file has no columns, so the row count must be explicit
        let options = RecordBatchOptions::new().with_row_count(Some(num_rows));
        let batch =
            RecordBatch::try_new_with_options(Arc::new(Schema::new(fields)), arrays, &options)?;
        Ok(Table::new(batch))
    }
}
