use crate::error::ReportError;
use crate::process::utils;
use crate::schema::{Column, ColumnKind};
use arrow::{
    array::{Array, ArrayRef, AsArray, Int64Array},
    datatypes::{DataType, Schema},
    error::ArrowError,
    record_batch::RecordBatch,
};
use std::sync::Arc;

/// Convert the leading `Utf8` columns of `batch` into the types `columns`
/// declares. Text stays verbatim; integer columns are parsed into `Int64`.
/// Columns past `columns.len()` are dropped.
pub fn to_contract_types(
    batch: &RecordBatch,
    columns: &[Column],
) -> Result<RecordBatch, ReportError> {
    let mut out = Vec::with_capacity(columns.len());

    for (idx, column) in columns.iter().enumerate() {
        let arr = batch.column(idx);
        match (arr.data_type(), column.kind) {
            (DataType::Utf8, ColumnKind::Integer) => {
                let sarr = arr.as_string::<i32>();
                let mut values = Vec::with_capacity(sarr.len());
                for (row, cell) in sarr.iter().enumerate() {
                    let value = cell.and_then(utils::parse_integer).ok_or_else(|| {
                        ArrowError::CastError(format!(
                            "column {} row {}: {:?} is not an integer",
                            column.name, row, cell
                        ))
                    })?;
                    values.push(value);
                }
                out.push(Arc::new(Int64Array::from(values)) as ArrayRef);
            }

            (DataType::Utf8, ColumnKind::Text) => out.push(arr.clone()),

            (other, _) => {
                return Err(ArrowError::SchemaError(format!(
                    "column {} is {}, expected Utf8 input",
                    column.name, other
                ))
                .into())
            }
        }
    }

    let fields: Vec<_> = columns.iter().map(|c| c.to_field()).collect();
    RecordBatch::try_new(Arc::new(Schema::new(fields)), out).map_err(Into::into)
}
