use arrow::{
    array::{AsArray, Int64Array, StringArray},
    datatypes::Int64Type,
    error::ArrowError,
    record_batch::RecordBatch,
};
use tracing::debug;

use super::{contract_names, ColumnKind, Record, CONTRACT};
use crate::error::ReportError;
use crate::process::{convert::to_contract_types, utils::Value, Table};

// positions within CONTRACT
const FIRSTNAME: usize = 0;
const LASTNAME: usize = 1;
const DATE: usize = 2;
const DIVISION: usize = 3;
const POINTS: usize = 4;
const SUMMARY: usize = 5;

/// Integer when every present cell reads as an `i64`, text otherwise.
/// A column with no present cells is integer.
pub fn infer_kind(column: &StringArray) -> ColumnKind {
    if column
        .iter()
        .flatten()
        .all(|cell| Value::classify(cell).is_integer())
    {
        ColumnKind::Integer
    } else {
        ColumnKind::Text
    }
}

/// A table whose six contract columns carry their declared Arrow types.
#[derive(Debug, Clone)]
pub struct ValidatedTable {
    batch: RecordBatch,
}

impl ValidatedTable {
    pub fn batch(&self) -> &RecordBatch {
        &self.batch
    }

    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    /// Materialise every row, in table order.
    pub fn records(&self) -> Result<Vec<Record>, ReportError> {
        let firstname = text_column(&self.batch, FIRSTNAME)?;
        let lastname = text_column(&self.batch, LASTNAME)?;
        let date = text_column(&self.batch, DATE)?;
        let division = integer_column(&self.batch, DIVISION)?;
        let points = integer_column(&self.batch, POINTS)?;
        let summary = text_column(&self.batch, SUMMARY)?;

        Ok((0..self.batch.num_rows())
            .map(|row| Record {
                firstname: firstname.value(row).to_string(),
                lastname: lastname.value(row).to_string(),
                date: date.value(row).to_string(),
                division: division.value(row),
                points: points.value(row),
                summary: summary.value(row).to_string(),
            })
            .collect())
    }
}

fn text_column(batch: &RecordBatch, idx: usize) -> Result<&StringArray, ReportError> {
    batch.column(idx).as_string_opt::<i32>().ok_or_else(|| {
        ArrowError::SchemaError(format!("column {} is not Utf8", CONTRACT[idx].name)).into()
    })
}

fn integer_column(batch: &RecordBatch, idx: usize) -> Result<&Int64Array, ReportError> {
    batch
        .column(idx)
        .as_primitive_opt::<Int64Type>()
        .ok_or_else(|| {
            ArrowError::SchemaError(format!("column {} is not Int64", CONTRACT[idx].name)).into()
        })
}

/// Check `table` against the fixed contract and convert it to contract types.
///
/// The header must start with exactly the six contract names, in order;
/// extra trailing columns are allowed and dropped. Each contract column is
/// then checked in order and the first one whose inferred kind does not
/// satisfy its declared kind fails the whole table.
///
/// `table` is expected to have had missing rows removed already: a blank
/// cell in an integer column is not a type error, a present non-integer is.
pub fn validate(table: &Table) -> Result<ValidatedTable, ReportError> {
    let expected = contract_names();
    let found: Vec<String> = table
        .column_names()
        .into_iter()
        .take(CONTRACT.len())
        .collect();
    if found != expected {
        return Err(ReportError::SchemaMismatch { expected, found });
    }

    let batch = table.batch();
    for (idx, column) in CONTRACT.iter().enumerate() {
        let kind = infer_kind(text_column(batch, idx)?);
        debug!(column = column.name, %kind, declared = %column.kind, "checked column kind");
        if !kind.satisfies(column.kind) {
            return Err(ReportError::TypeMismatch {
                column: column.name.to_string(),
                expected: column.kind,
                found: kind,
            });
        }
    }

    let batch = to_contract_types(batch, &CONTRACT)?;
    Ok(ValidatedTable { batch })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::RawTable;

    const HEADER: [&str; 6] = ["firstname", "lastname", "date", "division", "points", "summary"];

    fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
        RawTable {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|cell| Some(cell.to_string())).collect())
                .collect(),
        }
        .into_table()
        .expect("test table")
    }

    #[test]
    fn infer_kind_of_columns() {
        assert_eq!(
            infer_kind(&StringArray::from(vec!["1", "-2", " 3"])),
            ColumnKind::Integer
        );
        assert_eq!(
            infer_kind(&StringArray::from(vec!["1", "two"])),
            ColumnKind::Text
        );
        assert_eq!(
            infer_kind(&StringArray::from(vec![Some("4"), None])),
            ColumnKind::Integer
        );
        assert_eq!(
            infer_kind(&StringArray::from(Vec::<&str>::new())),
            ColumnKind::Integer
        );
    }

    #[test]
    fn accepts_contract_table() -> Result<(), ReportError> {
        let t = table(
            &HEADER,
            &[&["Ann", "Lee", "2021-01-01", "2", "10", "ran"]],
        );
        let validated = validate(&t)?;
        let records = validated.records()?;
        assert_eq!(
            records,
            vec![Record {
                firstname: "Ann".into(),
                lastname: "Lee".into(),
                date: "2021-01-01".into(),
                division: 2,
                points: 10,
                summary: "ran".into(),
            }]
        );
        Ok(())
    }

    #[test]
    fn wrong_names_are_a_schema_mismatch() {
        let t = table(
            &["first", "last", "date", "division", "points", "summary"],
            &[&["Ann", "Lee", "2021-01-01", "2", "10", "ran"]],
        );
        match validate(&t).unwrap_err() {
            ReportError::SchemaMismatch { expected, found } => {
                assert_eq!(expected, HEADER.to_vec());
                assert_eq!(found[0], "first");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn reordered_or_short_header_is_a_schema_mismatch() {
        let swapped = table(
            &["firstname", "lastname", "date", "points", "division", "summary"],
            &[],
        );
        assert!(validate(&swapped).unwrap_err().is_schema_mismatch());

        let short = table(&["firstname", "lastname"], &[]);
        match validate(&short).unwrap_err() {
            ReportError::SchemaMismatch { found, .. } => {
                assert_eq!(found, vec!["firstname", "lastname"])
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn trailing_columns_are_dropped() -> Result<(), ReportError> {
        let mut header = HEADER.to_vec();
        header.push("notes");
        let t = table(
            &header,
            &[&["Ann", "Lee", "2021-01-01", "2", "10", "ran", "fast"]],
        );
        let validated = validate(&t)?;
        assert_eq!(validated.batch().num_columns(), 6);
        Ok(())
    }

    #[test]
    fn text_in_points_is_a_type_mismatch() {
        let t = table(
            &HEADER,
            &[
                &["Ann", "Lee", "2021-01-01", "2", "10", "ran"],
                &["Bo", "Smith", "2021-01-02", "1", "five", "jumped"],
            ],
        );
        match validate(&t).unwrap_err() {
            ReportError::TypeMismatch {
                column,
                expected,
                found,
            } => {
                assert_eq!(column, "points");
                assert_eq!(expected, ColumnKind::Integer);
                assert_eq!(found, ColumnKind::Text);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn first_failing_column_is_reported() {
        let t = table(
            &HEADER,
            &[&["Ann", "Lee", "2021-01-01", "two", "ten", "ran"]],
        );
        match validate(&t).unwrap_err() {
            ReportError::TypeMismatch { column, .. } => assert_eq!(column, "division"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn numbers_in_text_columns_stay_verbatim() -> Result<(), ReportError> {
        let t = table(
            &HEADER,
            &[&["007", "1.1", "20210101", "1", "3", "42"]],
        );
        let records = validate(&t)?.records()?;
        assert_eq!(records[0].firstname, "007");
        assert_eq!(records[0].lastname, "1.1");
        assert_eq!(records[0].date, "20210101");
        assert_eq!(records[0].summary, "42");
        Ok(())
    }

    #[test]
    fn empty_table_is_valid() -> Result<(), ReportError> {
        let t = table(&HEADER, &[]);
        let validated = validate(&t)?;
        assert_eq!(validated.num_rows(), 0);
        assert!(validated.records()?.is_empty());
        Ok(())
    }
}
