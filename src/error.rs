use arrow::error::ArrowError;
use std::{fmt, io, path::PathBuf};

use crate::schema::ColumnKind;

/// Everything that can stop a report run.
///
/// Every variant is terminal: the pipeline reports the first one it hits and
/// produces no report. The `Display` text doubles as the diagnostic line shown
/// to the user, so it always names the category and the offending path or
/// column.
#[derive(Debug)]
pub enum ReportError {
    /// The input path is not an existing, readable file (or could not be decoded).
    NotFound {
        path: PathBuf,
        source: Option<io::Error>,
    },
    /// The header does not start with the fixed six column names.
    SchemaMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },
    /// A column holds values of the wrong kind.
    TypeMismatch {
        column: String,
        expected: ColumnKind,
        found: ColumnKind,
    },
    /// Assembling the in-memory table failed.
    Table(ArrowError),
}

impl ReportError {
    pub fn not_found(path: impl Into<PathBuf>, source: Option<io::Error>) -> Self {
        ReportError::NotFound {
            path: path.into(),
            source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ReportError::NotFound { .. })
    }

    pub fn is_schema_mismatch(&self) -> bool {
        matches!(self, ReportError::SchemaMismatch { .. })
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, ReportError::TypeMismatch { .. })
    }
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::NotFound { path, source: None } => write!(
                f,
                "error: not found: file path {} is invalid (no such file or directory)",
                path.display()
            ),
            ReportError::NotFound {
                path,
                source: Some(source),
            } => write!(
                f,
                "error: not found: file path {} is not readable: {}",
                path.display(),
                source
            ),
            ReportError::SchemaMismatch { expected, found } => write!(
                f,
                "error: schema mismatch: expected column names are {:?} instead found {:?}",
                expected, found
            ),
            ReportError::TypeMismatch {
                column,
                expected,
                found,
            } => write!(
                f,
                "error: type mismatch: expected column {:?} to be of kind {}, found {}",
                column, expected, found
            ),
            ReportError::Table(err) => write!(f, "error: building record table: {}", err),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::NotFound {
                source: Some(source),
                ..
            } => Some(source),
            ReportError::Table(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ArrowError> for ReportError {
    fn from(err: ArrowError) -> Self {
        ReportError::Table(err)
    }
}
