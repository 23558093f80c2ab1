// src/schema/types.rs

use arrow::datatypes::{DataType, Field};
use std::fmt;

/// The kind of data a column holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    Text,
    Integer,
}

impl ColumnKind {
    /// Arrow type a validated column of this kind is stored as.
    pub fn arrow_type(self) -> DataType {
        match self {
            ColumnKind::Text => DataType::Utf8,
            ColumnKind::Integer => DataType::Int64,
        }
    }

    /// Whether a column observed as `self` may be read as `declared`.
    /// Integers stringify, so they satisfy a text declaration; text never
    /// satisfies an integer one.
    pub fn satisfies(self, declared: ColumnKind) -> bool {
        match (self, declared) {
            (_, ColumnKind::Text) => true,
            (ColumnKind::Integer, ColumnKind::Integer) => true,
            (ColumnKind::Text, ColumnKind::Integer) => false,
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Text => f.write_str("text"),
            ColumnKind::Integer => f.write_str("integer"),
        }
    }
}

/// A single column of the input contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Column {
    pub name: &'static str,
    pub kind: ColumnKind,
}

impl Column {
    pub const fn new(name: &'static str, kind: ColumnKind) -> Self {
        Self { name, kind }
    }

    pub fn to_field(self) -> Field {
        Field::new(self.name, self.kind.arrow_type(), false)
    }
}

/// One validated row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub firstname: String,
    pub lastname: String,
    /// Kept verbatim, never parsed as a calendar date.
    pub date: String,
    pub division: i64,
    pub points: i64,
    pub summary: String,
}
