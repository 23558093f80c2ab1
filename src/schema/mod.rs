pub mod types;
pub mod validate;

pub use types::{Column, ColumnKind, Record};
pub use validate::{infer_kind, validate, ValidatedTable};

/// The fixed input contract: names, order and kinds of the leading columns.
pub const CONTRACT: [Column; 6] = [
    Column::new("firstname", ColumnKind::Text),
    Column::new("lastname", ColumnKind::Text),
    Column::new("date", ColumnKind::Text),
    Column::new("division", ColumnKind::Integer),
    Column::new("points", ColumnKind::Integer),
    Column::new("summary", ColumnKind::Text),
];

/// Contract column names, in order.
pub fn contract_names() -> Vec<String> {
    CONTRACT.iter().map(|c| c.name.to_string()).collect()
}
