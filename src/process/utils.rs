/// A present cell, classified by what it can be read as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    Text(&'a str),
    Integer(i64),
}

impl<'a> Value<'a> {
    /// Integer if the cell (ignoring surrounding whitespace) fits in an `i64`,
    /// otherwise text.
    pub fn classify(raw: &'a str) -> Self {
        match parse_integer(raw) {
            Some(v) => Value::Integer(v),
            None => Value::Text(raw),
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }
}

/// 1) A cell is missing only when it is empty. Whitespace is a value.
pub fn is_missing(raw: &str) -> bool {
    raw.is_empty()
}

/// 2) Parse a cell as a 64-bit integer.
pub fn parse_integer(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}
