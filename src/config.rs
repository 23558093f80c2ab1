/// Knobs for a single report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Field separator byte handed to the CSV reader.
    pub delimiter: u8,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl ReportConfig {
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}
