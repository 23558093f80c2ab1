use std::{
    io::{self, Write},
    path::Path,
};
use tracing::{error, info};

use crate::config::ReportConfig;
use crate::error::ReportError;
use crate::process::load_table;
use crate::rank::rank;
use crate::report::render;
use crate::schema::{validate, Record};

/// Load, validate and rank `path`, returning the records to report.
pub fn execute<P: AsRef<Path>>(path: P, config: &ReportConfig) -> Result<Vec<Record>, ReportError> {
    let table = load_table(path, config)?;
    let validated = validate(&table)?;
    let records = validated.records()?;
    let ranked = rank(records);
    info!(kept = ranked.len(), of = validated.num_rows(), "ranked records");
    Ok(ranked)
}

/// Run the whole pipeline on `path`, writing the report (or a single
/// diagnostic line) to `out`. Returns whether the run succeeded.
pub fn run_with<P: AsRef<Path>, W: Write>(path: P, config: &ReportConfig, out: &mut W) -> bool {
    let path = path.as_ref();
    let records = match execute(path, config) {
        Ok(records) => records,
        Err(err) => {
            error!(path = %path.display(), "{}", err);
            if let Err(io_err) = writeln!(out, "{}", err) {
                error!("writing diagnostic failed: {}", io_err);
            }
            return false;
        }
    };

    match render(&records, out).and_then(|()| out.flush()) {
        Ok(()) => true,
        Err(err) => {
            error!(path = %path.display(), "writing report failed: {}", err);
            false
        }
    }
}

/// [`run_with`] using the default config and standard output.
pub fn run<P: AsRef<Path>>(path: P) -> bool {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(path, &ReportConfig::default(), &mut out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut tmp = NamedTempFile::new().expect("create temp file");
        tmp.write_all(content.as_bytes()).expect("write temp file");
        tmp
    }

    fn run_to_string(path: &Path) -> (bool, String) {
        let mut buf = Vec::new();
        let ok = run_with(path, &ReportConfig::default(), &mut buf);
        (ok, String::from_utf8(buf).expect("utf8 output"))
    }

    fn entries(output: &str) -> usize {
        output.lines().filter(|l| l.starts_with("- name: ")).count()
    }

    #[test]
    fn canonical_scenario() {
        let tmp = write_csv(fixtures::SCENARIO);
        let (ok, output) = run_to_string(tmp.path());
        assert!(ok);
        assert_eq!(
            output,
            "records:\n\
             - name: Cy Ng\n  \
             details: In division 1 from 2021-01-03 performing swam\n\
             - name: Bo Smith\n  \
             details: In division 1 from 2021-01-02 performing jumped\n\
             - name: Ann Lee\n  \
             details: In division 2 from 2021-01-01 performing ran\n"
        );
    }

    #[test]
    fn missing_file_prints_only_a_diagnostic() {
        let (ok, output) = run_to_string(Path::new("garbage/path"));
        assert!(!ok);
        assert_eq!(output.lines().count(), 1);
        assert!(output.contains("not found"));
        assert!(output.contains("garbage/path"));
        assert!(!output.contains("records:"));
    }

    #[test]
    fn wrong_columns_fail() {
        let tmp = write_csv(fixtures::WRONG_COLUMNS);
        let (ok, output) = run_to_string(tmp.path());
        assert!(!ok);
        assert!(output.contains("schema mismatch"));
        assert!(!output.contains("records:"));
    }

    #[test]
    fn string_points_fail() {
        let tmp = write_csv(fixtures::STRING_POINTS);
        let (ok, output) = run_to_string(tmp.path());
        assert!(!ok);
        assert!(output.contains("type mismatch"));
        assert!(output.contains("\"points\""));
    }

    #[test]
    fn row_counts_are_capped_at_three() {
        let tmp = write_csv(fixtures::FIVE_ROWS);
        let (ok, output) = run_to_string(tmp.path());
        assert!(ok);
        assert_eq!(entries(&output), 3);

        let tmp = write_csv(fixtures::TWO_ROWS);
        let (ok, output) = run_to_string(tmp.path());
        assert!(ok);
        assert_eq!(entries(&output), 2);
    }

    #[test]
    fn header_only_prints_records_line() {
        let tmp = write_csv(fixtures::HEADER_ONLY);
        let (ok, output) = run_to_string(tmp.path());
        assert!(ok);
        assert_eq!(output, "records:\n");
    }

    #[test]
    fn whitespace_points_fail() {
        let tmp = write_csv(fixtures::BLANK_POINTS);
        let (ok, output) = run_to_string(tmp.path());
        assert!(!ok);
        assert_eq!(output.lines().count(), 1);
        assert!(output.contains("type mismatch"));
        assert!(output.contains("\"points\""));
        assert!(!output.contains("records:"));
    }

    #[test]
    fn no_complete_rows_prints_records_line() {
        let tmp = write_csv(fixtures::ALL_MISSING);
        let (ok, output) = run_to_string(tmp.path());
        assert!(ok);
        assert_eq!(output, "records:\n");
    }

    #[test]
    fn missing_cells_are_excluded() {
        let tmp = write_csv(fixtures::MISSING_TEXT);
        let (ok, output) = run_to_string(tmp.path());
        assert!(ok);
        assert_eq!(entries(&output), 2);
        assert!(!output.contains("Dee"));

        // missing numeric cells are dropped before the kind check, so they pass
        let tmp = write_csv(fixtures::MISSING_NUMBERS);
        let (ok, output) = run_to_string(tmp.path());
        assert!(ok);
        assert_eq!(entries(&output), 1);
    }

    #[test]
    fn numeric_names_are_text() {
        let tmp = write_csv(fixtures::NUMERIC_NAMES);
        let (ok, output) = run_to_string(tmp.path());
        assert!(ok);
        assert!(output.contains("- name: 0.1 Lee\n"));
    }

    #[test]
    fn reruns_are_byte_identical() {
        let tmp = write_csv(fixtures::FIVE_ROWS);
        let (_, first) = run_to_string(tmp.path());
        let (_, second) = run_to_string(tmp.path());
        assert_eq!(first, second);
    }

    #[test]
    fn execute_returns_ranked_records() -> Result<(), ReportError> {
        let tmp = write_csv(fixtures::SCENARIO);
        let records = execute(tmp.path(), &ReportConfig::default())?;
        let names: Vec<_> = records.iter().map(|r| r.firstname.as_str()).collect();
        assert_eq!(names, vec!["Cy", "Bo", "Ann"]);
        Ok(())
    }
}
