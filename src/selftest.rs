use std::{
    fs,
    io::{self, Write},
    path::Path,
};
use tracing::{debug, warn};

use crate::config::ReportConfig;
use crate::fixtures::{self, Fixture};
use crate::pipeline::run_with;

/// Outcome of a self-test run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelfTestSummary {
    pub passed: usize,
    pub failed: Vec<String>,
}

impl SelfTestSummary {
    pub fn success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Run every built-in fixture through the pipeline, plus a nonexistent path,
/// and write one status line per case to `out`.
pub fn run_all<W: Write>(out: &mut W) -> io::Result<SelfTestSummary> {
    let dir = tempfile::tempdir()?;
    let mut summary = SelfTestSummary::default();

    for (idx, fixture) in fixtures::ALL.iter().enumerate() {
        let path = dir.path().join(format!("testdata-{}.csv", idx));
        fs::write(&path, fixture.content)?;
        let ok = check(&path, fixture);
        record(out, &mut summary, fixture.name, ok)?;
    }

    let missing = dir.path().join("garbage").join("path");
    let ok = check(&missing, &Fixture::new("invalid filepath", "", false, 0));
    record(out, &mut summary, "invalid filepath", ok)?;

    writeln!(
        out,
        "{} passed; {} failed",
        summary.passed,
        summary.failed.len()
    )?;
    Ok(summary)
}

fn check(path: &Path, fixture: &Fixture) -> bool {
    let mut buf = Vec::new();
    let succeeded = run_with(path, &ReportConfig::default(), &mut buf);
    let output = String::from_utf8_lossy(&buf);
    debug!(case = fixture.name, %output, "self-test output");

    if succeeded != fixture.succeeds {
        warn!(case = fixture.name, succeeded, "unexpected outcome");
        return false;
    }
    if !succeeded {
        return !output.contains("records:");
    }
    let entries = output.lines().filter(|l| l.starts_with("- name: ")).count();
    if entries != fixture.entries {
        warn!(case = fixture.name, entries, expected = fixture.entries, "unexpected entry count");
        return false;
    }
    true
}

fn record<W: Write>(
    out: &mut W,
    summary: &mut SelfTestSummary,
    name: &str,
    ok: bool,
) -> io::Result<()> {
    if ok {
        summary.passed += 1;
        writeln!(out, "---- {} ... ok", name)
    } else {
        summary.failed.push(name.to_string());
        writeln!(out, "---- {} ... FAILED", name)
    }
}
