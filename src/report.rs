use std::io::{self, Write};

use crate::schema::Record;

/// Write the report: a `records:` line, then two lines per record.
pub fn render<W: Write>(records: &[Record], out: &mut W) -> io::Result<()> {
    writeln!(out, "records:")?;
    for record in records {
        write_entry(record, out)?;
    }
    Ok(())
}

fn write_entry<W: Write>(record: &Record, out: &mut W) -> io::Result<()> {
    writeln!(out, "- name: {} {}", record.firstname, record.lastname)?;
    writeln!(
        out,
        "  details: In division {} from {} performing {}",
        record.division, record.date, record.summary
    )
}
