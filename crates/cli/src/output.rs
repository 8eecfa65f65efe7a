use std::io::{self, Write};
use std::time::Duration;

use sort::Record;

use crate::cli::TimeUnit;

/// `KEY\tPAYLOAD`, key zero-padded to `width`.
#[inline]
pub fn write_record<W: Write>(out: &mut W, record: &Record, width: usize) -> io::Result<()> {
    writeln!(out, "{:0width$}\t{}", record.key, record.payload)
}

pub fn write_records<W: Write>(out: &mut W, records: &[Record], width: usize) -> io::Result<()> {
    for record in records {
        write_record(out, record, width)?;
    }
    Ok(())
}

pub fn format_elapsed(elapsed: Duration, unit: TimeUnit) -> String {
    format!("{}{}", unit.count(elapsed), unit.suffix())
}
