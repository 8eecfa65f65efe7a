use std::io::BufRead;

use sort::Record;
use tracing::warn;
use vector::Vector;

use crate::{CliError, Result};

/// First token that could not be read as part of a `key value` pair.
#[derive(Debug, Eq, PartialEq)]
pub struct Malformed {
    pub line: usize,
    pub reason: String,
}

/// Reads whitespace-separated `key value` pairs until EOF.
///
/// A bad token ends the input: with `strict` it is an error, otherwise the
/// records read so far are returned and the stop is logged.
pub fn read_records<R: BufRead>(reader: R, reserve: usize, strict: bool) -> Result<Vector<Record>> {
    let mut records = Vector::new();
    records.reserve(reserve);

    let Some(bad) = read_until_malformed(reader, &mut records)? else {
        return Ok(records);
    };

    if strict {
        return Err(CliError::MalformedRecord {
            line: bad.line,
            reason: bad.reason,
        });
    }
    warn!(
        line = bad.line,
        reason = %bad.reason,
        kept = records.len(),
        "stopping at malformed record"
    );
    Ok(records)
}

fn read_until_malformed<R: BufRead>(
    mut reader: R,
    records: &mut Vector<Record>,
) -> Result<Option<Malformed>> {
    let mut pending_key: Option<(u32, usize)> = None;
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let Ok(line) = std::str::from_utf8(&buf) else {
            return Ok(Some(Malformed {
                line: line_no,
                reason: "invalid UTF-8".to_string(),
            }));
        };

        for token in line.split_whitespace() {
            match pending_key.take() {
                None => match token.parse::<u32>() {
                    Ok(key) => pending_key = Some((key, line_no)),
                    Err(err) => {
                        return Ok(Some(Malformed {
                            line: line_no,
                            reason: format!("key {token:?}: {err}"),
                        }));
                    }
                },
                Some((key, _)) => match token.parse::<u64>() {
                    Ok(payload) => records.push(Record::new(key, payload)),
                    Err(err) => {
                        return Ok(Some(Malformed {
                            line: line_no,
                            reason: format!("value {token:?}: {err}"),
                        }));
                    }
                },
            }
        }
    }

    Ok(pending_key.map(|(key, line)| Malformed {
        line,
        reason: format!("key {key} has no value"),
    }))
}
