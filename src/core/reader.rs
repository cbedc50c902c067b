//! Delimited-text reader: turns comma- or tab-separated input into a `Table`.
//!
//! Record splitting is done by the `csv` crate. That parser is lenient about
//! malformed quoting, so the buffered text goes through `check_quotes` first
//! and unterminated or stray quotes are reported with their position.
use std::io::Read;

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{Delimiter, Row, Table};

/// Read the whole stream into memory and parse it.
///
/// `origin` names the input in error messages (a file path or `stdin`).
pub fn read_table<R: Read>(mut input: R, delimiter: Delimiter, origin: &str) -> Result<Table> {
    let mut buf = Vec::new();
    input.read_to_end(&mut buf)?;
    debug!("Read {} bytes from {}", buf.len(), origin);

    let text = std::str::from_utf8(&buf).map_err(|e| {
        let valid = &buf[..e.valid_up_to()];
        let line = valid.iter().filter(|&&b| b == b'\n').count() as u64 + 1;
        Error::parse(origin, Some(line), "input is not valid UTF-8")
    })?;

    parse_table(text, delimiter, origin)
}

/// Parse already-buffered delimited text. Empty input yields an empty table.
pub fn parse_table(text: &str, delimiter: Delimiter, origin: &str) -> Result<Table> {
    if let Err(e) = check_quotes(text, delimiter) {
        return Err(Error::Parse {
            origin: origin.to_string(),
            line: Some(e.line),
            column: Some(e.column),
            message: e.message.to_string(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter.as_byte())
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows: Vec<Row> = Vec::new();
    for result in reader.records() {
        // Quoting and UTF-8 are already checked and `flexible` accepts ragged
        // rows, so this only fires on reader-level failures.
        let record = result.map_err(|e| {
            let line = e.position().map(|p| p.line());
            let message = match e.kind() {
                csv::ErrorKind::Io(err) => err.to_string(),
                csv::ErrorKind::Utf8 { err, .. } => err.to_string(),
                _ => e.to_string(),
            };
            Error::parse(origin, line, message)
        })?;
        rows.push(record.iter().map(normalize_newlines).collect());
    }

    debug!(
        "Parsed {} rows from {} ({} delimiter)",
        rows.len(),
        origin,
        delimiter
    );
    Ok(Table::new(rows))
}

/// Quoted cells keep their embedded line breaks as `\n`, even in CRLF input.
fn normalize_newlines(cell: &str) -> String {
    if cell.contains('\r') {
        cell.replace("\r\n", "\n")
    } else {
        cell.to_string()
    }
}

#[derive(Debug, PartialEq, Eq)]
struct QuoteError {
    line: u64,
    column: u64,
    message: &'static str,
}

/// Validate quote structure: a `"` may only open a field, a quoted field must
/// be closed, and a closing quote must be followed by a delimiter or line end.
/// Line and column are 1-based; columns count characters.
fn check_quotes(text: &str, delimiter: Delimiter) -> std::result::Result<(), QuoteError> {
    let delimiter = delimiter.as_byte() as char;
    let mut chars = text.chars().peekable();
    let mut line = 1u64;
    let mut column = 0u64;
    let mut at_field_start = true;
    let mut in_quotes = false;
    let mut after_closing_quote = false;
    let mut quote_start = (1u64, 1u64);

    while let Some(c) = chars.next() {
        column += 1;

        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    column += 1;
                }
                '"' => {
                    in_quotes = false;
                    after_closing_quote = true;
                }
                '\n' => {
                    line += 1;
                    column = 0;
                }
                _ => {}
            }
            continue;
        }

        if after_closing_quote {
            after_closing_quote = false;
            match c {
                '\r' if matches!(chars.peek(), Some(&'\n') | None) => continue,
                '\n' => {}
                c if c == delimiter => {}
                _ => {
                    return Err(QuoteError {
                        line,
                        column,
                        message: "extraneous character after closing quote",
                    });
                }
            }
        }

        match c {
            '"' if at_field_start => {
                in_quotes = true;
                at_field_start = false;
                quote_start = (line, column);
            }
            '"' => {
                return Err(QuoteError {
                    line,
                    column,
                    message: "bare \" in non-quoted field",
                });
            }
            '\n' => {
                line += 1;
                column = 0;
                at_field_start = true;
            }
            c if c == delimiter => at_field_start = true,
            _ => at_field_start = false,
        }
    }

    if in_quotes {
        return Err(QuoteError {
            line: quote_start.0,
            column: quote_start.1,
            message: "unterminated quoted field",
        });
    }
    Ok(())
}
