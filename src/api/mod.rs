//! High-level library API: convert text, readers or resolved input sources
//! into Markdown lines, and write those lines out. Prefer these entrypoints
//! over calling `core::reader`/`core::formatter` directly.
use std::io::{Read, Write};

use tracing::info;

use crate::core::formatter::to_markdown;
use crate::core::params::ConvertOptions;
use crate::core::reader::{parse_table, read_table};
use crate::error::Result;
use crate::io::source::InputSource;

/// Convert in-memory delimited text.
pub fn convert_str(text: &str, options: &ConvertOptions) -> Result<Vec<String>> {
    let table = parse_table(text, options.delimiter, "input")?;
    Ok(to_markdown(&table, options))
}

/// Convert everything readable from `input`. `origin` names the stream in
/// error messages.
pub fn convert_reader<R: Read>(
    input: R,
    origin: &str,
    options: &ConvertOptions,
) -> Result<Vec<String>> {
    let table = read_table(input, options.delimiter, origin)?;
    Ok(to_markdown(&table, options))
}

/// Open `source` and convert its contents.
pub fn convert_source(source: &InputSource, options: &ConvertOptions) -> Result<Vec<String>> {
    let label = source.label();
    info!("Converting {}", label);
    let lines = convert_reader(source.open()?, &label, options)?;
    info!("Produced {} Markdown lines", lines.len());
    Ok(lines)
}

/// Write each line followed by a newline, then flush.
pub fn write_lines<W: Write>(mut out: W, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::Delimiter;

    #[test]
    fn test_convert_str_people() {
        let lines = convert_str("name,age\nAlice,30\nBob,25", &ConvertOptions::default()).unwrap();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "| --- | --- | ");
    }

    #[test]
    fn test_convert_reader_tab_aligned() {
        let options = ConvertOptions {
            delimiter: Delimiter::Tab,
            aligned: true,
            ..Default::default()
        };
        let lines = convert_reader("a\tbb\nc\tdd".as_bytes(), "stdin", &options).unwrap();
        assert_eq!(lines, vec!["| a | bb | ", "| --- | --- | ", "| c | dd | "]);
    }

    #[test]
    fn test_row_count_property() {
        let text = "h1,h2,h3\n1,2,3\n4,5,6\n7,8,9\n";
        let plain = convert_str(text, &ConvertOptions::default()).unwrap();
        assert_eq!(plain.len(), 4 + 1);

        let options = ConvertOptions {
            header: Some("Numbers".to_string()),
            ..Default::default()
        };
        assert_eq!(convert_str(text, &options).unwrap().len(), 4 + 1 + 2);
    }

    #[test]
    fn test_cells_recoverable_from_output() {
        let text = "city,country\n\"Paris, TX\",US\nLyon,FR\n";
        let lines = convert_str(text, &ConvertOptions::default()).unwrap();
        let cells: Vec<Vec<&str>> = lines
            .iter()
            .filter(|l| !l.starts_with("| ---"))
            .map(|l| {
                l.trim()
                    .trim_matches('|')
                    .split('|')
                    .map(str::trim)
                    .collect()
            })
            .collect();
        assert_eq!(
            cells,
            vec![
                vec!["city", "country"],
                vec!["Paris, TX", "US"],
                vec!["Lyon", "FR"],
            ]
        );
    }

    #[test]
    fn test_empty_input_yields_no_lines() {
        let options = ConvertOptions {
            header: Some("Ignored".to_string()),
            aligned: true,
            ..Default::default()
        };
        assert!(convert_str("", &options).unwrap().is_empty());
    }

    #[test]
    fn test_parse_error_names_origin() {
        let err = convert_reader("\"open".as_bytes(), "stdin", &ConvertOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
        assert!(err.to_string().starts_with("Failed to parse CSV from stdin"));
    }

    #[test]
    fn test_write_lines_newline_terminated() {
        let mut out = Vec::new();
        write_lines(&mut out, &["| a | ".to_string(), "| --- | ".to_string()]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "| a | \n| --- | \n");
    }
}
