#![doc = r#"
csv2md — convert comma- or tab-separated data into Markdown tables.

The crate powers the `csv2md` command-line tool and can be embedded in your
own Rust applications. Input is read completely into memory, parsed into a
[`Table`], and rendered as a list of Markdown lines.

Quick start: convert a string
-----------------------------
```rust
use csv2md::{convert_str, ConvertOptions};

fn main() -> csv2md::Result<()> {
    let lines = convert_str("name,age\nAlice,30\nBob,25", &ConvertOptions::default())?;
    assert_eq!(lines[0], "| name | age | ");
    assert_eq!(lines[1], "| --- | --- | ");
    Ok(())
}
```

Convert a file with a heading and aligned columns
-------------------------------------------------
```rust,no_run
use std::path::Path;
use csv2md::{convert_source, write_lines, ConvertOptions, Delimiter, InputSource};

fn main() -> csv2md::Result<()> {
    let options = ConvertOptions {
        delimiter: Delimiter::Tab,
        header: Some("People".to_string()),
        aligned: true,
        escape_pipes: false,
    };
    let source = InputSource::resolve(Some(Path::new("~/people.tsv")))?;
    let lines = convert_source(&source, &options)?;
    write_lines(std::io::stdout().lock(), &lines)
}
```

Error handling
--------------
All fallible functions return `csv2md::Result<T>`; match on `csv2md::Error`
to tell path, file, parse and I/O failures apart.

Pipe characters
---------------
Cells are written verbatim by default, so a literal `|` in the data splits
the rendered cell. Set `ConvertOptions::escape_pipes` to write `\|` instead.

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — the reader, the formatter and `ConvertOptions`.
- [`io`] — input source resolution (`~` expansion, stdin).
- [`types`] — `Table`, `Row` and `Delimiter`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::formatter::{ColumnWidths, to_markdown};
pub use crate::core::params::ConvertOptions;
pub use crate::core::reader::{parse_table, read_table};
pub use crate::error::{Error, Result};
pub use crate::io::source::{InputSource, expand_path};
pub use crate::types::{Delimiter, Row, Table};

pub use crate::api::{convert_reader, convert_source, convert_str, write_lines};
