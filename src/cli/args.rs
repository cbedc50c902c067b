use clap::Parser;
use std::path::PathBuf;

use csv2md::{ConvertOptions, Delimiter};

const EXAMPLES: &str = "\
Examples:
  csv2md example.csv               convert data from file and write result to stdout
  csv2md < example.csv             convert data from stdin and write result to stdout
  cat example.csv | csv2md         convert data from stdin and write result to stdout
  csv2md -t example.tsv            convert tab-separated data
  csv2md --header People -a x.csv  add a heading and align columns
  csv2md example.csv > example.md  write result to a new file
  csv2md                           paste or type data, then press Ctrl+D";

#[derive(Parser, Debug)]
#[command(
    name = "csv2md",
    version,
    about = "Convert CSV/TSV data into a Markdown table",
    after_help = EXAMPLES
)]
pub struct CliArgs {
    /// Input file; `~` expands to your home directory. Reads stdin when omitted
    pub file: Option<PathBuf>,

    /// Input is tab-separated instead of comma-separated
    #[arg(short, long, default_value_t = false)]
    pub tabs: bool,

    /// Emit `# <TEXT>` above the table
    #[arg(long, value_name = "TEXT")]
    pub header: Option<String>,

    /// Pad cells so every column has the width of its longest cell
    #[arg(short, long, default_value_t = false)]
    pub align: bool,

    /// Write `|` inside cells as `\|`
    #[arg(long, default_value_t = false)]
    pub escape_pipes: bool,

    /// Enable debug logging to stderr
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

impl CliArgs {
    /// A lone `help` argument asks for usage, as `-h` does.
    pub fn wants_help(&self) -> bool {
        self.file.as_deref().is_some_and(|f| f.as_os_str() == "help")
    }

    pub fn options(&self) -> ConvertOptions {
        ConvertOptions {
            delimiter: if self.tabs {
                Delimiter::Tab
            } else {
                Delimiter::Comma
            },
            header: self.header.clone(),
            aligned: self.align,
            escape_pipes: self.escape_pipes,
        }
    }
}
