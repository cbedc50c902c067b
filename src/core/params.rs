use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::Delimiter;

/// Conversion settings, built once at startup and passed by reference into the
/// reader and formatter. Suitable for config files and presets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    pub delimiter: Delimiter,
    /// Text for a leading `# heading`; ignored when blank after trimming
    pub header: Option<String>,
    /// Pad every cell to the width of its column's widest cell
    pub aligned: bool,
    /// Rewrite `|` in cells as `\|`. Off by default, so a literal pipe
    /// splits the rendered cell.
    pub escape_pipes: bool,
}

impl ConvertOptions {
    /// Header text trimmed, or `None` when absent or blank.
    pub fn heading(&self) -> Option<&str> {
        self.header
            .as_deref()
            .map(str::trim)
            .filter(|h| !h.is_empty())
    }

    /// Load a preset from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
