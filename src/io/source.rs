use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// Where the delimited text is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    /// Absolute path, already expanded
    File(PathBuf),
}

impl InputSource {
    /// Build a source from an optional CLI path. `None` means stdin; a path is
    /// expanded with [`expand_path`].
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            None => Ok(InputSource::Stdin),
            Some(path) => Ok(InputSource::File(expand_path(path)?)),
        }
    }

    /// Name used in log lines and parse errors.
    pub fn label(&self) -> String {
        match self {
            InputSource::Stdin => "stdin".to_string(),
            InputSource::File(path) => format!("file '{}'", path.display()),
        }
    }

    /// Open the source for reading. Files must exist and be regular files.
    pub fn open(&self) -> Result<Box<dyn Read>> {
        match self {
            InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
            InputSource::File(path) => {
                let file_access = |source| Error::FileAccess {
                    path: path.clone(),
                    source,
                };
                let metadata = std::fs::metadata(path).map_err(file_access)?;
                if metadata.is_dir() {
                    return Err(file_access(io::Error::other("is a directory")));
                }
                let file = File::open(path).map_err(file_access)?;
                debug!("Opened {} ({} bytes)", path.display(), metadata.len());
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

/// Expand a leading `~` to the user's home directory and make the path
/// absolute against the current working directory.
pub fn expand_path(path: &Path) -> Result<PathBuf> {
    let expanded = expand_tilde(path, dirs::home_dir)?;
    std::path::absolute(&expanded).map_err(|e| Error::PathResolution {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Only `~` as the whole first component is expanded; `~user` is left alone.
fn expand_tilde<F>(path: &Path, home_dir: F) -> Result<PathBuf>
where
    F: FnOnce() -> Option<PathBuf>,
{
    let Ok(rest) = path.strip_prefix("~") else {
        return Ok(path.to_path_buf());
    };
    let home = home_dir().ok_or_else(|| Error::PathResolution {
        path: path.display().to_string(),
        reason: "home directory could not be determined".to_string(),
    })?;
    Ok(if rest.as_os_str().is_empty() {
        home
    } else {
        home.join(rest)
    })
}
