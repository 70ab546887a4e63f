//! Converter settings, loadable from a JSON file.

use crate::{Result, TextGraphError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Converter configuration. Zero disables a limit; `None` keeps the default palette.
///
/// ```json
/// { "max_width": 120, "max_height": 60, "max_ratio": 4.0, "palette": "#$@%*+-'" }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub max_width: u32,
    pub max_height: u32,
    pub max_ratio: f64,
    pub palette: Option<String>,
}

impl Settings {
    /// Read settings from `path`, or return defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .map_err(|e| TextGraphError::Config(format!("{}: {e}", path.display())))?;
        let settings: Settings = serde_json::from_str(&text)
            .map_err(|e| TextGraphError::Config(format!("{}: {e}", path.display())))?;
        log::debug!("loaded settings from {}", path.display());
        Ok(settings)
    }
}
