//! Report output toggles.

use serde::{Deserialize, Serialize};

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Write an SVG calendar per individual during `tally run`.
    #[serde(default = "default_true")]
    pub calendars: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { calendars: true }
    }
}
