use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::SessionType;

/// Outcome of checking one filename against one session type's naming convention.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Classification {
    pub filename: String,
    pub session_type: SessionType,
    /// Marker, dated suffix, and `.docx` extension all present, and the date is real.
    pub is_valid: bool,
    /// First `YYYY-MM-DD` substring, when it is a real calendar date.
    pub date: Option<NaiveDate>,
}
