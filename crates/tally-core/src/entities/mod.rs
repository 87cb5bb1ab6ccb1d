//! Entity structs for the Tally audit domain.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip
//! and schema export.

mod classification;
mod deficiency;
mod record;
mod result;

pub use classification::Classification;
pub use deficiency::Deficiency;
pub use record::IndividualRecord;
pub use result::AuditResult;
