use anyhow::bail;
use schemars::schema_for;
use serde_json::Value;
use tally_core::entities::{AuditResult, Classification, Deficiency, IndividualRecord};
use tally_core::responses::{RunReport, SummaryRow};

use crate::cli::root_commands::SchemaArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Names accepted by `tally schema`, in help order.
pub const SCHEMA_NAMES: [&str; 6] = [
    "record",
    "audit_result",
    "deficiency",
    "summary_row",
    "run_report",
    "classification",
];

/// JSON schema for a named input or output type.
#[must_use]
pub fn schema(name: &str) -> Option<Value> {
    let schema = match name {
        "record" => schema_for!(IndividualRecord),
        "audit_result" => schema_for!(AuditResult),
        "deficiency" => schema_for!(Deficiency),
        "summary_row" => schema_for!(SummaryRow),
        "run_report" => schema_for!(RunReport),
        "classification" => schema_for!(Classification),
        _ => return None,
    };
    Some(schema.to_value())
}

/// Handle `tally schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(schema) = schema(&args.type_name) else {
        bail!(
            "unknown schema '{}' (expected one of: {})",
            args.type_name,
            SCHEMA_NAMES.join(", ")
        );
    };

    // Schemas are documents, not rows; only raw changes the layout.
    let format = match flags.format {
        OutputFormat::Raw => OutputFormat::Raw,
        OutputFormat::Json | OutputFormat::Table => OutputFormat::Json,
    };
    output(&schema, format)
}
