use tally_config::TallyConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AuditArgs;
use crate::commands::shared::{audit_file, audit_settings};
use crate::output::output;

/// Handle `tally audit`.
pub fn handle(args: &AuditArgs, config: &TallyConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let settings = audit_settings(config, flags, args.rules.as_deref())?;
    let (_, result) = audit_file(&args.record, &settings)?;
    output(&result, flags.format)
}
