use anyhow::Context;
use serde_json::json;
use tally_config::TallyConfig;
use tally_report::calendar::{CalendarModel, render_text, write_calendar_svg};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CalendarArgs;
use crate::commands::shared::{audit_file, audit_settings};
use crate::output::output;

/// Handle `tally calendar`.
///
/// Prints the text calendar regardless of `--format`; with `--svg` the file is
/// written and its path reported in the selected format.
pub fn handle(args: &CalendarArgs, config: &TallyConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let settings = audit_settings(config, flags, args.rules.as_deref())?;
    let (record, result) = audit_file(&args.record, &settings)?;

    let model = CalendarModel::build(
        &result,
        &record.filenames,
        config.audit.period_start,
        config.audit.horizon_end,
    );

    match &args.svg {
        Some(dir) => {
            let path = write_calendar_svg(&model, dir)
                .with_context(|| format!("failed to write calendar for {}", result.identifier))?;
            output(&json!({ "calendar": path }), flags.format)
        }
        None => {
            print!("{}", render_text(&model));
            Ok(())
        }
    }
}
