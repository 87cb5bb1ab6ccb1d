use tally_core::entities::Classification;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ClassifyArgs;
use crate::output::output;

/// Handle `tally classify`.
pub fn handle(args: &ClassifyArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let classifications: Vec<Classification> = args
        .filenames
        .iter()
        .map(|name| tally_engine::classify_as(name, args.session_type))
        .collect();
    output(&classifications, flags.format)
}
