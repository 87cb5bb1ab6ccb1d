use tally_config::TallyConfig;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `tally config`.
pub fn handle(config: &TallyConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(config, flags.format)
}
