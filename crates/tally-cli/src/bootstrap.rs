use anyhow::Context;
use tally_config::TallyConfig;

use crate::cli::GlobalFlags;

pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<TallyConfig> {
    if let Some(dir) = &flags.config_dir {
        anyhow::ensure!(
            dir.is_dir(),
            "invalid --config-dir '{}': directory does not exist",
            dir.display()
        );
    }

    TallyConfig::load_with_dotenv(flags.config_dir.as_deref())
        .context("failed to load tally configuration")
}
