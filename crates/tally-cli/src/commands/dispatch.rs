use tally_config::TallyConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, config: &TallyConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Run(args) => commands::run::handle(&args, config, flags),
        Commands::Audit(args) => commands::audit::handle(&args, config, flags),
        Commands::Classify(args) => commands::classify::handle(&args, flags),
        Commands::Calendar(args) => commands::calendar::handle(&args, config, flags),
        Commands::Config => commands::config::handle(config, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
