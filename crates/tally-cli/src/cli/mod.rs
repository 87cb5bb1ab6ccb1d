use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `tally` binary.
#[derive(Debug, Parser)]
#[command(
    name = "tally",
    version,
    about = "Tally - weekly therapy documentation audits"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project directory holding `.tally/config.toml` and `.env`
    #[arg(short = 'C', long, global = true)]
    pub config_dir: Option<PathBuf>,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            config_dir: self.config_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;
    use tally_core::enums::SessionType;

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["tally", "--format", "table", "--verbose", "config"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Config));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["tally", "config", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["tally", "--format", "xml", "config"]).is_err());
    }

    #[test]
    fn run_accepts_path_overrides() {
        let cli = Cli::try_parse_from([
            "tally",
            "run",
            "--rules",
            "rules.json",
            "--records",
            "logs",
            "--output",
            "out",
            "--no-calendars",
        ])
        .expect("cli should parse");

        let Commands::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.rules.as_deref(), Some(Path::new("rules.json")));
        assert_eq!(args.records.as_deref(), Some(Path::new("logs")));
        assert_eq!(args.output.as_deref(), Some(Path::new("out")));
        assert!(args.no_calendars);
    }

    #[test]
    fn classify_takes_many_names_and_session_type() {
        let cli = Cli::try_parse_from([
            "tally",
            "classify",
            "A IT 2024-01-02.docx",
            "notes.txt",
            "--session-type",
            "it",
        ])
        .expect("cli should parse");

        let Commands::Classify(args) = cli.command else {
            panic!("expected classify");
        };
        assert_eq!(args.filenames.len(), 2);
        assert_eq!(args.session_type, SessionType::Individual);
    }

    #[test]
    fn classify_defaults_to_group() {
        let cli = Cli::try_parse_from(["tally", "classify", "x.docx"]).expect("cli should parse");
        let Commands::Classify(args) = cli.command else {
            panic!("expected classify");
        };
        assert_eq!(args.session_type, SessionType::Group);
    }

    #[test]
    fn config_dir_resolves_relative_paths() {
        let cli = Cli::try_parse_from(["tally", "-C", "/srv/unit", "config"])
            .expect("cli should parse");
        let flags = cli.global_flags();

        assert_eq!(
            flags.resolve(Path::new("data/raw_logs")),
            PathBuf::from("/srv/unit/data/raw_logs")
        );
        assert_eq!(flags.resolve(Path::new("/abs")), PathBuf::from("/abs"));
    }
}
