use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `folio` binary.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "folio - research wiki project index")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Table colors: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Content directory (overrides `content.dir` from config)
    #[arg(short = 'C', long, global = true)]
    pub content_dir: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            color: self.color,
            quiet: self.quiet,
            verbose: self.verbose,
            content_dir: self.content_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["folio", "--format", "table", "--verbose", "index"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Index(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["folio", "check", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Check(ref args) if !args.strict));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["folio", "--format", "xml", "index"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn show_requires_slug() {
        assert!(Cli::try_parse_from(["folio", "show"]).is_err());
        let cli = Cli::try_parse_from(["folio", "show", "nerf"]).expect("cli should parse");
        assert!(matches!(cli.command, Commands::Show(ref args) if args.slug == "nerf"));
    }

    #[test]
    fn index_accepts_venue_filter() {
        let cli = Cli::try_parse_from(["folio", "index", "--venue", "cvpr"])
            .expect("cli should parse");
        assert!(matches!(cli.command, Commands::Index(ref args) if args.venue.as_deref() == Some("cvpr")));
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["folio", "-C", "/tmp/content", "check", "--strict"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.content_dir.as_deref(), Some("/tmp/content"));
    }
}
