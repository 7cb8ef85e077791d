use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Build the project index grouped by venue and year.
    Index(IndexArgs),
    /// Show one project entry and its body.
    Show(ShowArgs),
    /// List content files that were left out of the index.
    Check(CheckArgs),
}

#[derive(Clone, Debug, Args)]
pub struct IndexArgs {
    /// Only include this venue (case-insensitive, e.g. cvpr).
    #[arg(long)]
    pub venue: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    /// Entry slug (file name without extension).
    pub slug: String,
}

#[derive(Clone, Debug, Args)]
pub struct CheckArgs {
    /// Exit with an error when any entry was skipped.
    #[arg(long)]
    pub strict: bool,
}
