use std::path::PathBuf;

use clap::Parser;

/// Lists the commits of the current branch that are not on its parent branch
#[derive(Debug, Parser)]
#[clap(name = "git-newcommits", version)]
pub struct Args {
    /// Branch to compare against, inferred when omitted
    #[clap(short, long)]
    pub parent: Option<String>,
    #[clap(short, long, value_enum, default_value_t = Format::Oneline)]
    pub format: Format,
    #[clap(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,
    /// Oldest commit first
    #[clap(short, long, action)]
    pub reverse: bool,
    #[clap(long, action)]
    pub no_merges: bool,
    /// Limit the number of listed commits
    #[clap(short = 'n', long)]
    pub max_count: Option<usize>,
    /// Only print the number of new commits
    #[clap(short, long, action)]
    pub count: bool,
    /// Only print the parent branch
    #[clap(long, action, conflicts_with = "count")]
    pub print_parent: bool,
    /// Write the compared branches to stderr before listing
    #[clap(long, action)]
    pub show_parent: bool,
    /// Run as if started in this directory
    #[clap(short = 'C', long = "repo")]
    pub repo: Option<PathBuf>,
    #[clap(short, long, action)]
    pub debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Oneline,
    Short,
    Table,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}
