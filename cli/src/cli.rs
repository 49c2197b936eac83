use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use group_maker_core::{ExportFormat, GroupingMode};
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "group-maker")]
#[command(about = "Split a list of names into balanced groups")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate groups once and print or save them
    Generate {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print a share link for the given names and options
    Share {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long, help = "Page the link points at")]
        base_url: Url,
    },
    /// Generate groups from a share link
    Open {
        #[arg(help = "Share link produced by `share` or the web form")]
        url: Url,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Interactive generate / reshuffle / undo / redo loop on stdin
    Session {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args, Debug, Default)]
pub struct InputArgs {
    #[arg(long, short, help = "File with one name per line (default: stdin)")]
    pub input: Option<PathBuf>,
    #[arg(long, help = "JSON file with default options")]
    pub config: Option<PathBuf>,
    #[arg(long, value_enum, help = "Fix the group count or the group size")]
    pub mode: Option<ModeArg>,
    #[arg(long, short = 'g', help = "Number of groups (count mode)")]
    pub groups: Option<usize>,
    #[arg(long, short = 's', help = "Members per group (size mode)")]
    pub size: Option<usize>,
    #[arg(long, help = "Keep only the first occurrence of each name", default_value_t = false)]
    pub remove_duplicates: bool,
    #[arg(
        long,
        help = "Keep duplicate names even if the config removes them",
        default_value_t = false,
        conflicts_with = "remove_duplicates"
    )]
    pub no_remove_duplicates: bool,
    #[arg(long, help = "Trim names and drop blank lines", default_value_t = false)]
    pub trim_empty: bool,
    #[arg(
        long,
        help = "Keep names untrimmed even if the config trims them",
        default_value_t = false,
        conflicts_with = "trim_empty"
    )]
    pub no_trim_empty: bool,
    #[arg(long, help = "Seed for a reproducible shuffle")]
    pub seed: Option<String>,
}

#[derive(Args, Debug)]
pub struct OutputArgs {
    #[arg(long, short, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,
    #[arg(long, short, help = "Write to this file instead of stdout")]
    pub output: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeArg {
    Count,
    Size,
}

impl From<ModeArg> for GroupingMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Count => GroupingMode::Count,
            ModeArg::Size => GroupingMode::Size,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    Text,
    Csv,
    Json,
}

impl From<FormatArg> for ExportFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Text => ExportFormat::Text,
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Json => ExportFormat::Json,
        }
    }
}
