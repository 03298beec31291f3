use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "glyphwatch",
    version,
    about = "Flags control codes, zero-width and non-ASCII characters hidden in text"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// Config file to use instead of ./glyphwatch.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze files; directories are walked recursively
    Scan {
        #[arg(value_name = "PATH")]
        paths: Vec<PathBuf>,
        /// Also read text from stdin
        #[arg(long)]
        stdin: bool,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Analyze text given on the command line
    Text {
        #[arg(value_name = "TEXT")]
        text: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Browse the analysis of one file interactively
    #[cfg(feature = "tui")]
    View {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Write a default glyphwatch.toml
    Init,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Only list suspicious rows in the frequency table
    #[arg(long, short)]
    pub suspicious_only: bool,
    /// Disable colours; suspicious characters are wrapped in markers instead
    #[arg(long)]
    pub no_color: bool,
    /// Exit with code 3 when anything suspicious is found
    #[arg(long)]
    pub strict: bool,
}
