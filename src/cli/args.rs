//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum, ValueHint};

/// Look up a species, follow its evolution chain and render the stages as a card gallery
#[derive(Parser, Debug)]
#[command(name = "evochain")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Provider base URL (overrides config and environment)
    #[arg(long, global = true, value_hint = ValueHint::Url)]
    pub api_url: Option<String>,

    /// Config file (default: ~/.config/evochain/evochain.toml)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the evolution gallery of a species
    Show {
        /// Species name, e.g. "Mr. Mime"
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Write to file instead of stdout
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Print the evolution stages only
    Stages {
        /// Species name
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Show the evolution chain as tree
    Tree {
        /// Species name
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Print the provider identifier for a name
    Normalize {
        /// Free text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Look up species line by line from stdin
    Interactive,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show config path
    Path,
}

/// Gallery output format.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Html,
}

/// Join multi-word name arguments back into one string.
pub fn join_words(words: &[String]) -> String {
    words.join(" ")
}
