use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "lexitri")]
#[command(about = "Difficulty-tiered vocabulary dictionary builder for language learning")]
#[command(version)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Base directory holding the data files (default: current directory)
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the categorized dictionary from the harvested word mapping
    ///
    /// Runs by default when no subcommand is given.
    Build {
        /// Input mapping file (assetId -> text)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output dictionary file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Sample audio recordings and emit the word mapping
    Harvest {
        /// Directory scanned for .flac recordings
        #[arg(long)]
        audio_dir: Option<PathBuf>,

        /// Distribution directory for the sampled recordings
        #[arg(long)]
        sounds_dir: Option<PathBuf>,

        /// Output mapping file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Leave out every stride-th file of the sorted listing
        #[arg(long)]
        stride: Option<usize>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g., build.input)
        key: String,
    },

    /// Set a config value
    Set {
        /// Config key (e.g., build.input)
        key: String,

        /// Value to set
        value: String,
    },

    /// List all config keys
    List,

    /// Print the config file path
    Path,

    /// Write a default config template
    Init,
}
