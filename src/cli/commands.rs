//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jielewe")]
#[command(about = "Feelings journal for kids", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Sentiment backend (huggingface, keyword)
        #[arg(short, long, default_value = "huggingface")]
        backend: String,
    },

    /// Find out how an entry feels and get activity ideas
    Analyze {
        /// Journal entry text (10-500 characters)
        text: String,

        /// Save the entry to the journal history
        #[arg(short, long)]
        save: bool,
    },

    /// Show saved entries, newest first
    History {
        /// Maximum number of entries to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Delete all saved entries
    Clear,

    /// Suggest activities for an emotion (positive, negative, neutral)
    Activities {
        emotion: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
