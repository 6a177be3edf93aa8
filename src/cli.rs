use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::language::{Difficulty, Language};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate sentences and their answer keys
    Generate {
        /// Sentence language (en, th)
        #[arg(short, long, default_value = "en")]
        language: Language,

        /// Preferred difficulty (easy, medium, hard)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Number of sentences in the session
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// Skip the generator and use the built-in corpus only
        #[arg(long)]
        offline: bool,

        /// Print answer keys as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show part-of-speech labels and descriptions for a language
    Vocabulary {
        /// Label language (en, th)
        #[arg(short, long, default_value = "en")]
        language: Language,
    },

    /// Check that the generator endpoint and model are available
    Check,

    /// Write the default configuration to a file
    InitConfig {
        /// Output configuration file
        path: PathBuf,
    },
}
