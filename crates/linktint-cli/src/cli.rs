use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Recolor and inspect the text under hyperlink rectangles in decomposed
/// page dumps.
#[derive(Debug, Parser)]
#[command(name = "linktint", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Recolor the text under each hyperlink rectangle
    Recolor {
        /// Path to the JSON page dump
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Fill color: '#rrggbb' hex or 'r,g,b' floats in [0,1]
        #[arg(long, default_value = "#1a0dab")]
        color: String,

        /// Page range (e.g. '1,3-5'). Default: all pages
        #[arg(long)]
        pages: Option<String>,

        /// Write the mutated dump to this file instead of stdout
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// List hyperlinks with the text found under each rectangle
    Links {
        /// Path to the JSON page dump
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Page range (e.g. '1,3-5'). Default: all pages
        #[arg(long)]
        pages: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output format for the links subcommand.
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Plain text (tab-separated)
    Text,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}
