use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Convert text to and from single-byte code pages (EBCDIC, extended ASCII).
#[derive(Debug, Parser)]
#[command(name = "codepage", about, version)]
pub struct Cli {
    /// Read table definitions from this directory instead of the bundled tables
    #[arg(long, global = true, value_name = "DIR")]
    pub tables: Option<PathBuf>,

    /// Log table builds and substitutions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the available code pages
    List {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Decode code page bytes into UTF-8 text
    Decode {
        /// Code page name (e.g. CP037)
        #[arg(short, long, value_name = "NAME")]
        encoding: String,

        /// Input file. Default: stdin
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Encode UTF-8 text into code page bytes
    Encode {
        /// Code page name (e.g. CP037)
        #[arg(short, long, value_name = "NAME")]
        encoding: String,

        /// Input file. Default: stdin
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Fail on the first character the code page cannot represent
        /// instead of substituting a space
        #[arg(long)]
        strict: bool,
    },

    /// Print the mappings a code page defines
    Table {
        /// Code page name (e.g. CP037)
        #[arg(value_name = "NAME")]
        name: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output format for listing subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
