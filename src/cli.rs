use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Holonet: question answering over a Star Wars knowledge graph
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Answer Portuguese questions about Star Wars from a Neo4j knowledge graph"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive chat in the terminal
    Chat,

    /// Answer a single question
    Ask {
        /// Question (e.g., "Quantas naves Han Solo pilota?")
        question: String,
    },

    /// Show how a question is translated into Cypher, without a database
    Explain {
        /// Question to translate
        question: String,

        /// Print the translation as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the example questions
    Demo,

    /// Start the web chat
    #[cfg(feature = "http")]
    Serve {
        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(long, short, default_value = "5000")]
        port: u16,
    },

    /// Load the SQLite dataset into Neo4j
    Import {
        /// SQLite database (defaults to SQLITE_DB_PATH)
        #[arg(long)]
        sqlite: Option<PathBuf>,

        /// Keep the nodes already in the graph instead of clearing it first
        #[arg(long)]
        keep_existing: bool,
    },

    /// Summarize the SQLite dataset
    Inspect {
        /// SQLite database (defaults to SQLITE_DB_PATH)
        #[arg(long)]
        sqlite: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Sample rows to show per table
        #[arg(long, short, default_value = "0")]
        samples: usize,
    },
}
