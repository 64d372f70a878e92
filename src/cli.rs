use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docshelf")]
#[command(about = "Browse and search locally installed API documentation", long_about = None)]
pub struct Cli {
    /// Documentation roots to scan instead of the default locations.
    #[arg(long = "root", global = true, value_name = "DIR")]
    pub roots: Vec<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the browse hierarchy.
    Tree,
    /// Fuzzy-search every entry and print the ranked hits.
    Search {
        query: String,
        #[arg(short = 'n', long, default_value = "25")]
        limit: usize,
    },
    /// Print the structural path and absolute row of a uri.
    Resolve { uri: String },
}
