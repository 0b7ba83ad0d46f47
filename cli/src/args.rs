use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "collabpath")]
#[command(about = "Find chains of collaborations between artists")]
pub struct Args {
    /// Dataset file: an artist name line, its song lines, then a `*` line, per artist
    pub dataset: PathBuf,

    /// Query script to run (reads standard input when omitted)
    pub commands: Option<PathBuf>,

    /// Write results to this file instead of standard output
    pub output: Option<PathBuf>,

    /// Print every stored collaboration before running queries
    #[arg(short = 'g', long)]
    pub print_graph: bool,

    /// Emit one JSON document per query instead of text
    #[arg(short, long)]
    pub json: bool,

    /// Verbose mode - show dataset and search statistics on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
