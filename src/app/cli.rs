use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Finds all paths between two nodes of a weighted undirected graph within a length tolerance of the shortest one.", long_about = None)]
pub struct Cli {
    /// Edge-list file, one `<a> <b> <length>` edge per line
    #[clap(required_unless_present = "demo")]
    pub graph_file: Option<PathBuf>,

    /// Use the built-in four-node demo graph instead of a file
    #[clap(long, conflicts_with = "graph_file")]
    pub demo: bool,

    /// Start node id
    #[clap(short, long)]
    pub start: i64,

    /// End node id
    #[clap(short, long)]
    pub end: i64,

    /// Maximum length ratio to the shortest path (>= 1.0)
    #[clap(short, long, default_value_t = 1.0)]
    pub tolerance: f64,

    /// Abort the search after this many expansion rounds
    #[clap(long)]
    pub max_rounds: Option<usize>,

    /// Abort the search once the frontier holds more paths than this
    #[clap(long)]
    pub max_frontier: Option<usize>,

    /// Expand frontier paths in parallel
    #[clap(long)]
    pub parallel: bool,

    /// Write the path report to this file instead of stdout
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress verbose output, only printing the report or errors.
    #[clap(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn search_options(&self) -> crate::search::SearchOptions {
        crate::search::SearchOptions {
            max_rounds: self.max_rounds,
            max_frontier: self.max_frontier,
            parallel: self.parallel,
        }
    }
}
