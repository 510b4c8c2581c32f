// error module
mod error;
// frontier module
mod frontier;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the search module.
//─────────────────────────────────────────────────────────────────────────────
pub use error::SearchError;
pub use frontier::{
    compute_shortest_paths, BoundedSearch, SearchOptions, SearchOutcome, SearchStats,
};
