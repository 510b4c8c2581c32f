// error module
mod error;
// walk module
mod walk;

// report module
pub mod report;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the path module.
//─────────────────────────────────────────────────────────────────────────────
pub use error::PathError;
pub use report::write_paths_report;
pub use walk::Path;
