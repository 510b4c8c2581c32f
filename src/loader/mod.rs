// error module
pub mod error;
// loader module
#[allow(clippy::module_inception)]
mod loader;

pub use error::LoaderError;
pub use loader::{demo_graph, graph_from_connections, load_graph_from_file, parse_edge_list};
