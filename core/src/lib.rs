pub mod artist;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod traversal;

// Re-export commonly used items
pub use artist::Artist;
pub use dataset::{build_graph, load_artists, load_graph, parse_artists};
pub use error::{DatasetError, GraphError};
pub use graph::{CollabGraph, VertexId};
pub use traversal::{CollabSearch, PathStep, QueryOutcome, QueryResult, write_outcome};
