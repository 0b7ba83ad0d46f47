use thiserror::Error;

/// Structural violations raised at the graph boundary.
///
/// These are caller errors. "Artist not found" and "no path" are ordinary
/// query outcomes and never show up here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("cannot insert an artist with an empty name")]
    InvalidArtist,

    #[error("the empty string is not a valid edge label")]
    InvalidEdgeLabel,

    #[error("cannot insert an edge between \"{0}\" and itself")]
    SelfLoop(String),

    #[error("artist \"{0}\" does not exist in the collaboration graph")]
    UnknownVertex(String),
}

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("could not read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid dataset record: {0}")]
    Graph(#[from] GraphError),
}
