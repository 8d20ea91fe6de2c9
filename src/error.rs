use thiserror::Error;

/// Errors produced while querying, shaping or rendering a graph
#[derive(Debug, Error)]
pub enum VizError {
    #[error("failed to connect to Neo4j: {0}")]
    Connection(String),

    #[error("query failed: {0}")]
    Query(String),

    #[error("node {reference} has no labels; every visualized node needs at least one")]
    MissingLabel { reference: String },

    #[error("malformed node reference '{0}', expected '<kind>/<id>'")]
    MalformedReference(String),

    #[error("malformed result row: {0}")]
    MalformedRow(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VizError>;
