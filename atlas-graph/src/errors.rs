//! Error types for atlas-graph.

/// Alias for Results returning [`AtlasGraphError`].
pub type Result<T> = std::result::Result<T, AtlasGraphError>;

/// Top-level error type for atlas-graph.
#[derive(Debug, thiserror::Error)]
pub enum AtlasGraphError {
    /// The store connection failed or a query could not be executed.
    #[error("Graph store error: {0}")]
    Store(#[from] neo4rs::Error),

    /// A store row was missing an expected column or property.
    #[error("Malformed store record: {0}")]
    Deserialization(#[from] neo4rs::DeError),

    #[error("Validation error: {0}")]
    Validation(String),
}
