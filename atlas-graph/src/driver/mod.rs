//! Graph database driver abstraction.
//!
//! Defines the [`GraphDriver`] trait that all backend implementations must
//! satisfy, plus the Neo4j implementation.

pub mod neo4j;

pub use neo4j::Neo4jDriver;

use async_trait::async_trait;

use crate::records::RelationshipRecord;
use crate::Result;

/// Trait representing a graph database backend.
///
/// The server holds an `Arc<dyn GraphDriver>`: the concrete store is injected
/// at startup and the search core never sees connection details. Object safety
/// (via `async_trait`) is what lets tests substitute an in-memory fake.
#[async_trait]
pub trait GraphDriver: Send + Sync {
    /// Health check — verify connectivity to the database.
    async fn ping(&self) -> Result<()>;

    /// Close the connection pool / session.
    async fn close(&self) -> Result<()>;

    /// Fetch every relationship incident to a node whose `name` property
    /// equals `name`, with structural endpoints resolved.
    ///
    /// Direction-agnostic at the store level; callers apply their own
    /// direction filtering. Row order is the store's return order.
    async fn incident_relationships(&self, name: &str) -> Result<Vec<RelationshipRecord>>;
}
