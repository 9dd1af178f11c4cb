//! Neo4j graph driver implementation.
//!
//! Uses `neo4rs` 0.8 for async, pooled Bolt 4.x connections.

use async_trait::async_trait;
use neo4rs::{query, Graph};
use tracing::debug;

use super::GraphDriver;
use crate::records::RelationshipRecord;
use crate::types::GraphConfig;
use crate::Result;

/// Undirected pattern match on the node name; the post-filter over the
/// structural start node happens in the search core, not in Cypher.
const NEIGHBORHOOD_QUERY: &str = "
MATCH (node)-[relationship]-(related)
WHERE node.name = $name
RETURN startNode(relationship) AS start,
       endNode(relationship)   AS end,
       relationship            AS rel
";

/// Bolt-backed [`GraphDriver`] over a `neo4rs` connection pool.
pub struct Neo4jDriver {
    graph: Graph,
}

impl Neo4jDriver {
    /// Connect to the store described by `config`.
    ///
    /// Fails fast on an unreachable store or bad credentials; construct once
    /// at process start and share via `Arc`.
    pub async fn connect(config: &GraphConfig) -> Result<Self> {
        let graph =
            Graph::new(config.uri.as_str(), config.user.as_str(), config.password.as_str())
                .await?;
        Ok(Self { graph })
    }
}

#[async_trait]
impl GraphDriver for Neo4jDriver {
    async fn ping(&self) -> Result<()> {
        self.graph.run(query("RETURN 1")).await?;
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        // neo4rs tears the pool down on drop; nothing to flush for a
        // read-only workload.
        Ok(())
    }

    async fn incident_relationships(&self, name: &str) -> Result<Vec<RelationshipRecord>> {
        debug!(name = %name, "running neighborhood query");

        let mut stream = self
            .graph
            .execute(query(NEIGHBORHOOD_QUERY).param("name", name))
            .await?;

        let mut records = Vec::new();
        while let Some(row) = stream.next().await? {
            records.push(RelationshipRecord::from_row(&row)?);
        }

        debug!(name = %name, count = records.len(), "neighborhood query returned");
        Ok(records)
    }
}
