//! Neighborhood search.
//!
//! Translates a node name into a star-shaped neighborhood payload: the center
//! node, its direct neighbors, and the connecting edges, shaped for a
//! force-directed visualization client.

use serde::{Deserialize, Serialize};

use crate::driver::GraphDriver;
use crate::records::RelationshipRecord;
use crate::Result;

/// A vertex in the visualization payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: i64,
    pub label: String,
}

/// An edge in the visualization payload. `source`/`target` reference
/// [`GraphNode::id`] values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphLink {
    pub source: i64,
    pub target: i64,
    pub label: String,
}

/// The assembled star-shaped neighborhood of one center node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighborhood {
    pub center: GraphNode,
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

/// Search the store for the neighborhood of the node named `name`.
///
/// Runs one traversal query, then a single pass over the returned records.
/// `Ok(None)` means no relationship starts at a node with that exact name —
/// a valid "no data" outcome, not an error. Store and deserialization
/// failures propagate; no retries.
pub async fn precise_search(
    driver: &dyn GraphDriver,
    name: &str,
) -> Result<Option<Neighborhood>> {
    let records = driver.incident_relationships(name).await?;
    Ok(assemble_neighborhood(name, &records))
}

/// Assemble the neighborhood payload from relationship records.
///
/// Only relationships whose *structural start node* is named `name`
/// contribute; a relationship pointing AT the queried node is invisible to
/// this search. That one-sidedness keeps the traversal to a single undirected
/// pattern match with a post-filter, at the cost of completeness.
///
/// The center is captured from the first passing record and appended to
/// `nodes` exactly once. Neighbor entries are NOT deduplicated: two
/// relationships to the same neighbor yield two node entries, one per link,
/// and the rendering layer relies on that pairing.
pub fn assemble_neighborhood(
    name: &str,
    records: &[RelationshipRecord],
) -> Option<Neighborhood> {
    let mut center: Option<GraphNode> = None;
    let mut nodes = Vec::new();
    let mut links = Vec::new();

    for record in records {
        if record.start.name != name {
            continue;
        }

        if center.is_none() {
            let node = GraphNode {
                id: record.start.id,
                label: record.start.name.clone(),
            };
            nodes.push(node.clone());
            center = Some(node);
        }

        nodes.push(GraphNode {
            id: record.end.id,
            label: record.end.name.clone(),
        });
        links.push(GraphLink {
            source: record.start.id,
            target: record.end.id,
            label: record.name.clone(),
        });
    }

    center.map(|center| Neighborhood {
        center,
        nodes,
        links,
    })
}
