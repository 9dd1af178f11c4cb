//! Typed wire records deserialized from graph-store rows.
//!
//! The store is schemaless; these types pin down the two shapes the search
//! core relies on. A row missing an expected column or `name` property fails
//! deserialization up front rather than producing a partial payload.

use neo4rs::{Node, Relation, Row};

use crate::Result;

/// A vertex as returned by the store.
///
/// `id` is the store-assigned identity: stable within one store instance, but
/// NOT guaranteed stable across store reloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRecord {
    pub id: i64,
    pub name: String,
}

/// A relationship together with its structural endpoints.
///
/// `start`/`end` are the relationship's stored direction, independent of how
/// the match pattern bound it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipRecord {
    pub start: NodeRecord,
    pub end: NodeRecord,
    pub name: String,
}

impl RelationshipRecord {
    /// Deserialize one row of the neighborhood query.
    ///
    /// Expects columns `start`, `end` (nodes with a `name` property) and
    /// `rel` (a relationship with a `name` property).
    pub fn from_row(row: &Row) -> Result<Self> {
        let start: Node = row.get("start")?;
        let end: Node = row.get("end")?;
        let rel: Relation = row.get("rel")?;

        Ok(Self {
            start: NodeRecord {
                id: start.id(),
                name: start.get("name")?,
            },
            end: NodeRecord {
                id: end.id(),
                name: end.get("name")?,
            },
            name: rel.get("name")?,
        })
    }
}
