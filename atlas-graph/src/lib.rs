//! # atlas-graph
//!
//! Property-graph access layer for the brain-atlas visualization API.
//!
//! ## Architecture
//!
//! - **Driver abstraction**: [`driver::GraphDriver`] hides the concrete store;
//!   the Neo4j implementation talks Bolt via `neo4rs`
//! - **Typed wire records**: store rows deserialize into
//!   [`records::RelationshipRecord`] up front, so malformed data fails loudly
//!   instead of leaking into payload assembly
//! - **Neighborhood search**: [`search::precise_search`] turns a node name into
//!   a star-shaped `{center, nodes, links}` payload for force-directed rendering

pub mod driver;
pub mod errors;
pub mod records;
pub mod search;
pub mod types;

pub use errors::{AtlasGraphError, Result};
pub use types::GraphConfig;
