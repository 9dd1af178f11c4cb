//! HTTP API serving brain-atlas visualization data.
//!
//! Read-only surface: brain-surface geometry and annotation blobs, benchmark
//! histograms, region metadata, and the property-graph neighborhood search
//! from `atlas-graph`.

pub mod config;
pub mod datasets;
pub mod histogram;
pub mod routes;
