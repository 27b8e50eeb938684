//! # TKG Graph
//!
//! Neo4j integration for the Travel Knowledge Graph loader.
//!
//! Provides the connection client, schema (constraint) initialization and
//! the ordered upsert pipeline that materializes the four tabular sources
//! as nodes and relationships.

pub mod client;
pub mod load;
pub mod schema;

pub use client::{GraphClient, GraphConfig, GraphCounts};
pub use load::{run_full_load, LoadResult};
