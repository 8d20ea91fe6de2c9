//! Render Cypher query results as interactive vis.js network diagrams.
//!
//! [`draw`] runs the draw query against a [`GraphSource`], shapes the rows
//! into vis.js nodes and edges, and writes a standalone HTML [`Figure`].

pub mod config;
pub mod draw;
pub mod error;
pub mod graph;
pub mod query;
pub mod render;
pub mod shape;
pub mod style;

pub use config::{Config, Neo4jConfig, OutputConfig};
pub use draw::{DrawOptions, draw, fetch_graph};
pub use error::{Result, VizError};
pub use graph::{GraphSource, MemorySource, Neo4jClient, ResultRow, SourceNode, SourceRelationship};
pub use render::{Figure, clean_figures, write_figure};
pub use shape::{VisEdge, VisGraph, VisNode, shape_rows};
